//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to preview messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use lulu_widget_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to a preview message.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Only left-click presses are taps.
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to a preview message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` or `q` | Quit |
/// | `Right` or `Tab` | Next form factor |
/// | `Left` or `Shift+Tab` | Previous form factor |
/// | `Enter` or `Space` | Tap the widget |
/// | `r` | Reload the store |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Right | KeyCode::Tab => Some(Message::NextFormFactor),
        KeyCode::Left | KeyCode::BackTab => Some(Message::PrevFormFactor),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Activate),
        KeyCode::Char('r') => Some(Message::Reload),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, MouseEvent};

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), Some(Message::Quit));
    }

    #[test]
    fn form_factor_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NextFormFactor)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Tab)),
            Some(Message::NextFormFactor)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::PrevFormFactor)
        );
        assert_eq!(
            key_to_message(make_key_with_modifiers(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Message::PrevFormFactor)
        );
    }

    #[test]
    fn tap_and_other_keys() {
        assert_eq!(key_to_message(make_key(KeyCode::Enter)), Some(Message::Activate));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char(' '))),
            Some(Message::Activate)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('r'))), Some(Message::Reload));
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn unmapped_keys_return_none() {
        assert_eq!(key_to_message(make_key(KeyCode::Char('x'))), None);
        assert_eq!(key_to_message(make_key(KeyCode::Up)), None);
        assert_eq!(key_to_message(make_key(KeyCode::F(1))), None);
    }

    #[test]
    fn only_left_press_is_a_click() {
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5)),
            Some(Message::ClickAt { column: 10, row: 5 })
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Down(MouseButton::Right), 10, 5)),
            None
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Up(MouseButton::Left), 10, 5)),
            None
        );
        assert_eq!(
            mouse_to_message(&make_mouse(MouseEventKind::Moved, 10, 5)),
            None
        );
    }

    #[test]
    fn event_to_message_dispatches_by_kind() {
        assert_eq!(
            event_to_message(&Event::Key(make_key(KeyCode::Enter))),
            Some(Message::Activate)
        );
        assert_eq!(
            event_to_message(&Event::Mouse(make_mouse(
                MouseEventKind::Down(MouseButton::Left),
                15,
                8
            ))),
            Some(Message::ClickAt { column: 15, row: 8 })
        );
        assert_eq!(event_to_message(&Event::Resize(80, 24)), None);
    }
}
