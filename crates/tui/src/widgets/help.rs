//! Help overlay widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 44;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 17;

/// Key bindings shown in the overlay, grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Form factor",
        &[("← / →", "Previous / next"), ("Tab", "Next")],
    ),
    (
        "Widget",
        &[
            ("Enter", "Tap the widget"),
            ("Click", "Tap a button or the widget"),
            ("r", "Reload the store now"),
        ],
    ),
    (
        "Preview",
        &[("?", "Toggle help"), ("q / Ctrl+C", "Quit")],
    ),
];

/// Renders a centered help overlay listing the key bindings.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use lulu_widget_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        for (key, description) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<12}"), key_style),
                Span::styled(*description, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}
