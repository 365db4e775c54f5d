//! Layout measurements for the preview.
//!
//! Widget frames have a fixed size per form factor, roughly matching the
//! aspect ratio of the real surfaces, so switching form factors in the
//! preview feels like switching between home screen and lock screen.

use lulu_widget_protocol::FormFactor;
use ratatui::layout::Rect;

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Minimum terminal width for the preview (fits the medium widget).
pub const MIN_WIDTH: u16 = 60;

/// Minimum terminal height for the preview.
///
/// Fits the tallest widget frame between the header and the status bar.
pub const MIN_HEIGHT: u16 = HEADER_HEIGHT + STATUS_BAR_HEIGHT + 12;

/// Returns the outer size (width, height) of a widget frame, borders
/// included.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::FormFactor;
/// use lulu_widget_tui::layout::widget_size;
///
/// let (small_width, _) = widget_size(FormFactor::Small);
/// let (medium_width, _) = widget_size(FormFactor::Medium);
/// assert!(small_width < medium_width);
/// ```
#[must_use]
pub const fn widget_size(form_factor: FormFactor) -> (u16, u16) {
    match form_factor {
        FormFactor::Small => (26, 11),
        FormFactor::Medium => (56, 11),
        FormFactor::LockScreen => (34, 7),
    }
}

/// Creates a rectangle of the given size centered within `area`.
///
/// If the requested dimensions exceed the available area, the rectangle is
/// clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
