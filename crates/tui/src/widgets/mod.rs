//! Widget components for the preview.
//!
//! Each widget is a plain function that renders state into a buffer, so it
//! can be tested against a [`Buffer`](ratatui::buffer::Buffer) directly.
//!
//! - [`widget_view`]: draws a rendered widget view and records its tap targets
//! - [`status_bar`]: form factor, state, refresh countdown and last tap
//! - [`help`]: the key binding overlay
//!
//! # Tones
//!
//! | Tone | Color |
//! |------|-------|
//! | `success` | Green |
//! | `warning` | Yellow |
//! | `alert` | Red |
//! | none | Cyan |

pub mod help;
pub mod status_bar;
pub mod widget_view;

pub use help::render_help_overlay;
pub use status_bar::render_status_bar;
pub use widget_view::{HitMap, accent_color, render_widget_view, tone_color};
