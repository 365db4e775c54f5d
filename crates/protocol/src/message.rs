//! Preview host message types.
//!
//! The terminal preview translates input events into these messages and
//! feeds them to its update function.

use serde::{Deserialize, Serialize};

/// Messages that represent user input in the terminal preview.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::Message;
///
/// let msg = Message::NextFormFactor;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the preview.
    Quit,
    /// Show the next form factor.
    NextFormFactor,
    /// Show the previous form factor.
    PrevFormFactor,
    /// Re-read the store now instead of waiting for the scheduled refresh.
    Reload,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Tap the whole widget, as if the user pressed it outside any button.
    Activate,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },
}

impl Message {
    /// Returns `true` if this message switches the displayed form factor.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::NextFormFactor | Self::PrevFormFactor)
    }

    /// Returns `true` if this message should terminate the preview.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Reload.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message may dispatch a widget action.
    #[must_use]
    pub fn is_tap(&self) -> bool {
        matches!(self, Self::Activate | Self::ClickAt { .. })
    }
}
