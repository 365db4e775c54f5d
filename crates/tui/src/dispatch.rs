//! Handing tapped actions to the host.
//!
//! A tap on the widget becomes a deep link such as `lulu://log-sleep`. On a
//! phone the launcher opens the app with it; here the deep link is handed to
//! the operating system's URL handler.

use tracing::{debug, warn};

/// Opens deep links produced by widget taps.
pub trait ActionDispatcher {
    /// Hands `url` to the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refused or failed to open the URL.
    fn dispatch(&mut self, url: &str) -> std::io::Result<()>;
}

/// Dispatches deep links through the operating system's URL handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDispatcher;

impl ActionDispatcher for OsDispatcher {
    fn dispatch(&mut self, url: &str) -> std::io::Result<()> {
        debug!(url, "opening deep link");
        open::that_detached(url).inspect_err(|error| warn!(url, %error, "deep link failed"))
    }
}

/// Records deep links instead of opening them.
///
/// Used by tests and by the preview when no URL handler should be involved.
///
/// # Examples
///
/// ```
/// use lulu_widget_tui::{ActionDispatcher, RecordingDispatcher};
///
/// let mut dispatcher = RecordingDispatcher::default();
/// dispatcher.dispatch("lulu://feeding").unwrap();
/// assert_eq!(dispatcher.dispatched, vec!["lulu://feeding".to_string()]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingDispatcher {
    /// Every URL dispatched so far, oldest first.
    pub dispatched: Vec<String>,
    /// When set, every dispatch fails.
    pub fail: bool,
}

impl ActionDispatcher for RecordingDispatcher {
    fn dispatch(&mut self, url: &str) -> std::io::Result<()> {
        if self.fail {
            return Err(std::io::Error::other("dispatch disabled"));
        }
        self.dispatched.push(url.to_string());
        Ok(())
    }
}
