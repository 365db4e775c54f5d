//! Symbolic actions emitted by widget tap targets.
//!
//! A tap never navigates by itself. The host forwards the action identifier
//! to the app, usually as a deep link such as `lulu://log-sleep`, and the app
//! decides where to go.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// URL scheme the app registers for widget deep links.
pub const DEFAULT_SCHEME: &str = "lulu";

/// An action a widget control can trigger in the app.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::WidgetAction;
///
/// let action: WidgetAction = "log-sleep".parse().unwrap();
/// assert_eq!(action, WidgetAction::LogSleep);
/// assert_eq!(action.deep_link("lulu"), "lulu://log-sleep");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetAction {
    /// Record when the baby last woke up.
    LogWake,
    /// Record that the baby fell asleep.
    LogSleep,
    /// Record a feed.
    Feeding,
    /// Record a diaper change.
    Diaper,
    /// Open the app without a specific destination.
    OpenApp,
}

impl WidgetAction {
    /// Every action identifier.
    pub const ALL: [Self; 5] = [
        Self::LogWake,
        Self::LogSleep,
        Self::Feeding,
        Self::Diaper,
        Self::OpenApp,
    ];

    /// Returns the identifier sent to the app.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LogWake => "log-wake",
            Self::LogSleep => "log-sleep",
            Self::Feeding => "feeding",
            Self::Diaper => "diaper",
            Self::OpenApp => "open-app",
        }
    }

    /// Builds the deep link for this action under `scheme`.
    #[must_use]
    pub fn deep_link(self, scheme: &str) -> String {
        format!("{scheme}://{}", self.as_str())
    }

    /// Recovers the action from a launch URL.
    ///
    /// This is the app-side half of the contract. Returns `None` if the URL
    /// uses another scheme or names no known action. Query strings and
    /// trailing slashes are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::WidgetAction;
    ///
    /// assert_eq!(
    ///     WidgetAction::from_deep_link("lulu://diaper?source=widget", "lulu"),
    ///     Some(WidgetAction::Diaper)
    /// );
    /// assert_eq!(WidgetAction::from_deep_link("other://diaper", "lulu"), None);
    /// ```
    #[must_use]
    pub fn from_deep_link(url: &str, scheme: &str) -> Option<Self> {
        let (url_scheme, rest) = url.split_once("://")?;
        if !url_scheme.eq_ignore_ascii_case(scheme) {
            return None;
        }
        let target = rest.split(['?', '#']).next().unwrap_or_default();
        target.trim_end_matches('/').parse().ok()
    }
}

impl fmt::Display for WidgetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetAction {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownAction(s.to_string()))
    }
}
