//! Discrete widget states and urgency tiers.
//!
//! The application writes these as loosely-typed strings. This module turns
//! them into closed enums and owns the fallback rule: anything unrecognized
//! becomes [`WidgetState::Empty`] or an absent urgency. The fallback is applied
//! here and nowhere else; rendering code only ever sees the enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Which of the three mutually exclusive presentations the widget shows.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::WidgetState;
///
/// assert_eq!(WidgetState::parse_lenient(Some("active")), WidgetState::Active);
/// assert_eq!(WidgetState::parse_lenient(Some("napping")), WidgetState::Empty);
/// assert_eq!(WidgetState::parse_lenient(None), WidgetState::Empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetState {
    /// No prediction yet; the widget asks for the last wake time.
    #[default]
    Empty,
    /// A sweet spot is predicted and still ahead.
    Active,
    /// The sweet spot is now.
    Urgent,
}

impl WidgetState {
    /// Every state, in wire order.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Active, Self::Urgent];

    /// Returns the wire representation (`EMPTY`, `ACTIVE`, `URGENT`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "EMPTY",
            Self::Active => "ACTIVE",
            Self::Urgent => "URGENT",
        }
    }

    /// Parses a raw wire value, resolving absent or unknown input to `Empty`.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WidgetState {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProtocolError::UnknownState(s.to_string()))
    }
}

/// How close the predicted sweet spot is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyLevel {
    /// Plenty of time left.
    Green,
    /// Getting close.
    Yellow,
    /// Imminent.
    Red,
}

impl UrgencyLevel {
    /// Every urgency level, from least to most urgent.
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Red];

    /// Returns the wire representation (`GREEN`, `YELLOW`, `RED`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }

    /// Returns the indicator tone for this level.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::{Tone, UrgencyLevel};
    ///
    /// assert_eq!(UrgencyLevel::Green.tone(), Tone::Success);
    /// assert_eq!(UrgencyLevel::Yellow.tone(), Tone::Warning);
    /// assert_eq!(UrgencyLevel::Red.tone(), Tone::Alert);
    /// ```
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Green => Tone::Success,
            Self::Yellow => Tone::Warning,
            Self::Red => Tone::Alert,
        }
    }

    /// Parses a raw wire value, resolving absent or unknown input to `None`.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|s| s.parse().ok())
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProtocolError::UnknownUrgency(s.to_string()))
    }
}

/// Semantic color class of the urgency indicator.
///
/// Hosts map tones to their own palette; the protocol never names colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Calm, on track.
    Success,
    /// Attention soon.
    Warning,
    /// Act now.
    Alert,
}

impl Tone {
    /// Returns a lowercase name for this tone.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Alert => "alert",
        }
    }
}

/// Legacy next-action kind, written by older app versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextActionType {
    /// The next expected activity is sleep.
    #[default]
    Sleep,
    /// The next expected activity is a feed.
    Feeding,
}

impl NextActionType {
    /// Returns the wire representation (`sleep`, `feeding`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Feeding => "feeding",
        }
    }

    /// Parses a raw wire value. Anything other than `feeding` means sleep.
    #[must_use]
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("feeding") => Self::Feeding,
            _ => Self::Sleep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_state_default_is_empty() {
        assert_eq!(WidgetState::default(), WidgetState::Empty);
    }

    #[test]
    fn widget_state_parse_is_case_insensitive() {
        assert_eq!("ACTIVE".parse::<WidgetState>(), Ok(WidgetState::Active));
        assert_eq!("urgent".parse::<WidgetState>(), Ok(WidgetState::Urgent));
        assert_eq!(" Empty ".parse::<WidgetState>(), Ok(WidgetState::Empty));
    }

    #[test]
    fn widget_state_strict_parse_rejects_unknown() {
        assert_eq!(
            "SLEEPING".parse::<WidgetState>(),
            Err(ProtocolError::UnknownState("SLEEPING".to_string()))
        );
    }

    #[test]
    fn widget_state_lenient_parse_falls_back() {
        assert_eq!(WidgetState::parse_lenient(Some("")), WidgetState::Empty);
        assert_eq!(WidgetState::parse_lenient(Some("URGENT!")), WidgetState::Empty);
        assert_eq!(WidgetState::parse_lenient(None), WidgetState::Empty);
    }

    #[test]
    fn urgency_lenient_parse_is_absent_for_unknown() {
        assert_eq!(UrgencyLevel::parse_lenient(Some("red")), Some(UrgencyLevel::Red));
        assert_eq!(UrgencyLevel::parse_lenient(Some("ORANGE")), None);
        assert_eq!(UrgencyLevel::parse_lenient(None), None);
    }

    #[test]
    fn urgency_tone_mapping_is_total() {
        let tones: Vec<Tone> = UrgencyLevel::ALL.iter().map(|l| l.tone()).collect();
        assert_eq!(tones, vec![Tone::Success, Tone::Warning, Tone::Alert]);
    }

    #[test]
    fn widget_state_json_format() {
        let json = serde_json::to_string(&WidgetState::Urgent).expect("serialize");
        assert_eq!(json, r#""URGENT""#);
    }

    #[test]
    fn next_action_type_lenient() {
        assert_eq!(NextActionType::parse_lenient(Some("feeding")), NextActionType::Feeding);
        assert_eq!(NextActionType::parse_lenient(Some("diaper")), NextActionType::Sleep);
        assert_eq!(NextActionType::parse_lenient(None), NextActionType::Sleep);
    }
}
