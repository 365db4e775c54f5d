//! State derivation: snapshot in, presentation model out.
//!
//! [`derive`] is a pure function. It picks one of three branches from the
//! snapshot's state and copies across only the fields that branch is allowed
//! to show, already formatted for display. The model has no identity beyond
//! a single render pass and is never stored.

use serde::Serialize;

use crate::action::WidgetAction;
use crate::snapshot::Snapshot;
use crate::state::{Tone, WidgetState};

/// Suffix appended to daily counts.
pub const COUNT_SUFFIX: char = '×';

/// What the widget shows for the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WidgetContent {
    /// Ask the parent to log the last wake time.
    Empty,
    /// A prediction is pending.
    Active(ActiveContent),
    /// The sweet spot is now.
    Urgent {
        /// Display-formatted sweet spot time.
        sweet_spot_time: String,
    },
}

/// Display fields of the `ACTIVE` branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveContent {
    /// Minutes until the sweet spot. `None` means the countdown is not drawn.
    pub minutes_remaining: Option<i32>,
    /// Display-formatted sweet spot time.
    pub sweet_spot_time: String,
    /// Urgency indicator tone. `None` means no indicator is drawn.
    pub indicator: Option<Tone>,
    /// Confidence as a percentage label, e.g. `85%`.
    pub confidence_label: Option<String>,
}

impl WidgetContent {
    /// Returns the state this content was derived from.
    #[must_use]
    pub const fn state(&self) -> WidgetState {
        match self {
            Self::Empty => WidgetState::Empty,
            Self::Active(_) => WidgetState::Active,
            Self::Urgent { .. } => WidgetState::Urgent,
        }
    }

    /// Returns the action of the state's main control.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::{WidgetAction, WidgetContent};
    ///
    /// assert_eq!(WidgetContent::Empty.primary_action(), WidgetAction::LogWake);
    /// ```
    #[must_use]
    pub const fn primary_action(&self) -> WidgetAction {
        match self {
            Self::Empty => WidgetAction::LogWake,
            Self::Active(_) | Self::Urgent { .. } => WidgetAction::LogSleep,
        }
    }

    /// Returns the tone hosts should use to accent this content.
    ///
    /// `URGENT` is always alert-toned without consulting the urgency level.
    #[must_use]
    pub fn accent(&self) -> Option<Tone> {
        match self {
            Self::Empty => None,
            Self::Active(active) => active.indicator,
            Self::Urgent { .. } => Some(Tone::Alert),
        }
    }
}

/// Today's counters, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    /// Hours slept, e.g. `12.5h`.
    pub sleep_hours: String,
    /// Feeds, e.g. `8×`.
    pub feeding_count: String,
    /// Diaper changes, e.g. `6×`.
    pub diaper_count: String,
}

/// Everything a renderer needs for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationModel {
    /// State-specific content.
    pub content: WidgetContent,
    /// Daily counters. Only form factors with room for them show them.
    pub summary: DailySummary,
    /// Display-formatted next feeding time.
    pub next_feeding_time: String,
}

/// Derives the presentation model from a snapshot.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::{
///     derive, Snapshot, Tone, UrgencyLevel, WidgetContent, WidgetState,
/// };
///
/// let snapshot = Snapshot {
///     state: WidgetState::Active,
///     urgency_level: Some(UrgencyLevel::Red),
///     minutes_remaining: Some(8),
///     next_sweet_spot_time: "14:30".to_string(),
///     ..Snapshot::default()
/// };
///
/// let model = derive(&snapshot);
/// let WidgetContent::Active(active) = &model.content else {
///     panic!("expected active content");
/// };
/// assert_eq!(active.minutes_remaining, Some(8));
/// assert_eq!(active.indicator, Some(Tone::Alert));
/// assert_eq!(model.summary.feeding_count, "0×");
/// ```
#[must_use]
pub fn derive(snapshot: &Snapshot) -> PresentationModel {
    let content = match snapshot.state {
        WidgetState::Empty => WidgetContent::Empty,
        WidgetState::Active => WidgetContent::Active(ActiveContent {
            minutes_remaining: snapshot.minutes_remaining,
            sweet_spot_time: snapshot.next_sweet_spot_time.clone(),
            indicator: snapshot.urgency_level.map(|level| level.tone()),
            confidence_label: snapshot.confidence_score.map(format_confidence),
        }),
        WidgetState::Urgent => WidgetContent::Urgent {
            sweet_spot_time: snapshot.next_sweet_spot_time.clone(),
        },
    };

    PresentationModel {
        content,
        summary: DailySummary {
            sleep_hours: format_sleep_hours(snapshot.total_sleep_hours),
            feeding_count: format_count(snapshot.total_feeding_count),
            diaper_count: format_count(snapshot.total_diaper_count),
        },
        next_feeding_time: snapshot.next_feeding_time.clone(),
    }
}

/// Formats hours with exactly one fractional digit.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::presentation::format_sleep_hours;
///
/// assert_eq!(format_sleep_hours(12.5), "12.5h");
/// assert_eq!(format_sleep_hours(3.0), "3.0h");
/// ```
#[must_use]
pub fn format_sleep_hours(hours: f64) -> String {
    format!("{hours:.1}h")
}

/// Formats a count as a bare integer with a multiplication sign.
#[must_use]
pub fn format_count(count: u32) -> String {
    format!("{count}{COUNT_SUFFIX}")
}

/// Formats a confidence score as a percentage.
#[must_use]
pub fn format_confidence(score: u8) -> String {
    format!("{score}%")
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::snapshot::proptest_tests::arb_snapshot;
    use proptest::prelude::*;

    proptest! {
        /// Deriving twice from the same snapshot yields identical models.
        #[test]
        fn derive_is_idempotent(snapshot in arb_snapshot()) {
            prop_assert_eq!(derive(&snapshot), derive(&snapshot));
        }

        /// The derived branch always matches the snapshot's state.
        #[test]
        fn derived_state_matches_snapshot(snapshot in arb_snapshot()) {
            prop_assert_eq!(derive(&snapshot).content.state(), snapshot.state);
        }

        /// An indicator is drawn in ACTIVE exactly when urgency is present.
        #[test]
        fn active_indicator_iff_urgency_present(snapshot in arb_snapshot()) {
            prop_assume!(snapshot.state == WidgetState::Active);
            let model = derive(&snapshot);
            prop_assert_eq!(
                model.content.accent(),
                snapshot.urgency_level.map(|l| l.tone())
            );
        }
    }
}
