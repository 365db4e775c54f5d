//! Adaptive refresh cadence.
//!
//! Refreshing costs battery and OS scheduling budget, while a stale widget
//! matters most right before the predicted sweet spot. The policy is a step
//! function that tightens as the sweet spot approaches:
//!
//! | minutes remaining | next refresh |
//! |-------------------|--------------|
//! | below 15          | 5 minutes    |
//! | below 30          | 10 minutes   |
//! | otherwise, or unknown | 15 minutes |
//!
//! Hosts own the actual scheduling facility (alarm, timeline reload); this
//! module only computes when.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Below this many minutes the widget refreshes every [`IMMINENT_DELAY`].
pub const IMMINENT_THRESHOLD_MINUTES: i32 = 15;

/// Below this many minutes the widget refreshes every [`APPROACHING_DELAY`].
pub const APPROACHING_THRESHOLD_MINUTES: i32 = 30;

/// Refresh delay when the sweet spot is imminent.
pub const IMMINENT_DELAY: Duration = Duration::from_secs(5 * 60);

/// Refresh delay when the sweet spot is approaching.
pub const APPROACHING_DELAY: Duration = Duration::from_secs(10 * 60);

/// Refresh delay otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(15 * 60);

/// Returns how long to wait before the next refresh.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use lulu_widget_protocol::next_refresh_delay;
///
/// assert_eq!(next_refresh_delay(Some(8)), Duration::from_secs(300));
/// assert_eq!(next_refresh_delay(Some(20)), Duration::from_secs(600));
/// assert_eq!(next_refresh_delay(Some(42)), Duration::from_secs(900));
/// assert_eq!(next_refresh_delay(None), Duration::from_secs(900));
/// ```
#[must_use]
pub fn next_refresh_delay(minutes_remaining: Option<i32>) -> Duration {
    match minutes_remaining {
        Some(m) if m < IMMINENT_THRESHOLD_MINUTES => IMMINENT_DELAY,
        Some(m) if m < APPROACHING_THRESHOLD_MINUTES => APPROACHING_DELAY,
        _ => DEFAULT_DELAY,
    }
}

/// A single-entry timeline: render now, refresh at `refresh_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshPlan {
    /// When the current entry was rendered.
    pub rendered_at: DateTime<Utc>,
    /// Delay until the next refresh.
    #[serde(serialize_with = "serialize_secs")]
    pub delay: Duration,
    /// When the next refresh should happen.
    pub refresh_at: DateTime<Utc>,
}

impl RefreshPlan {
    /// Plans the next refresh for an entry rendered at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use lulu_widget_protocol::RefreshPlan;
    ///
    /// let now = Utc.with_ymd_and_hms(2025, 3, 1, 14, 22, 0).unwrap();
    /// let plan = RefreshPlan::after(now, Some(8));
    /// assert_eq!(plan.refresh_at, Utc.with_ymd_and_hms(2025, 3, 1, 14, 27, 0).unwrap());
    /// ```
    #[must_use]
    pub fn after(now: DateTime<Utc>, minutes_remaining: Option<i32>) -> Self {
        let delay = next_refresh_delay(minutes_remaining);
        // The policy delays are small constants, so the conversion cannot overflow.
        let step = chrono::Duration::from_std(delay).unwrap_or(chrono::Duration::zero());
        Self {
            rendered_at: now,
            delay,
            refresh_at: now + step,
        }
    }

    /// Returns `true` once `now` has reached the planned refresh time.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now >= self.refresh_at
    }

    /// Returns the time left until the refresh, or zero if it is due.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.refresh_at
            .signed_duration_since(now)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

fn serialize_secs<S: serde::Serializer>(delay: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(delay.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(next_refresh_delay(Some(14)), IMMINENT_DELAY);
        assert_eq!(next_refresh_delay(Some(15)), APPROACHING_DELAY);
        assert_eq!(next_refresh_delay(Some(29)), APPROACHING_DELAY);
        assert_eq!(next_refresh_delay(Some(30)), DEFAULT_DELAY);
    }

    #[test]
    fn overdue_predictions_refresh_fastest() {
        assert_eq!(next_refresh_delay(Some(-10)), IMMINENT_DELAY);
        assert_eq!(next_refresh_delay(Some(i32::MIN)), IMMINENT_DELAY);
    }

    #[test]
    fn absent_minutes_use_default() {
        assert_eq!(next_refresh_delay(None), DEFAULT_DELAY);
    }

    #[test]
    fn plan_due_and_remaining() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let plan = RefreshPlan::after(now, Some(20));

        assert_eq!(plan.delay, APPROACHING_DELAY);
        assert!(!plan.is_due(now));
        assert_eq!(plan.remaining(now), APPROACHING_DELAY);

        let later = now + chrono::Duration::minutes(10);
        assert!(plan.is_due(later));
        assert_eq!(plan.remaining(later), Duration::ZERO);
        assert_eq!(plan.remaining(later + chrono::Duration::minutes(1)), Duration::ZERO);
    }

    #[test]
    fn plan_json_reports_seconds() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap();
        let json = serde_json::to_value(RefreshPlan::after(now, None)).expect("serialize");
        assert_eq!(json["delay"], 900);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Fewer minutes remaining never yields a longer delay.
        #[test]
        fn delay_is_monotonic(a in any::<i32>(), b in any::<i32>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(next_refresh_delay(Some(lo)) <= next_refresh_delay(Some(hi)));
        }

        /// A known prediction never refreshes slower than an unknown one.
        #[test]
        fn unknown_is_the_slowest(m in any::<i32>()) {
            prop_assert!(next_refresh_delay(Some(m)) <= next_refresh_delay(None));
        }
    }
}
