//! Sample snapshots for previews, tests and the `publish --sample` command.
//!
//! The values mirror the placeholder entry widget hosts show in their
//! gallery before the app has written anything.
//!
//! # Examples
//!
//! ```
//! use lulu_widget_protocol::dummy::sample_snapshot;
//! use lulu_widget_protocol::WidgetState;
//!
//! let snapshot = sample_snapshot(WidgetState::Active);
//! assert_eq!(snapshot.next_sweet_spot_time, "14:30");
//! ```

use crate::snapshot::Snapshot;
use crate::state::{UrgencyLevel, WidgetState};

/// A builder for sample snapshots.
///
/// Starts from the gallery placeholder and lets callers override the fields
/// that differ between states.
struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    /// Creates a builder seeded with the gallery placeholder.
    fn placeholder() -> Self {
        Self {
            snapshot: Snapshot {
                state: WidgetState::Active,
                urgency_level: Some(UrgencyLevel::Yellow),
                minutes_remaining: Some(52),
                confidence_score: Some(85),
                next_sweet_spot_time: "14:30".to_string(),
                sweet_spot_progress: 0.65,
                total_sleep_hours: 12.5,
                total_feeding_count: 8,
                total_diaper_count: 6,
                next_feeding_time: "15:45".to_string(),
                ..Snapshot::default()
            },
        }
    }

    fn state(mut self, state: WidgetState) -> Self {
        self.snapshot.state = state;
        self
    }

    fn urgency(mut self, urgency: Option<UrgencyLevel>) -> Self {
        self.snapshot.urgency_level = urgency;
        self
    }

    fn minutes(mut self, minutes: Option<i32>) -> Self {
        self.snapshot.minutes_remaining = minutes;
        self
    }

    fn progress(mut self, progress: f64) -> Self {
        self.snapshot.sweet_spot_progress = progress;
        self
    }

    fn build(self) -> Snapshot {
        self.snapshot
    }
}

/// Returns the gallery placeholder: an `ACTIVE` prediction 52 minutes out.
#[must_use]
pub fn placeholder_snapshot() -> Snapshot {
    SnapshotBuilder::placeholder().build()
}

/// Returns a representative snapshot for `state`.
///
/// - `EMPTY`: no prediction, today's counters only
/// - `ACTIVE`: the gallery placeholder
/// - `URGENT`: the sweet spot is due, red urgency
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::dummy::sample_snapshot;
/// use lulu_widget_protocol::{derive, WidgetState};
///
/// for state in WidgetState::ALL {
///     assert_eq!(derive(&sample_snapshot(state)).content.state(), state);
/// }
/// ```
#[must_use]
pub fn sample_snapshot(state: WidgetState) -> Snapshot {
    match state {
        WidgetState::Empty => SnapshotBuilder::placeholder()
            .state(WidgetState::Empty)
            .urgency(None)
            .minutes(None)
            .progress(0.0)
            .build(),
        WidgetState::Active => placeholder_snapshot(),
        WidgetState::Urgent => SnapshotBuilder::placeholder()
            .state(WidgetState::Urgent)
            .urgency(Some(UrgencyLevel::Red))
            .minutes(Some(0))
            .progress(1.0)
            .build(),
    }
}
