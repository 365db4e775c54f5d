//! The cross-process snapshot written by the app and read by widget hosts.
//!
//! On the wire a snapshot is a flat key-value map (see [`keys`](crate::keys)).
//! [`Snapshot::from_entries`] is the parsing boundary: it never fails, and
//! every missing, mistyped or out-of-range value resolves to the documented
//! default for its field. Optional fields stay `None` when absent so that
//! "not yet known" is never confused with zero.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::keys;
use crate::state::{NextActionType, UrgencyLevel, WidgetState};

/// Raw key-value entries as stored by the platform store.
pub type Entries = serde_json::Map<String, Value>;

/// Display string used when the app has not written a time yet.
pub const DEFAULT_TIME: &str = "00:00";

/// Highest valid confidence score.
pub const MAX_CONFIDENCE: u8 = 100;

/// Fields kept for app versions that predate the state/urgency model.
///
/// They are parsed and written back unchanged but never drive rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFields {
    /// Kind of the next expected activity.
    pub next_action_type: NextActionType,
    /// Display time of the next expected activity.
    pub next_action_time: String,
    /// Minutes until the next expected activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_minutes: Option<i32>,
}

impl Default for LegacyFields {
    fn default() -> Self {
        Self {
            next_action_type: NextActionType::default(),
            next_action_time: DEFAULT_TIME.to_string(),
            next_action_minutes: None,
        }
    }
}

/// The latest widget data published by the app.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::{Entries, Snapshot, WidgetState};
///
/// // A store the app never wrote to reads as the default snapshot.
/// let snapshot = Snapshot::from_entries(&Entries::new());
/// assert_eq!(snapshot, Snapshot::default());
/// assert_eq!(snapshot.state, WidgetState::Empty);
/// assert_eq!(snapshot.next_sweet_spot_time, "00:00");
/// assert!(snapshot.minutes_remaining.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    /// Which presentation to show.
    pub state: WidgetState,
    /// Urgency tier of the prediction, if the app supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    /// Minutes until the sweet spot, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_remaining: Option<i32>,
    /// Prediction confidence in percent, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<u8>,
    /// Display-formatted sweet spot time.
    pub next_sweet_spot_time: String,
    /// Legacy progress gauge value in `0.0..=1.0`.
    pub sweet_spot_progress: f64,
    /// Hours slept today.
    pub total_sleep_hours: f64,
    /// Feeds logged today.
    pub total_feeding_count: u32,
    /// Diapers logged today.
    pub total_diaper_count: u32,
    /// Display-formatted next feeding time.
    pub next_feeding_time: String,
    /// Pre-state-model fields.
    pub legacy: LegacyFields,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            state: WidgetState::Empty,
            urgency_level: None,
            minutes_remaining: None,
            confidence_score: None,
            next_sweet_spot_time: DEFAULT_TIME.to_string(),
            sweet_spot_progress: 0.0,
            total_sleep_hours: 0.0,
            total_feeding_count: 0,
            total_diaper_count: 0,
            next_feeding_time: DEFAULT_TIME.to_string(),
            legacy: LegacyFields::default(),
        }
    }
}

impl Snapshot {
    /// Builds a snapshot from one read of the store's entries.
    ///
    /// All fields come from the same `entries` map, so they reflect a single
    /// write by the app.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::{Entries, Snapshot, UrgencyLevel, WidgetState};
    /// use serde_json::json;
    ///
    /// let entries: Entries = serde_json::from_value(json!({
    ///     "widget_state": "ACTIVE",
    ///     "widget_urgency_level": "RED",
    ///     "widget_minutes_remaining": 8,
    ///     "widget_confidence_score": 250,
    ///     "widget_next_sweet_spot_time": "14:30",
    /// })).unwrap();
    ///
    /// let snapshot = Snapshot::from_entries(&entries);
    /// assert_eq!(snapshot.state, WidgetState::Active);
    /// assert_eq!(snapshot.urgency_level, Some(UrgencyLevel::Red));
    /// assert_eq!(snapshot.minutes_remaining, Some(8));
    /// // Out of range, so treated as unknown
    /// assert_eq!(snapshot.confidence_score, None);
    /// ```
    #[must_use]
    pub fn from_entries(entries: &Entries) -> Self {
        Self {
            state: WidgetState::parse_lenient(read_str(entries, keys::STATE)),
            urgency_level: UrgencyLevel::parse_lenient(read_str(entries, keys::URGENCY_LEVEL)),
            minutes_remaining: read_minutes_remaining(entries),
            confidence_score: read_int(entries, keys::CONFIDENCE_SCORE)
                .and_then(|c| u8::try_from(c).ok())
                .filter(|c| *c <= MAX_CONFIDENCE),
            next_sweet_spot_time: read_time(entries, keys::NEXT_SWEET_SPOT_TIME),
            sweet_spot_progress: read_float(entries, keys::SWEET_SPOT_PROGRESS)
                .map_or(0.0, |p| p.clamp(0.0, 1.0)),
            total_sleep_hours: read_float(entries, keys::TOTAL_SLEEP_HOURS)
                .filter(|h| *h >= 0.0)
                .unwrap_or(0.0),
            total_feeding_count: read_count(entries, keys::TOTAL_FEEDING_COUNT),
            total_diaper_count: read_count(entries, keys::TOTAL_DIAPER_COUNT),
            next_feeding_time: read_time(entries, keys::NEXT_FEEDING_TIME),
            legacy: LegacyFields {
                next_action_type: NextActionType::parse_lenient(read_str(
                    entries,
                    keys::NEXT_ACTION_TYPE,
                )),
                next_action_time: read_time(entries, keys::NEXT_ACTION_TIME),
                next_action_minutes: read_int(entries, keys::NEXT_ACTION_MINUTES)
                    .and_then(|m| i32::try_from(m).ok()),
            },
        }
    }

    /// Converts the snapshot back into store entries.
    ///
    /// Absent optional fields are omitted rather than written as zero, so a
    /// write followed by a read preserves absence.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::{keys, Snapshot};
    ///
    /// let entries = Snapshot::default().to_entries();
    /// assert_eq!(entries[keys::STATE], "EMPTY");
    /// assert!(!entries.contains_key(keys::MINUTES_REMAINING));
    /// ```
    #[must_use]
    pub fn to_entries(&self) -> Entries {
        let mut entries = Entries::new();
        let mut put = |key: &str, value: Value| {
            entries.insert(key.to_string(), value);
        };

        put(keys::STATE, self.state.as_str().into());
        if let Some(level) = self.urgency_level {
            put(keys::URGENCY_LEVEL, level.as_str().into());
        }
        if let Some(minutes) = self.minutes_remaining {
            put(keys::MINUTES_REMAINING, minutes.into());
        }
        if let Some(score) = self.confidence_score {
            put(keys::CONFIDENCE_SCORE, score.into());
        }
        put(keys::NEXT_SWEET_SPOT_TIME, self.next_sweet_spot_time.clone().into());
        put(keys::SWEET_SPOT_PROGRESS, self.sweet_spot_progress.into());
        put(keys::TOTAL_SLEEP_HOURS, self.total_sleep_hours.into());
        put(keys::TOTAL_FEEDING_COUNT, self.total_feeding_count.into());
        put(keys::TOTAL_DIAPER_COUNT, self.total_diaper_count.into());
        put(keys::NEXT_FEEDING_TIME, self.next_feeding_time.clone().into());
        put(keys::NEXT_ACTION_TYPE, self.legacy.next_action_type.as_str().into());
        put(keys::NEXT_ACTION_TIME, self.legacy.next_action_time.clone().into());
        if let Some(minutes) = self.legacy.next_action_minutes {
            put(keys::NEXT_ACTION_MINUTES, minutes.into());
        }

        entries
    }
}

/// Prefers the schema key; falls back to the older key only when the
/// schema key is missing entirely.
fn read_minutes_remaining(entries: &Entries) -> Option<i32> {
    let key = if entries.contains_key(keys::MINUTES_REMAINING) {
        keys::MINUTES_REMAINING
    } else {
        keys::MINUTES_UNTIL_SWEET_SPOT
    };
    read_int(entries, key).and_then(|m| i32::try_from(m).ok())
}

fn read_str<'a>(entries: &'a Entries, key: &str) -> Option<&'a str> {
    entries.get(key)?.as_str()
}

fn read_time(entries: &Entries, key: &str) -> String {
    read_str(entries, key)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_TIME)
        .to_string()
}

/// Reads an integer, accepting integral floats and numeric strings.
fn read_int(entries: &Entries, key: &str) -> Option<i64> {
    match entries.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| (i64::MIN as f64..=i64::MAX as f64).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_float(entries: &Entries, key: &str) -> Option<f64> {
    let value = match entries.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    value.filter(|f: &f64| f.is_finite())
}

fn read_count(entries: &Entries, key: &str) -> u32 {
    read_int(entries, key)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(value: Value) -> Entries {
        serde_json::from_value(value).expect("object")
    }

    #[test]
    fn empty_entries_give_defaults() {
        let snapshot = Snapshot::from_entries(&Entries::new());
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn unknown_state_resolves_to_empty() {
        let snapshot = Snapshot::from_entries(&entries(json!({ "widget_state": "NAPPING" })));
        assert_eq!(snapshot.state, WidgetState::Empty);
    }

    #[test]
    fn non_string_state_resolves_to_empty() {
        let snapshot = Snapshot::from_entries(&entries(json!({ "widget_state": 2 })));
        assert_eq!(snapshot.state, WidgetState::Empty);
    }

    #[test]
    fn zero_minutes_is_distinct_from_absent() {
        let present = Snapshot::from_entries(&entries(json!({ "widget_minutes_remaining": 0 })));
        let absent = Snapshot::from_entries(&Entries::new());
        assert_eq!(present.minutes_remaining, Some(0));
        assert_eq!(absent.minutes_remaining, None);
    }

    #[test]
    fn integers_accept_integral_floats_and_strings() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_minutes_remaining": 12.0,
            "widget_total_feeding_count": "7",
            "widget_confidence_score": " 85 ",
        })));
        assert_eq!(snapshot.minutes_remaining, Some(12));
        assert_eq!(snapshot.total_feeding_count, 7);
        assert_eq!(snapshot.confidence_score, Some(85));
    }

    #[test]
    fn older_minutes_key_is_read() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_state": "ACTIVE",
            "widget_minutes_until_sweet_spot": 8,
        })));
        assert_eq!(snapshot.minutes_remaining, Some(8));
        assert_eq!(
            crate::refresh::next_refresh_delay(snapshot.minutes_remaining),
            std::time::Duration::from_secs(5 * 60)
        );
    }

    #[test]
    fn current_minutes_key_wins_over_older_key() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_minutes_remaining": 20,
            "widget_minutes_until_sweet_spot": 8,
        })));
        assert_eq!(snapshot.minutes_remaining, Some(20));

        let written = snapshot.to_entries();
        assert!(!written.contains_key(keys::MINUTES_UNTIL_SWEET_SPOT));
    }

    #[test]
    fn fractional_minutes_are_malformed() {
        let snapshot =
            Snapshot::from_entries(&entries(json!({ "widget_minutes_remaining": 12.5 })));
        assert_eq!(snapshot.minutes_remaining, None);
    }

    #[test]
    fn negative_minutes_are_kept() {
        let snapshot = Snapshot::from_entries(&entries(json!({ "widget_minutes_remaining": -3 })));
        assert_eq!(snapshot.minutes_remaining, Some(-3));
    }

    #[test]
    fn out_of_range_values_fall_back() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_confidence_score": 101,
            "widget_total_diaper_count": -1,
            "widget_total_sleep_hours": -2.5,
            "widget_sweet_spot_progress": 1.7,
        })));
        assert_eq!(snapshot.confidence_score, None);
        assert_eq!(snapshot.total_diaper_count, 0);
        assert_eq!(snapshot.total_sleep_hours, 0.0);
        assert_eq!(snapshot.sweet_spot_progress, 1.0);
    }

    #[test]
    fn blank_times_use_default() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_next_sweet_spot_time": "   ",
            "widget_next_feeding_time": null,
        })));
        assert_eq!(snapshot.next_sweet_spot_time, DEFAULT_TIME);
        assert_eq!(snapshot.next_feeding_time, DEFAULT_TIME);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_is_urgent": true,
            "flutter.something": "x",
        })));
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn legacy_fields_are_parsed() {
        let snapshot = Snapshot::from_entries(&entries(json!({
            "widget_next_action_type": "feeding",
            "widget_next_action_time": "15:45",
            "widget_next_action_minutes": 40,
        })));
        assert_eq!(snapshot.legacy.next_action_type, NextActionType::Feeding);
        assert_eq!(snapshot.legacy.next_action_time, "15:45");
        assert_eq!(snapshot.legacy.next_action_minutes, Some(40));
    }

    #[test]
    fn to_entries_omits_absent_optionals() {
        let entries = Snapshot::default().to_entries();
        assert!(!entries.contains_key(keys::URGENCY_LEVEL));
        assert!(!entries.contains_key(keys::MINUTES_REMAINING));
        assert!(!entries.contains_key(keys::CONFIDENCE_SCORE));
        assert!(!entries.contains_key(keys::NEXT_ACTION_MINUTES));
        assert_eq!(entries[keys::NEXT_SWEET_SPOT_TIME], "00:00");
    }

    #[test]
    fn to_entries_uses_only_schema_keys() {
        let snapshot = Snapshot {
            state: WidgetState::Active,
            urgency_level: Some(UrgencyLevel::Yellow),
            minutes_remaining: Some(20),
            confidence_score: Some(70),
            legacy: LegacyFields {
                next_action_minutes: Some(20),
                ..LegacyFields::default()
            },
            ..Snapshot::default()
        };
        let entries = snapshot.to_entries();
        assert_eq!(entries.len(), keys::ALL.len());
        assert!(entries.keys().all(|k| keys::ALL.contains(&k.as_str())));
    }

    #[test]
    fn camel_case_json_format() {
        let snapshot = Snapshot {
            minutes_remaining: Some(5),
            ..Snapshot::default()
        };
        let json = serde_json::to_value(&snapshot).expect("serialize");
        assert_eq!(json["minutesRemaining"], 5);
        assert_eq!(json["nextSweetSpotTime"], "00:00");
        assert!(json.get("urgencyLevel").is_none());
    }
}
