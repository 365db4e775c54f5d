//! Wire key names of the snapshot key-value store.
//!
//! These names are the contract between the app, which writes them, and
//! every widget host, which reads them. They follow the home-widget plugin
//! convention of a `widget_` prefix with snake_case names.

/// Android shared preferences file the app writes into.
pub const ANDROID_PREFS_NAME: &str = "HomeWidgetPreferences";

/// iOS app group shared between the app and the widget extension.
pub const IOS_APP_GROUP: &str = "group.com.lulu.babytracker";

/// Widget state (`EMPTY`, `ACTIVE`, `URGENT`).
pub const STATE: &str = "widget_state";
/// Urgency tier (`GREEN`, `YELLOW`, `RED`).
pub const URGENCY_LEVEL: &str = "widget_urgency_level";
/// Minutes until the sweet spot.
pub const MINUTES_REMAINING: &str = "widget_minutes_remaining";
/// Prediction confidence, 0 to 100.
pub const CONFIDENCE_SCORE: &str = "widget_confidence_score";
/// Display-formatted sweet spot time.
pub const NEXT_SWEET_SPOT_TIME: &str = "widget_next_sweet_spot_time";
/// Legacy progress gauge value.
pub const SWEET_SPOT_PROGRESS: &str = "widget_sweet_spot_progress";
/// Hours slept today.
pub const TOTAL_SLEEP_HOURS: &str = "widget_total_sleep_hours";
/// Feeds logged today.
pub const TOTAL_FEEDING_COUNT: &str = "widget_total_feeding_count";
/// Diapers logged today.
pub const TOTAL_DIAPER_COUNT: &str = "widget_total_diaper_count";
/// Display-formatted next feeding time.
pub const NEXT_FEEDING_TIME: &str = "widget_next_feeding_time";
/// Legacy next action kind (`sleep`, `feeding`).
pub const NEXT_ACTION_TYPE: &str = "widget_next_action_type";
/// Legacy next action time.
pub const NEXT_ACTION_TIME: &str = "widget_next_action_time";
/// Legacy minutes until the next action.
pub const NEXT_ACTION_MINUTES: &str = "widget_next_action_minutes";

/// Older name of [`MINUTES_REMAINING`], still written by shipped app builds.
///
/// Read only when the primary key is absent; never written.
pub const MINUTES_UNTIL_SWEET_SPOT: &str = "widget_minutes_until_sweet_spot";

/// Keys accepted on read in place of a schema key.
pub const READ_ALIASES: &[&str] = &[MINUTES_UNTIL_SWEET_SPOT];

/// Every key of the snapshot schema.
pub const ALL: &[&str] = &[
    STATE,
    URGENCY_LEVEL,
    MINUTES_REMAINING,
    CONFIDENCE_SCORE,
    NEXT_SWEET_SPOT_TIME,
    SWEET_SPOT_PROGRESS,
    TOTAL_SLEEP_HOURS,
    TOTAL_FEEDING_COUNT,
    TOTAL_DIAPER_COUNT,
    NEXT_FEEDING_TIME,
    NEXT_ACTION_TYPE,
    NEXT_ACTION_TIME,
    NEXT_ACTION_MINUTES,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique_and_prefixed() {
        let unique: HashSet<_> = ALL.iter().collect();
        assert_eq!(unique.len(), ALL.len());
        assert!(ALL.iter().all(|k| k.starts_with("widget_")));
    }

    #[test]
    fn aliases_are_not_schema_keys() {
        assert!(READ_ALIASES.iter().all(|alias| !ALL.contains(alias)));
    }
}
