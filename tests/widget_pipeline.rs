//! End-to-end tests of the widget pipeline: the app publishes a snapshot,
//! the widget reads it back, derives, renders and plans its next refresh.

use std::fs;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use lulu_widget_protocol::{
    FormFactor, RefreshPlan, RenderedView, Snapshot, TapRegion, Tone, UrgencyLevel, ViewElement,
    WidgetAction, WidgetState, derive, render,
};
use lulu_widget_store::{JsonFileStore, SnapshotReader, SnapshotWriter};
use tempfile::TempDir;

fn publish_and_render(
    snapshot: Option<&Snapshot>,
    form_factor: FormFactor,
) -> (RenderedView, RefreshPlan) {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("HomeWidgetPreferences.json"));
    if let Some(snapshot) = snapshot {
        SnapshotWriter::new(&store).publish(snapshot).unwrap();
    }

    let read = SnapshotReader::new(&store).read();
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 14, 22, 0).unwrap();
    (
        render(&derive(&read), form_factor),
        RefreshPlan::after(now, read.minutes_remaining),
    )
}

#[test]
fn empty_snapshot_prompts_for_wake_time() {
    let snapshot = Snapshot {
        state: WidgetState::Empty,
        ..Snapshot::default()
    };
    let (view, plan) = publish_and_render(Some(&snapshot), FormFactor::Small);

    assert_eq!(view.state, WidgetState::Empty);
    assert!(view.elements.contains(&ViewElement::Prompt {
        text: "When did baby wake up?".to_string()
    }));
    assert_eq!(view.tap_action(TapRegion::Widget), Some(WidgetAction::LogWake));
    assert_eq!(plan.delay, Duration::from_secs(15 * 60));
}

#[test]
fn imminent_sweet_spot_on_medium() {
    let snapshot = Snapshot {
        state: WidgetState::Active,
        minutes_remaining: Some(8),
        urgency_level: Some(UrgencyLevel::Red),
        next_sweet_spot_time: "14:30".to_string(),
        ..Snapshot::default()
    };
    let (view, plan) = publish_and_render(Some(&snapshot), FormFactor::Medium);

    assert_eq!(plan.delay, Duration::from_secs(5 * 60));
    assert_eq!(plan.refresh_at, Utc.with_ymd_and_hms(2025, 3, 1, 14, 27, 0).unwrap());
    assert!(view.elements.contains(&ViewElement::Countdown {
        value: "8".to_string(),
        unit: "min left".to_string()
    }));
    assert!(view.elements.contains(&ViewElement::Indicator { tone: Tone::Alert }));
    assert!(view.elements.contains(&ViewElement::Time {
        text: "14:30".to_string()
    }));
    assert!(view.has_summary());
    assert_eq!(view.tap_action(TapRegion::Widget), Some(WidgetAction::OpenApp));
}

#[test]
fn urgent_offers_prominent_sleep_regardless_of_minutes() {
    let snapshot = Snapshot {
        state: WidgetState::Urgent,
        minutes_remaining: Some(42),
        next_sweet_spot_time: "15:00".to_string(),
        ..Snapshot::default()
    };

    for form_factor in [FormFactor::Small, FormFactor::Medium] {
        let (view, _) = publish_and_render(Some(&snapshot), form_factor);
        assert!(!view.has_countdown(), "{form_factor}");
        assert!(view.elements.iter().any(|element| matches!(
            element,
            ViewElement::Button {
                action: WidgetAction::LogSleep,
                prominent: true,
                ..
            }
        )));
    }

    let (lock, _) = publish_and_render(Some(&snapshot), FormFactor::LockScreen);
    assert_eq!(lock.tap_action(TapRegion::Widget), Some(WidgetAction::LogSleep));
}

#[test]
fn distant_sweet_spot_refreshes_slowly() {
    let snapshot = Snapshot {
        state: WidgetState::Active,
        minutes_remaining: Some(42),
        ..Snapshot::default()
    };
    let (view, plan) = publish_and_render(Some(&snapshot), FormFactor::Small);

    assert_eq!(view.state, WidgetState::Active);
    assert_eq!(plan.delay, Duration::from_secs(15 * 60));
}

#[test]
fn missing_store_renders_like_empty() {
    let empty = Snapshot {
        state: WidgetState::Empty,
        ..Snapshot::default()
    };

    for form_factor in FormFactor::ALL {
        let (missing, missing_plan) = publish_and_render(None, form_factor);
        let (published, published_plan) = publish_and_render(Some(&empty), form_factor);
        assert_eq!(missing, published);
        assert_eq!(missing_plan, published_plan);
    }
}

#[test]
fn garbage_store_renders_like_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("HomeWidgetPreferences.json");
    fs::write(&path, "not json at all").unwrap();

    let snapshot = SnapshotReader::new(JsonFileStore::new(&path)).read();
    assert_eq!(snapshot, Snapshot::default());
    assert_eq!(derive(&snapshot).content.state(), WidgetState::Empty);
}

#[test]
fn deep_links_round_trip_through_the_app_contract() {
    let (view, _) = publish_and_render(None, FormFactor::Medium);
    for url in view.deep_links("lulu") {
        let action = WidgetAction::from_deep_link(&url, "lulu").unwrap();
        assert_eq!(action.deep_link("lulu"), url);
    }
}
