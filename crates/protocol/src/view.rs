//! Host-agnostic rendering of a presentation model.
//!
//! [`render`] turns a [`PresentationModel`] into a [`RenderedView`]: an
//! ordered list of view elements plus the tap targets the host must register.
//! Hosts map elements to their native primitives and never re-derive anything
//! from the snapshot themselves.
//!
//! # Layouts
//!
//! | state | small | medium | lock screen |
//! |-------|-------|--------|-------------|
//! | `EMPTY` | wake prompt + button | + summary + quick actions | wake prompt |
//! | `ACTIVE` | countdown, time, indicator | + log sleep + summary + quick actions | time, countdown, next feed |
//! | `URGENT` | "Time to sleep" + button | + summary + quick actions | "Sleep now", next feed |
//!
//! Small and lock screen widgets register a single whole-widget tap target
//! for the state's primary action. Medium widgets register one target per
//! button and open the app when tapped anywhere else.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::action::WidgetAction;
use crate::form_factor::FormFactor;
use crate::presentation::{ActiveContent, PresentationModel, WidgetContent};
use crate::state::{Tone, WidgetState};

const SWEET_SPOT_HEADING: &str = "Next Sweet Spot";
const WAKE_PROMPT: &str = "When did baby wake up?";
const URGENT_HEADING: &str = "Time to sleep";
const COUNTDOWN_UNIT: &str = "min left";
const SUMMARY_HEADING: &str = "Today";
const LOCK_ACTIVE_HEADING: &str = "Sweet spot";
const LOCK_URGENT_HEADING: &str = "Sleep now";
const LOCK_EMPTY_PROMPT: &str = "Log wake time";

/// A daily counter shown in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    /// Hours slept.
    Sleep,
    /// Feeds.
    Feeding,
    /// Diaper changes.
    Diaper,
}

impl StatKind {
    /// Returns a lowercase name for this counter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Feeding => "feeding",
            Self::Diaper => "diaper",
        }
    }
}

/// One visual element of a rendered widget, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewElement {
    /// Section title.
    Heading {
        /// Title text.
        text: String,
    },
    /// Call to action text.
    Prompt {
        /// Prompt text.
        text: String,
    },
    /// Large countdown number with its unit.
    Countdown {
        /// The number, e.g. `8`.
        value: String,
        /// The unit line, e.g. `min left`.
        unit: String,
    },
    /// A display-formatted time.
    Time {
        /// Time text.
        text: String,
    },
    /// Colored urgency dot.
    Indicator {
        /// Tone of the dot.
        tone: Tone,
    },
    /// Prediction confidence label.
    Confidence {
        /// Label text, e.g. `85%`.
        text: String,
    },
    /// Small secondary line.
    Caption {
        /// Caption text.
        text: String,
    },
    /// A daily counter.
    Stat {
        /// Which counter.
        stat: StatKind,
        /// Formatted value, e.g. `8×`.
        value: String,
    },
    /// A tappable control.
    Button {
        /// Action the button triggers.
        action: WidgetAction,
        /// Button label.
        label: String,
        /// Whether the button is the high-salience call to action.
        prominent: bool,
    },
}

impl fmt::Display for ViewElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading { text } => write!(f, "heading: {text}"),
            Self::Prompt { text } => write!(f, "prompt: {text}"),
            Self::Countdown { value, unit } => write!(f, "countdown: {value} {unit}"),
            Self::Time { text } => write!(f, "time: {text}"),
            Self::Indicator { tone } => write!(f, "indicator: {}", tone.as_str()),
            Self::Confidence { text } => write!(f, "confidence: {text}"),
            Self::Caption { text } => write!(f, "caption: {text}"),
            Self::Stat { stat, value } => write!(f, "stat {}: {value}", stat.as_str()),
            Self::Button {
                action,
                label,
                prominent,
            } => {
                let marker = if *prominent { " (prominent)" } else { "" };
                write!(f, "button {action}{marker}: {label}")
            }
        }
    }
}

/// Where a tap target sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "region", content = "action", rename_all = "snake_case")]
pub enum TapRegion {
    /// Anywhere on the widget not covered by a button.
    Widget,
    /// The button bound to this action.
    Button(WidgetAction),
}

/// A tap target the host registers for a rendered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TapTarget {
    /// Where the target sits.
    pub region: TapRegion,
    /// Action dispatched to the app on tap.
    pub action: WidgetAction,
}

impl fmt::Display for TapTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region {
            TapRegion::Widget => write!(f, "tap widget -> {}", self.action),
            TapRegion::Button(button) => write!(f, "tap button {button} -> {}", self.action),
        }
    }
}

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    /// Form factor this view was laid out for.
    pub form_factor: FormFactor,
    /// State the view presents.
    pub state: WidgetState,
    /// Tone hosts should use to accent the view, if any.
    pub accent: Option<Tone>,
    /// Visual elements in reading order.
    pub elements: Vec<ViewElement>,
    /// Tap targets to register.
    pub tap_targets: Vec<TapTarget>,
}

impl RenderedView {
    /// Returns the action bound to the whole widget.
    #[must_use]
    pub fn widget_action(&self) -> Option<WidgetAction> {
        self.tap_action(TapRegion::Widget)
    }

    /// Returns the action registered for `region`.
    #[must_use]
    pub fn tap_action(&self, region: TapRegion) -> Option<WidgetAction> {
        self.tap_targets
            .iter()
            .find(|target| target.region == region)
            .map(|target| target.action)
    }

    /// Returns `true` if the view draws a countdown.
    #[must_use]
    pub fn has_countdown(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e, ViewElement::Countdown { .. }))
    }

    /// Returns `true` if the view shows the daily summary.
    #[must_use]
    pub fn has_summary(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e, ViewElement::Stat { .. }))
    }

    /// Returns the deep links of every tap target, in registration order.
    #[must_use]
    pub fn deep_links(&self, scheme: &str) -> Vec<String> {
        self.tap_targets
            .iter()
            .map(|target| target.action.deep_link(scheme))
            .collect()
    }

    /// Describes the view as plain text, one element or target per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_protocol::{derive, render, FormFactor, Snapshot};
    ///
    /// let view = render(&derive(&Snapshot::default()), FormFactor::LockScreen);
    /// assert_eq!(
    ///     view.outline(),
    ///     "[lock-screen EMPTY]\nprompt: Log wake time\ntap widget -> log-wake\n"
    /// );
    /// ```
    #[must_use]
    pub fn outline(&self) -> String {
        let mut out = format!("[{} {}]\n", self.form_factor, self.state);
        for element in &self.elements {
            let _ = writeln!(out, "{element}");
        }
        for target in &self.tap_targets {
            let _ = writeln!(out, "{target}");
        }
        out
    }
}

/// Lays out `model` for `form_factor`.
///
/// Every state renders on every form factor; there is no error path.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::{derive, render, FormFactor, Snapshot, WidgetAction};
///
/// let model = derive(&Snapshot::default());
/// let view = render(&model, FormFactor::Small);
/// assert_eq!(view.widget_action(), Some(WidgetAction::LogWake));
/// assert!(!view.has_summary());
/// ```
#[must_use]
pub fn render(model: &PresentationModel, form_factor: FormFactor) -> RenderedView {
    let mut elements = Vec::new();

    match form_factor {
        FormFactor::Small => push_home_content(&mut elements, &model.content, false),
        FormFactor::Medium => {
            push_home_content(&mut elements, &model.content, true);
            push_summary(&mut elements, model);
            push_quick_actions(&mut elements);
        }
        FormFactor::LockScreen => push_lock_screen_content(&mut elements, model),
    }

    let tap_targets = register_tap_targets(form_factor, &model.content, &elements);

    RenderedView {
        form_factor,
        state: model.content.state(),
        accent: model.content.accent(),
        elements,
        tap_targets,
    }
}

/// Pushes the state-specific part of a home screen widget.
///
/// `with_sleep_button` adds an explicit log-sleep button to `ACTIVE`, which
/// only pays off where buttons are individually tappable.
fn push_home_content(
    elements: &mut Vec<ViewElement>,
    content: &WidgetContent,
    with_sleep_button: bool,
) {
    match content {
        WidgetContent::Empty => {
            elements.push(heading(SWEET_SPOT_HEADING));
            elements.push(ViewElement::Prompt {
                text: WAKE_PROMPT.to_string(),
            });
            elements.push(button(WidgetAction::LogWake, true));
        }
        WidgetContent::Active(active) => {
            elements.push(heading(SWEET_SPOT_HEADING));
            push_active_details(elements, active);
            if let Some(label) = &active.confidence_label {
                elements.push(ViewElement::Confidence {
                    text: label.clone(),
                });
            }
            if with_sleep_button {
                elements.push(button(WidgetAction::LogSleep, false));
            }
        }
        WidgetContent::Urgent { sweet_spot_time } => {
            elements.push(heading(URGENT_HEADING));
            elements.push(ViewElement::Time {
                text: sweet_spot_time.clone(),
            });
            elements.push(button(WidgetAction::LogSleep, true));
        }
    }
}

/// Indicator, countdown and time, each only when the model has it.
fn push_active_details(elements: &mut Vec<ViewElement>, active: &ActiveContent) {
    if let Some(tone) = active.indicator {
        elements.push(ViewElement::Indicator { tone });
    }
    if let Some(minutes) = active.minutes_remaining {
        elements.push(ViewElement::Countdown {
            value: minutes.to_string(),
            unit: COUNTDOWN_UNIT.to_string(),
        });
    }
    elements.push(ViewElement::Time {
        text: active.sweet_spot_time.clone(),
    });
}

fn push_summary(elements: &mut Vec<ViewElement>, model: &PresentationModel) {
    elements.push(heading(SUMMARY_HEADING));
    elements.push(ViewElement::Stat {
        stat: StatKind::Sleep,
        value: model.summary.sleep_hours.clone(),
    });
    elements.push(ViewElement::Stat {
        stat: StatKind::Feeding,
        value: model.summary.feeding_count.clone(),
    });
    elements.push(ViewElement::Stat {
        stat: StatKind::Diaper,
        value: model.summary.diaper_count.clone(),
    });
}

fn push_quick_actions(elements: &mut Vec<ViewElement>) {
    elements.push(button(WidgetAction::Feeding, false));
    elements.push(button(WidgetAction::Diaper, false));
}

fn push_lock_screen_content(elements: &mut Vec<ViewElement>, model: &PresentationModel) {
    match &model.content {
        WidgetContent::Empty => {
            elements.push(ViewElement::Prompt {
                text: LOCK_EMPTY_PROMPT.to_string(),
            });
            return;
        }
        WidgetContent::Active(active) => {
            elements.push(heading(LOCK_ACTIVE_HEADING));
            push_active_details(elements, active);
        }
        WidgetContent::Urgent { sweet_spot_time } => {
            elements.push(heading(LOCK_URGENT_HEADING));
            elements.push(ViewElement::Time {
                text: sweet_spot_time.clone(),
            });
        }
    }
    elements.push(ViewElement::Caption {
        text: format!("Next feed {}", model.next_feeding_time),
    });
}

fn register_tap_targets(
    form_factor: FormFactor,
    content: &WidgetContent,
    elements: &[ViewElement],
) -> Vec<TapTarget> {
    if form_factor.single_tap_target() {
        return vec![TapTarget {
            region: TapRegion::Widget,
            action: content.primary_action(),
        }];
    }

    elements
        .iter()
        .filter_map(|element| match element {
            ViewElement::Button { action, .. } => Some(TapTarget {
                region: TapRegion::Button(*action),
                action: *action,
            }),
            _ => None,
        })
        .chain(std::iter::once(TapTarget {
            region: TapRegion::Widget,
            action: WidgetAction::OpenApp,
        }))
        .collect()
}

fn heading(text: &str) -> ViewElement {
    ViewElement::Heading {
        text: text.to_string(),
    }
}

fn button(action: WidgetAction, prominent: bool) -> ViewElement {
    let label = match action {
        WidgetAction::LogWake => "Log wake time",
        WidgetAction::LogSleep => "Log sleep",
        WidgetAction::Feeding => "Feeding",
        WidgetAction::Diaper => "Diaper",
        WidgetAction::OpenApp => "Open Lulu",
    };
    ViewElement::Button {
        action,
        label: label.to_string(),
        prominent,
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::presentation::derive;
    use crate::snapshot::Snapshot;
    use crate::snapshot::proptest_tests::arb_snapshot;
    use proptest::prelude::*;

    fn arb_form_factor() -> impl Strategy<Value = FormFactor> {
        prop_oneof![
            Just(FormFactor::Small),
            Just(FormFactor::Medium),
            Just(FormFactor::LockScreen),
        ]
    }

    proptest! {
        /// Every (state, form factor) pair renders something tappable.
        #[test]
        fn every_view_has_a_widget_target(
            snapshot in arb_snapshot(),
            form_factor in arb_form_factor(),
        ) {
            let view = render(&derive(&snapshot), form_factor);
            prop_assert!(!view.elements.is_empty());
            prop_assert!(view.widget_action().is_some());
        }

        /// ACTIVE without minutes never draws a countdown, on any form factor.
        #[test]
        fn absent_minutes_never_render(
            snapshot in arb_snapshot(),
            form_factor in arb_form_factor(),
        ) {
            let snapshot = Snapshot { state: WidgetState::Active, minutes_remaining: None, ..snapshot };
            let view = render(&derive(&snapshot), form_factor);
            prop_assert!(!view.has_countdown());
        }

        /// Medium views register exactly one target per button, plus the widget.
        #[test]
        fn medium_targets_match_buttons(snapshot in arb_snapshot()) {
            let view = render(&derive(&snapshot), FormFactor::Medium);
            let buttons = view
                .elements
                .iter()
                .filter(|e| matches!(e, ViewElement::Button { .. }))
                .count();
            prop_assert_eq!(view.tap_targets.len(), buttons + 1);
        }
    }
}
