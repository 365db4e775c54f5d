//! Preview state management.
//!
//! The preview always holds a rendered view that matches the current
//! snapshot and form factor, together with the refresh plan computed when
//! the snapshot was read.

use chrono::{DateTime, Utc};
use lulu_widget_protocol::{
    FormFactor, RefreshPlan, RenderedView, Snapshot, WidgetAction, derive, render,
};

/// The outcome of the last tap the preview dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    /// The action that was tapped.
    pub action: WidgetAction,
    /// The deep link handed to the host.
    pub url: String,
    /// Whether the host accepted the deep link.
    pub succeeded: bool,
}

/// The preview state.
#[derive(Debug, Clone)]
pub struct PreviewState {
    form_factor: FormFactor,
    snapshot: Snapshot,
    view: RenderedView,
    plan: RefreshPlan,
    auto_refresh: bool,
    help_visible: bool,
    last_dispatch: Option<DispatchRecord>,
}

impl PreviewState {
    /// Creates the state for `snapshot` read at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use lulu_widget_protocol::{FormFactor, Snapshot, WidgetState};
    /// use lulu_widget_tui::PreviewState;
    ///
    /// let state = PreviewState::new(Snapshot::default(), FormFactor::Small, Utc::now());
    /// assert_eq!(state.view().state, WidgetState::Empty);
    /// ```
    #[must_use]
    pub fn new(snapshot: Snapshot, form_factor: FormFactor, now: DateTime<Utc>) -> Self {
        let view = render(&derive(&snapshot), form_factor);
        let plan = RefreshPlan::after(now, snapshot.minutes_remaining);
        Self {
            form_factor,
            snapshot,
            view,
            plan,
            auto_refresh: true,
            help_visible: false,
            last_dispatch: None,
        }
    }

    /// Replaces the snapshot after a fresh read at `now` and plans the next
    /// refresh from it.
    pub fn set_snapshot(&mut self, snapshot: Snapshot, now: DateTime<Utc>) {
        self.plan = RefreshPlan::after(now, snapshot.minutes_remaining);
        self.snapshot = snapshot;
        self.rerender();
    }

    /// Switches to the next form factor.
    ///
    /// The refresh plan is left alone: it depends on the snapshot only.
    pub fn next_form_factor(&mut self) {
        self.form_factor = self.form_factor.next();
        self.rerender();
    }

    /// Switches to the previous form factor.
    pub fn prev_form_factor(&mut self) {
        self.form_factor = self.form_factor.prev();
        self.rerender();
    }

    fn rerender(&mut self) {
        self.view = render(&derive(&self.snapshot), self.form_factor);
    }

    /// Returns the form factor being previewed.
    #[must_use]
    pub const fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    /// Returns the last snapshot read.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Returns the rendered view for the current snapshot and form factor.
    #[must_use]
    pub const fn view(&self) -> &RenderedView {
        &self.view
    }

    /// Returns the current refresh plan.
    #[must_use]
    pub const fn plan(&self) -> &RefreshPlan {
        &self.plan
    }

    /// Returns whether the preview re-reads the store when the plan is due.
    #[must_use]
    pub const fn auto_refresh(&self) -> bool {
        self.auto_refresh
    }

    /// Enables or disables automatic refresh.
    pub fn set_auto_refresh(&mut self, enabled: bool) {
        self.auto_refresh = enabled;
    }

    /// Returns `true` when auto refresh is on and the plan is due at `now`.
    #[must_use]
    pub fn refresh_due(&self, now: DateTime<Utc>) -> bool {
        self.auto_refresh && self.plan.is_due(now)
    }

    /// Returns whether the help overlay is visible.
    #[must_use]
    pub const fn help_visible(&self) -> bool {
        self.help_visible
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Returns the last dispatched tap, if any.
    #[must_use]
    pub const fn last_dispatch(&self) -> Option<&DispatchRecord> {
        self.last_dispatch.as_ref()
    }

    /// Records the outcome of a tap.
    pub fn record_dispatch(&mut self, record: DispatchRecord) {
        self.last_dispatch = Some(record);
    }
}
