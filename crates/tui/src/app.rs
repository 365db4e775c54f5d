//! Main application struct and run loop.
//!
//! The preview plays the part of the widget host: it reads the snapshot
//! store, draws the rendered view at the chosen form factor, turns taps into
//! deep links and re-reads the store when the refresh plan comes due.

use chrono::{DateTime, Utc};
use lulu_widget_config::Config;
use lulu_widget_protocol::{DEFAULT_SCHEME, FormFactor, Message, WidgetAction};
use lulu_widget_store::{KeyValueStore, SnapshotReader};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::{debug, info, warn};

use crate::{
    dispatch::ActionDispatcher,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_BAR_HEIGHT, centered_rect, widget_size},
    state::{DispatchRecord, PreviewState},
    terminal::PreviewTerminal,
    widgets::{HitMap, render_help_overlay, render_status_bar, render_widget_view},
};

/// The terminal widget preview.
#[derive(Debug)]
pub struct App<S, D> {
    reader: SnapshotReader<S>,
    dispatcher: D,
    scheme: String,
    state: PreviewState,
    should_quit: bool,
    /// Where the tap targets of the last drawn frame landed.
    hit_map: HitMap,
}

impl<S: KeyValueStore, D: ActionDispatcher> App<S, D> {
    /// Creates a preview of the medium widget under the default deep link
    /// scheme, reading the store once at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use lulu_widget_protocol::WidgetState;
    /// use lulu_widget_store::{MemoryStore, SnapshotReader};
    /// use lulu_widget_tui::{App, RecordingDispatcher};
    ///
    /// let reader = SnapshotReader::new(MemoryStore::new());
    /// let app = App::new(reader, RecordingDispatcher::default(), Utc::now());
    /// assert_eq!(app.state().view().state, WidgetState::Empty);
    /// ```
    #[must_use]
    pub fn new(reader: SnapshotReader<S>, dispatcher: D, now: DateTime<Utc>) -> Self {
        let state = PreviewState::new(reader.read(), FormFactor::default(), now);
        Self {
            reader,
            dispatcher,
            scheme: DEFAULT_SCHEME.to_string(),
            state,
            should_quit: false,
            hit_map: HitMap::default(),
        }
    }

    /// Creates a preview using the scheme and preview settings of `config`.
    #[must_use]
    pub fn with_config(
        reader: SnapshotReader<S>,
        dispatcher: D,
        config: &Config,
        now: DateTime<Utc>,
    ) -> Self {
        let mut state = PreviewState::new(reader.read(), config.preview.form_factor, now);
        state.set_auto_refresh(config.preview.auto_refresh);
        Self {
            reader,
            dispatcher,
            scheme: config.deep_links.scheme.clone(),
            state,
            should_quit: false,
            hit_map: HitMap::default(),
        }
    }

    /// Returns the preview state.
    #[must_use]
    pub const fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Returns the action dispatcher.
    #[must_use]
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Returns whether the preview has been asked to quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the preview based on a message received at `now`.
    ///
    /// When the help overlay is visible, every message other than `Quit`
    /// and `ToggleHelp` only dismisses it.
    pub fn update(&mut self, msg: Message, now: DateTime<Utc>) {
        if self.state.help_visible() && !matches!(msg, Message::Quit | Message::ToggleHelp) {
            let _ = self.state.dismiss_help();
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NextFormFactor => self.state.next_form_factor(),
            Message::PrevFormFactor => self.state.prev_form_factor(),
            Message::Reload => self.reload(now),
            Message::Activate => {
                if let Some(action) = self.state.view().widget_action() {
                    self.tap(action);
                }
            }
            Message::ClickAt { column, row } => {
                if let Some(action) = self.hit_map.action_at(column, row) {
                    self.tap(action);
                }
            }
        }
    }

    /// Re-reads the store if the refresh plan is due at `now`.
    ///
    /// Returns `true` if a refresh happened.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if !self.state.refresh_due(now) {
            return false;
        }
        self.reload(now);
        true
    }

    fn reload(&mut self, now: DateTime<Utc>) {
        let snapshot = self.reader.read();
        self.state.set_snapshot(snapshot, now);
        debug!(
            state = %self.state.view().state,
            refresh_at = %self.state.plan().refresh_at,
            "reloaded widget snapshot"
        );
    }

    fn tap(&mut self, action: WidgetAction) {
        let url = action.deep_link(&self.scheme);
        let succeeded = match self.dispatcher.dispatch(&url) {
            Ok(()) => {
                info!(%action, url = %url, "dispatched widget tap");
                true
            }
            Err(error) => {
                warn!(%action, url = %url, %error, "widget tap was not delivered");
                false
            }
        };
        self.state.record_dispatch(DispatchRecord {
            action,
            url,
            succeeded,
        });
    }

    /// Renders the preview at `now` into `frame`.
    ///
    /// Terminals below the minimum size get a notice instead of the widget.
    pub fn view(&mut self, frame: &mut Frame, now: DateTime<Utc>) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.hit_map = HitMap::default();
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let (width, height) = widget_size(self.state.form_factor());
        let widget_area = centered_rect(width, height, content_area);
        self.hit_map = render_widget_view(self.state.view(), widget_area, frame.buffer_mut());

        render_status_bar(&self.state, now, status_area, frame.buffer_mut());

        if self.state.help_visible() {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header with the form factor tabs and the help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let mut spans = vec![
            Span::styled(
                "lulu",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" widget preview  "),
        ];
        for (index, form_factor) in FormFactor::ALL.into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            }
            let style = if form_factor == self.state.form_factor() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(form_factor.as_str(), style));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the preview until the user quits.
    ///
    /// Each turn draws, waits up to the poll timeout for input and then
    /// checks the refresh plan, so a due refresh is picked up within one
    /// poll interval.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chrono::Utc;
    /// use lulu_widget_store::{JsonFileStore, SnapshotReader};
    /// use lulu_widget_tui::{App, OsDispatcher, terminal::TerminalGuard};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let reader = SnapshotReader::new(JsonFileStore::at_default_location()?);
    ///     let mut guard = TerminalGuard::new()?;
    ///     let mut app = App::new(reader, OsDispatcher, Utc::now());
    ///     app.run(guard.terminal_mut()).await?;
    ///     guard.restore()?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut PreviewTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame, Utc::now()))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event)
            {
                self.update(msg, Utc::now());
            }

            if self.should_quit {
                break;
            }

            self.tick(Utc::now());
        }

        Ok(())
    }
}
