//! Terminal rendering of a [`RenderedView`].
//!
//! This is the terminal host's adapter: it maps each view element to a
//! styled line inside a framed box and records where the tappable parts
//! ended up, so mouse clicks can be resolved to actions.

use lulu_widget_protocol::{RenderedView, StatKind, TapRegion, Tone, ViewElement, WidgetAction};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// Accent used when the view has no tone.
const NEUTRAL_ACCENT: Color = Color::Cyan;

/// Returns the terminal color for a tone.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::Tone;
/// use lulu_widget_tui::widgets::tone_color;
/// use ratatui::style::Color;
///
/// assert_eq!(tone_color(Tone::Success), Color::Green);
/// assert_eq!(tone_color(Tone::Warning), Color::Yellow);
/// assert_eq!(tone_color(Tone::Alert), Color::Red);
/// ```
#[must_use]
pub const fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Alert => Color::Red,
    }
}

/// Returns the accent color of a view.
#[must_use]
pub fn accent_color(view: &RenderedView) -> Color {
    view.accent.map_or(NEUTRAL_ACCENT, tone_color)
}

/// Where the tap targets of the last drawn view landed on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    widget: Rect,
    widget_action: Option<WidgetAction>,
    buttons: Vec<(Rect, WidgetAction)>,
}

impl HitMap {
    /// Resolves a click to the action it triggers.
    ///
    /// Buttons with their own tap target win; anywhere else inside the
    /// widget frame triggers the whole-widget target. Clicks outside the
    /// frame trigger nothing.
    #[must_use]
    pub fn action_at(&self, column: u16, row: u16) -> Option<WidgetAction> {
        let position = Position::new(column, row);
        if !self.widget.contains(position) {
            return None;
        }
        self.buttons
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| *action)
            .or(self.widget_action)
    }

    /// Returns the widget frame.
    #[must_use]
    pub fn widget_area(&self) -> Rect {
        self.widget
    }

    /// Returns the areas of individually tappable buttons.
    #[must_use]
    pub fn buttons(&self) -> &[(Rect, WidgetAction)] {
        &self.buttons
    }
}

/// Draws `view` into `area` and returns where its tap targets landed.
///
/// Form factors with room for the daily summary lay out each headed section
/// as its own column.
///
/// # Examples
///
/// ```
/// use lulu_widget_protocol::{derive, render, FormFactor, Snapshot, WidgetAction};
/// use lulu_widget_tui::widgets::render_widget_view;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let view = render(&derive(&Snapshot::default()), FormFactor::Small);
/// let area = Rect::new(0, 0, 26, 11);
/// let mut buf = Buffer::empty(area);
///
/// let hits = render_widget_view(&view, area, &mut buf);
/// assert_eq!(hits.action_at(5, 5), Some(WidgetAction::LogWake));
/// ```
pub fn render_widget_view(view: &RenderedView, area: Rect, buf: &mut Buffer) -> HitMap {
    let accent = accent_color(view);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {} ", view.form_factor),
            Style::default().fg(accent),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let mut hits = HitMap {
        widget: area,
        widget_action: view.widget_action(),
        buttons: Vec::new(),
    };

    let sections = split_sections(view);
    let columns = Layout::horizontal(vec![Constraint::Fill(1); sections.len()])
        .spacing(1)
        .split(inner);
    for (section, column) in sections.iter().zip(columns.iter()) {
        let padded = column.inner(Margin::new(1, 0));
        render_section(view, section, accent, padded, buf, &mut hits);
    }

    hits
}

/// Splits the elements into columns, one per heading, where there is room.
fn split_sections(view: &RenderedView) -> Vec<&[ViewElement]> {
    if !view.form_factor.shows_summary() {
        return vec![view.elements.as_slice()];
    }

    let mut sections = Vec::new();
    let mut start = 0;
    for (index, element) in view.elements.iter().enumerate().skip(1) {
        if matches!(element, ViewElement::Heading { .. }) {
            sections.push(&view.elements[start..index]);
            start = index;
        }
    }
    sections.push(&view.elements[start..]);
    sections
}

fn render_section(
    view: &RenderedView,
    elements: &[ViewElement],
    accent: Color,
    area: Rect,
    buf: &mut Buffer,
    hits: &mut HitMap,
) {
    for (element, y) in elements.iter().zip(area.top()..area.bottom()) {
        let line = element_line(element, accent);
        buf.set_line(area.x, y, &line, area.width);

        if let ViewElement::Button { action, .. } = element
            && let Some(target) = view.tap_action(TapRegion::Button(*action))
        {
            let width = u16::try_from(line.width()).unwrap_or(u16::MAX).min(area.width);
            hits.buttons.push((Rect::new(area.x, y, width, 1), target));
        }
    }
}

fn element_line(element: &ViewElement, accent: Color) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let strong = Style::default().add_modifier(Modifier::BOLD);

    match element {
        ViewElement::Heading { text } => Line::from(Span::styled(
            text.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        ViewElement::Prompt { text } => Line::from(Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        ViewElement::Countdown { value, unit } => Line::from(vec![
            Span::styled(value.clone(), strong),
            Span::raw(" "),
            Span::styled(unit.clone(), dim),
        ]),
        ViewElement::Time { text } => Line::from(vec![
            Span::styled("at ", dim),
            Span::styled(text.clone(), strong),
        ]),
        ViewElement::Indicator { tone } => Line::from(vec![
            Span::styled("●", Style::default().fg(tone_color(*tone))),
            Span::styled(format!(" {}", tone.as_str()), dim),
        ]),
        ViewElement::Confidence { text } => {
            Line::from(Span::styled(format!("{text} confidence"), dim))
        }
        ViewElement::Caption { text } => Line::from(Span::styled(text.clone(), dim)),
        ViewElement::Stat { stat, value } => Line::from(vec![
            Span::styled(format!("{:<9}", stat_label(*stat)), dim),
            Span::styled(value.clone(), strong),
        ]),
        ViewElement::Button {
            label, prominent, ..
        } => {
            let style = if *prominent {
                Style::default()
                    .fg(Color::Black)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(accent)
            };
            Line::from(Span::styled(format!("[ {label} ]"), style))
        }
    }
}

const fn stat_label(stat: StatKind) -> &'static str {
    match stat {
        StatKind::Sleep => "Sleep",
        StatKind::Feeding => "Feeds",
        StatKind::Diaper => "Diapers",
    }
}
