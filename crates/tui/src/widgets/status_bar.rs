//! Status bar rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::state::PreviewState;

/// Renders the status bar: what is shown, when it refreshes next and the
/// last dispatched deep link.
///
/// ```text
/// +--------------------------------------------------------------+
/// | medium  ACTIVE  refresh in 04:59  last tap lulu://log-sleep  |
/// +--------------------------------------------------------------+
/// ```
pub fn render_status_bar(
    state: &PreviewState,
    now: chrono::DateTime<chrono::Utc>,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled(state.form_factor().as_str(), key_style),
        Span::raw("  "),
        Span::styled(state.snapshot().state.as_str(), text_style),
        Span::raw("  "),
    ];

    if state.auto_refresh() {
        let remaining = state.plan().remaining(now).as_secs();
        spans.push(Span::styled("refresh in ", dim_style));
        spans.push(Span::styled(
            format!("{:02}:{:02}", remaining / 60, remaining % 60),
            text_style,
        ));
    } else {
        spans.push(Span::styled("auto refresh off", dim_style));
    }

    if let Some(dispatch) = state.last_dispatch() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("last tap ", dim_style));
        let style = if dispatch.succeeded {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Red)
        };
        spans.push(Span::styled(dispatch.url.clone(), style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
