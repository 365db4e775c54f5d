//! Rendering helpers shared by the preview's tests.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Text of the whole buffer, one line per row, trailing blanks trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    area_to_string(buf, buf.area)
}

/// Text of `area` within `buf`, e.g. just the widget frame of a full
/// terminal draw. Cells outside the buffer are skipped.
#[must_use]
pub(crate) fn area_to_string(buf: &Buffer, area: Rect) -> String {
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                row.push_str(cell.symbol());
            }
        }
        out.push_str(row.trim_end_matches(' '));
        out.push('\n');
    }
    out
}

/// Draws into a blank buffer of `area` and returns its text together with
/// whatever the draw call produced (a hit map, for widget views).
pub(crate) fn render_to_string<T>(
    area: Rect,
    draw: impl FnOnce(Rect, &mut Buffer) -> T,
) -> (String, T) {
    let mut buf = Buffer::empty(area);
    let produced = draw(area, &mut buf);
    (buffer_to_string(&buf), produced)
}

/// First rendered row containing `needle`.
pub(crate) fn row_containing<'a>(content: &'a str, needle: &str) -> Option<&'a str> {
    content.lines().find(|line| line.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn rows_are_trimmed() {
        let (content, ()) = render_to_string(Rect::new(0, 0, 8, 2), |_, buf| {
            buf.set_string(0, 0, "tap", Style::default());
        });
        assert_eq!(content, "tap\n\n");
    }

    #[test]
    fn area_crops_to_the_frame() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        buf.set_string(0, 1, "ab[cd]ef", Style::default());
        assert_eq!(area_to_string(&buf, Rect::new(2, 1, 4, 1)), "[cd]\n");
        assert_eq!(row_containing(&buffer_to_string(&buf), "cd"), Some("ab[cd]ef"));
    }
}
