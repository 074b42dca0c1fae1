use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::util::unicode;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Pad a row of spans with `style` out to `width` cells
pub(super) fn pad_spans(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Push `right` flush against the right edge, padding the gap with `fill`.
/// Nothing is pushed if it does not fit after a one-cell gap.
pub(super) fn push_right_aligned<'a>(
    spans: &mut Vec<Span<'a>>,
    right: Vec<Span<'a>>,
    width: usize,
    fill: Style,
) {
    let used = spans_width(spans);
    let right_w = spans_width(&right);
    if used + 1 + right_w <= width {
        spans.push(Span::styled(" ".repeat(width - used - right_w), fill));
        spans.extend(right);
    } else {
        pad_spans(spans, width, fill);
    }
}

/// A small inline tag, e.g. a label or category
pub(super) fn chip(text: &str, fg: Color, bg: Color) -> Span<'static> {
    Span::styled(
        format!("[{}]", text),
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_alignment_fills_gap() {
        let mut spans = vec![Span::raw("ab")];
        push_right_aligned(&mut spans, vec![Span::raw("xy")], 8, Style::default());
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "ab    xy");
    }

    #[test]
    fn right_alignment_drops_when_crowded() {
        let mut spans = vec![Span::raw("abcdef")];
        push_right_aligned(&mut spans, vec![Span::raw("xy")], 8, Style::default());
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "abcdef  ");
    }
}
