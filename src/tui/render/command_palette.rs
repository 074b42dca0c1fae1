use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, InputMode};
use crate::tui::command_actions::{CommandPaletteState, ScoredAction, Wiring};
use crate::tui::theme::Theme;

use super::helpers::{chip, pad_spans, push_right_aligned};

/// Inner width of the box, borders excluded
const PALETTE_W: u16 = 46;
/// Rows above the box inside the main column
const TOP_OFFSET: u16 = 2;

/// Render the command palette: filter row, one row per matching action, and
/// a footer with the match count.
pub fn render_command_palette(frame: &mut Frame, app: &App, area: Rect) {
    let Some(cp) = &app.command_palette else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;
    let fill = Style::default().bg(bg);
    let list_focus = app.mode == InputMode::OverlayOpen;

    let inner_w = PALETTE_W.min(area.width.saturating_sub(2));
    let width = inner_w as usize;

    // Rows available for actions once the filter, rule, footer and borders
    // are accounted for
    let room = area.height.saturating_sub(TOP_OFFSET + 5).max(1) as usize;

    let mut lines = vec![
        filter_line(cp, app.mode, theme, width),
        Line::from(Span::styled(
            "\u{2500}".repeat(width),
            Style::default().fg(theme.dim).bg(bg),
        )),
    ];

    if cp.results.is_empty() {
        let mut spans = vec![Span::styled(
            format!(" No action matches {:?}", cp.input),
            Style::default().fg(theme.dim).bg(bg),
        )];
        pad_spans(&mut spans, width, fill);
        lines.push(Line::from(spans));
    } else {
        // Keep the selected row in view when the terminal is short
        let skip = (cp.selected + 1).saturating_sub(room);
        for (i, scored) in cp.results.iter().enumerate().skip(skip).take(room) {
            lines.push(action_line(scored, i == cp.selected, list_focus, theme, width));
        }
    }

    lines.push(footer_line(cp, theme, width));

    let box_w = inner_w + 2;
    let box_h = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + area.width.saturating_sub(box_w) / 2;
    let y = area.y + TOP_OFFSET.min(area.height.saturating_sub(box_h));
    let popup = Rect::new(x, y, box_w, box_h);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim).bg(bg))
        .style(fill);
    frame.render_widget(Paragraph::new(lines).block(block).style(fill), popup);
}

/// "⌕ query▌" with a focus chip on the right
fn filter_line(
    cp: &CommandPaletteState,
    mode: InputMode,
    theme: &Theme,
    width: usize,
) -> Line<'static> {
    let bg = theme.background;
    let typing = mode == InputMode::TextEntryFocused;

    let mut spans = vec![Span::styled(
        " \u{2315} ",
        Style::default().fg(theme.highlight).bg(bg),
    )];
    if cp.input.is_empty() && !typing {
        spans.push(Span::styled(
            "Type to filter",
            Style::default().fg(theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            cp.input.clone(),
            Style::default().fg(theme.text_bright).bg(bg),
        ));
    }
    if typing {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(theme.highlight).bg(bg),
        ));
    }

    let focus = if typing { "type" } else { "list" };
    push_right_aligned(
        &mut spans,
        vec![chip(focus, theme.dim, bg), Span::styled(" ", Style::default().bg(bg))],
        width,
        Style::default().bg(bg),
    );
    Line::from(spans)
}

/// One action: selection bar, icon, label, shortcut. Wired actions get a
/// bright icon; declared ones stay dim.
fn action_line(
    scored: &ScoredAction,
    selected: bool,
    list_focus: bool,
    theme: &Theme,
    width: usize,
) -> Line<'static> {
    let action = &scored.action;
    let row_bg = if selected && list_focus {
        theme.selection_bg
    } else if selected {
        theme.cursor_bg
    } else {
        theme.background
    };
    let fill = Style::default().bg(row_bg);
    let bar = if selected { "\u{258E}" } else { " " };

    let icon_fg = match action.action.wiring() {
        Wiring::Wired(_) => theme.green,
        Wiring::Declared => theme.dim,
    };
    let mut label_style = Style::default().fg(theme.text).bg(row_bg);
    if selected {
        label_style = label_style.fg(theme.text_bright).add_modifier(Modifier::BOLD);
    }
    let hit = Style::default()
        .fg(theme.highlight)
        .bg(row_bg)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut spans = vec![
        Span::styled(bar, Style::default().fg(theme.highlight).bg(row_bg)),
        Span::styled(format!("{} ", action.icon), Style::default().fg(icon_fg).bg(row_bg)),
    ];
    spans.extend(match_spans(action.label, &scored.label_matched, label_style, hit));

    let mut key = match_spans(
        action.shortcut,
        &scored.shortcut_matched,
        Style::default().fg(theme.dim).bg(row_bg),
        hit,
    );
    key.push(Span::styled(" ", fill));
    push_right_aligned(&mut spans, key, width, fill);
    Line::from(spans)
}

/// Split `text` into runs of matched and unmatched characters
fn match_spans(text: &str, matched: &[usize], base: Style, hit: Style) -> Vec<Span<'static>> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_hit = false;
    for (i, ch) in text.chars().enumerate() {
        let is_hit = matched.contains(&i);
        if is_hit != run_hit && !run.is_empty() {
            let style = if run_hit { hit } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_hit = is_hit;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_hit { hit } else { base }));
    }
    spans
}

/// "N of M actions", plus a note when the chosen action has no effect
fn footer_line(cp: &CommandPaletteState, theme: &Theme, width: usize) -> Line<'static> {
    let bg = theme.background;
    let dim = Style::default().fg(theme.dim).bg(bg);
    let mut spans = vec![Span::styled(
        format!(" {} of {} actions", cp.results.len(), cp.total_count),
        dim,
    )];
    let declared = cp
        .results
        .get(cp.selected)
        .is_some_and(|r| r.action.action.wiring() == Wiring::Declared);
    if declared {
        push_right_aligned(&mut spans, vec![Span::styled("not wired ", dim)], width, dim);
    } else {
        pad_spans(&mut spans, width, dim);
    }
    Line::from(spans)
}
