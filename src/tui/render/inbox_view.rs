use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Email;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{pad_spans, spans_width};

const SENDER_W: usize = 18;
const DATE_W: usize = 8;

/// Render the grouped email list. Keeps the cursor row on screen by
/// adjusting `inbox_scroll`.
pub fn render_inbox_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let groups = app.visible_groups();
    if groups.is_empty() {
        let msg = match app.filter {
            Some(c) => format!(" No emails in {}", c.label()),
            None => " Inbox zero".to_string(),
        };
        let empty =
            Paragraph::new(msg).style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let mut display_lines: Vec<Line> = Vec::new();
    let mut cursor_line = None;

    for (gi, group) in groups.iter().enumerate() {
        if gi > 0 {
            display_lines.push(Line::from(""));
        }
        if !group.label.is_empty() {
            display_lines.push(Line::from(Span::styled(
                format!("  {}", group.label),
                Style::default()
                    .fg(app.theme.dim)
                    .bg(app.theme.background)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        for email in &group.emails {
            if app.selection.is_hovered(&email.id) {
                cursor_line = Some(display_lines.len());
            }
            display_lines.push(email_row(app, email, width));
        }
    }

    let visible_height = area.height as usize;
    if let Some(line) = cursor_line {
        if line < app.inbox_scroll {
            app.inbox_scroll = line;
        } else if visible_height > 0 && line >= app.inbox_scroll + visible_height {
            app.inbox_scroll = line + 1 - visible_height;
        }
    }
    let max_scroll = display_lines.len().saturating_sub(visible_height);
    app.inbox_scroll = app.inbox_scroll.min(max_scroll);

    let lines: Vec<Line> = display_lines
        .into_iter()
        .skip(app.inbox_scroll)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// One list row: marker, unread dot, sender, attachment, subject, preview
/// (with the mention highlighted), date
fn email_row<'a>(app: &App, email: &Email, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let is_cursor = app.selection.is_hovered(&email.id);
    let is_selected = app.selection.is_selected(&email.id);
    let bg = if is_selected {
        theme.selection_bg
    } else if is_cursor {
        theme.cursor_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);
    let strong = |s: Style| {
        if email.unread {
            s.add_modifier(Modifier::BOLD)
        } else {
            s
        }
    };

    let mut spans: Vec<Span> = Vec::new();

    // Left marker: selected or unread rows get a colored bar
    let marker = if is_selected || email.unread {
        Span::styled("\u{258E}", Style::default().fg(theme.highlight).bg(bg))
    } else {
        Span::styled(" ", base)
    };
    spans.push(marker);
    if email.unread {
        spans.push(Span::styled("\u{25CF} ", Style::default().fg(theme.unread).bg(bg)));
    } else {
        spans.push(Span::styled("  ", base));
    }

    spans.push(Span::styled(
        unicode::fit_to_width(&email.sender, SENDER_W),
        strong(Style::default().fg(theme.text_bright).bg(bg)),
    ));
    spans.push(Span::styled(" ", base));

    // Middle column gets whatever the date leaves
    let middle_w = width.saturating_sub(spans_width(&spans) + DATE_W);
    let mut middle: Vec<Span> = Vec::new();
    if email.has_attachment {
        middle.push(Span::styled(
            "\u{2398} ",
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    middle.push(Span::styled(
        email.subject.clone(),
        strong(Style::default().fg(theme.text_bright).bg(bg)),
    ));
    middle.push(Span::styled("  ", base));
    if let Some(mention) = &email.mention {
        middle.push(Span::styled(
            mention.clone(),
            Style::default().fg(theme.highlight).bg(bg),
        ));
        middle.push(Span::styled(" ", base));
        middle.push(Span::styled(
            email.preview_without_mention(),
            Style::default().fg(theme.dim).bg(bg),
        ));
    } else {
        middle.push(Span::styled(
            email.preview.clone(),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    spans.extend(clip_spans(middle, middle_w, base));

    spans.push(Span::styled(
        format!("{:>width$} ", email.date, width = DATE_W - 1),
        Style::default().fg(theme.dim).bg(bg),
    ));
    pad_spans(&mut spans, width, base);
    Line::from(spans)
}

/// Clip a run of spans to exactly `width` cells, truncating the span that
/// crosses the edge and padding short runs
fn clip_spans<'a>(spans: Vec<Span<'a>>, width: usize, fill: Style) -> Vec<Span<'a>> {
    let mut out = Vec::new();
    let mut used = 0;
    for span in spans {
        let w = unicode::display_width(&span.content);
        if used + w <= width {
            used += w;
            out.push(span);
            continue;
        }
        let rest = width - used;
        if rest > 0 {
            let text = unicode::truncate_to_width(&span.content, rest);
            used += unicode::display_width(&text);
            out.push(Span::styled(text, span.style));
        }
        break;
    }
    if used < width {
        out.push(Span::styled(" ".repeat(width - used), fill));
    }
    out
}
