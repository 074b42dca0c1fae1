use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Email;
use crate::ops::classify::avatar_slot;
use crate::ops::message::{Block, MessageLayout, compose};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::{chip, push_right_aligned};

const MAX_BODY_W: usize = 76;

/// Render the selected email with its kind-specific layout
pub fn render_message_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let Some(email) = app.selected_email() else {
        let empty = Paragraph::new(" No email selected")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    };

    let width = (area.width as usize).min(MAX_BODY_W + 2);
    let lines = message_lines(&app.theme, email, &compose(email), width);

    let visible_height = area.height as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    app.message_scroll = app.message_scroll.min(max_scroll);

    let lines: Vec<Line> = lines
        .into_iter()
        .skip(app.message_scroll)
        .take(visible_height)
        .collect();
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn message_lines<'a>(
    theme: &Theme,
    email: &Email,
    layout: &MessageLayout,
    width: usize,
) -> Vec<Line<'a>> {
    let bg = theme.background;
    let text = Style::default().fg(theme.text).bg(bg);
    let bright = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let body_w = width.saturating_sub(2);

    let mut lines: Vec<Line> = Vec::new();

    // Subject with label and category chips
    let mut subject = vec![Span::styled(" ", text), Span::styled(email.subject.clone(), bright)];
    for label in &email.labels {
        let color = if label.contains("review") {
            theme.green
        } else {
            theme.purple
        };
        subject.push(Span::styled(" ", text));
        subject.push(chip(label, color, bg));
    }
    if let Some(category) = email.category {
        subject.push(Span::styled(" ", text));
        subject.push(chip(category.id(), theme.category_color(category), bg));
    }
    lines.push(Line::from(subject));
    lines.push(Line::from(""));

    // Sender row: avatar initial, name, address, date on the right
    let avatar_color = theme.avatar_color(avatar_slot(&email.sender));
    let initial: String = email.sender.chars().take(1).collect();
    let mut sender = vec![
        Span::styled(" ", text),
        Span::styled(
            format!(" {} ", initial),
            Style::default()
                .fg(theme.background)
                .bg(avatar_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", text),
        Span::styled(email.sender.clone(), bright),
        Span::styled(format!("  <{}>", email.address), dim),
    ];
    push_right_aligned(
        &mut sender,
        vec![Span::styled(format!("{} ", email.date), dim)],
        width,
        Style::default().bg(bg),
    );
    lines.push(Line::from(sender));
    lines.push(Line::from(Span::styled(
        format!(" {}", "\u{2500}".repeat(width.saturating_sub(2))),
        dim,
    )));
    lines.push(Line::from(""));

    push_wrapped(&mut lines, &layout.greeting, body_w, text);
    for paragraph in &layout.paragraphs {
        lines.push(Line::from(""));
        push_wrapped(&mut lines, paragraph, body_w, text);
    }

    for block in &layout.blocks {
        lines.push(Line::from(""));
        push_block(&mut lines, theme, block, body_w);
    }

    if !layout.buttons.is_empty() {
        lines.push(Line::from(""));
        let mut row = vec![Span::styled(" ", text)];
        for (i, label) in layout.buttons.iter().enumerate() {
            let style = if i == 0 {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text).bg(theme.panel)
            };
            row.push(Span::styled(format!(" {} ", label), style));
            row.push(Span::styled("  ", text));
        }
        lines.push(Line::from(row));
    }

    if let Some((closing, name)) = &layout.signoff {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!(" {}", closing), dim)));
        lines.push(Line::from(Span::styled(format!(" {}", name), bright)));
    }

    lines
}

fn push_wrapped<'a>(lines: &mut Vec<Line<'a>>, text: &str, width: usize, style: Style) {
    for row in unicode::wrap_words(text, width) {
        lines.push(Line::from(Span::styled(format!(" {}", row), style)));
    }
}

/// A boxed block: "┌ title", contents, "└"
fn push_boxed<'a>(lines: &mut Vec<Line<'a>>, color: Color, bg: Color, rows: Vec<Line<'a>>) {
    let border = Style::default().fg(color).bg(bg);
    lines.push(Line::from(Span::styled(" \u{250C}\u{2500}", border)));
    for row in rows {
        let mut spans = vec![Span::styled(" \u{2502} ", border)];
        spans.extend(row.spans);
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(" \u{2514}\u{2500}", border)));
}

fn push_block<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, block: &Block, width: usize) {
    let bg = theme.background;
    let bold = |c: Color| Style::default().fg(c).bg(bg).add_modifier(Modifier::BOLD);
    let plain = |c: Color| Style::default().fg(c).bg(bg);
    let inner_w = width.saturating_sub(3);

    match block {
        Block::Event { title, when } => push_boxed(
            lines,
            theme.blue,
            bg,
            vec![
                Line::from(vec![
                    Span::styled("\u{25A6} ", plain(theme.blue)),
                    Span::styled(unicode::truncate_to_width(title, inner_w.saturating_sub(2)), bold(theme.text_bright)),
                ]),
                Line::from(Span::styled(format!("  {}", when), plain(theme.dim))),
            ],
        ),
        Block::Notice { title, detail } => {
            let mut rows = vec![Line::from(vec![
                Span::styled("\u{2714} ", plain(theme.green)),
                Span::styled(title.clone(), bold(theme.green)),
            ])];
            for row in unicode::wrap_words(detail, inner_w) {
                rows.push(Line::from(Span::styled(row, plain(theme.green))));
            }
            push_boxed(lines, theme.green, bg, rows);
        }
        Block::Stats { cards } => {
            let mut labels = vec![Span::styled(" ", plain(theme.dim))];
            let mut values = vec![Span::styled(" ", plain(theme.dim))];
            let mut changes = vec![Span::styled(" ", plain(theme.dim))];
            let cell = (width / cards.len().max(1)).max(1);
            for card in cards {
                labels.push(Span::styled(unicode::fit_to_width(&card.label, cell), plain(theme.dim)));
                values.push(Span::styled(unicode::fit_to_width(&card.value, cell), bold(theme.text_bright)));
                changes.push(Span::styled(unicode::fit_to_width(&card.change, cell), plain(theme.green)));
            }
            lines.push(Line::from(labels));
            lines.push(Line::from(values));
            lines.push(Line::from(changes));
        }
        Block::Files { files } => {
            for file in files {
                push_boxed(
                    lines,
                    theme.dim,
                    bg,
                    vec![
                        Line::from(Span::styled(file.name.clone(), bold(theme.text_bright))),
                        Line::from(Span::styled(file.detail.clone(), plain(theme.dim))),
                    ],
                );
            }
        }
        Block::Attachment(file) => push_boxed(
            lines,
            theme.red,
            bg,
            vec![
                Line::from(vec![
                    Span::styled("\u{2398} ", plain(theme.red)),
                    Span::styled(file.name.clone(), bold(theme.text_bright)),
                ]),
                Line::from(Span::styled(format!("  {}", file.detail), plain(theme.dim))),
            ],
        ),
        Block::Mention { name } => lines.push(Line::from(vec![
            Span::styled(" ", plain(theme.text)),
            Span::styled(name.clone(), bold(theme.highlight)),
            Span::styled(" was mentioned in this thread", plain(theme.dim)),
        ])),
        Block::Article {
            title,
            summary,
            byline,
        } => {
            let mut rows = Vec::new();
            for row in unicode::wrap_words(title, inner_w) {
                rows.push(Line::from(Span::styled(row, bold(theme.text_bright))));
            }
            rows.push(Line::from(""));
            for row in unicode::wrap_words(summary, inner_w) {
                rows.push(Line::from(Span::styled(row, plain(theme.dim))));
            }
            rows.push(Line::from(""));
            rows.push(Line::from(Span::styled(byline.clone(), plain(theme.text))));
            push_boxed(lines, theme.yellow, bg, rows);
        }
    }
}
