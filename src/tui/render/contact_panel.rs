use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Contact, LinkKind};
use crate::tui::app::App;
use crate::util::unicode;

/// Right-hand panel with the profile of the hovered (else selected) email's
/// sender
pub fn render_contact_panel(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::LEFT)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // profile
            Constraint::Length(1), // footer
        ])
        .split(inner);

    let dim = Style::default().fg(app.theme.dim).bg(bg);
    match app.displayed_contact() {
        Some(contact) => {
            let lines = profile_lines(app, contact, chunks[0].width as usize);
            frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), chunks[0]);
        }
        None => {
            let msg = "Select an email to view contact";
            let w = chunks[0].width as usize;
            let text = unicode::truncate_to_width(msg, w);
            let pad = w.saturating_sub(unicode::display_width(&text)) / 2;
            let mut lines = vec![Line::from(""); (chunks[0].height / 2) as usize];
            lines.push(Line::from(Span::styled(format!("{}{}", " ".repeat(pad), text), dim)));
            frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), chunks[0]);
        }
    }

    // Footer: product mark and decorative glyphs
    let footer = Line::from(vec![
        Span::styled(" MAILPILOT", dim),
        Span::styled(
            format!(
                "{:>width$}",
                "\u{25A6} ? \u{25A4} \u{2699} ",
                width = (chunks[1].width as usize).saturating_sub(10)
            ),
            dim,
        ),
    ]);
    frame.render_widget(Paragraph::new(footer).style(Style::default().bg(bg)), chunks[1]);
}

fn profile_lines<'a>(app: &App, contact: &Contact, width: usize) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let bg = theme.background;
    let text = Style::default().fg(theme.text).bg(bg);
    let bright = Style::default().fg(theme.text_bright).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let inner_w = width.saturating_sub(2);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", unicode::truncate_to_width(&contact.name, inner_w)),
            bright.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let initials = contact.initials();
    let avatar_w = unicode::display_width(&initials) + 2;
    let beside = inner_w.saturating_sub(avatar_w + 1);
    lines.push(Line::from(vec![
        Span::styled(" ", text),
        Span::styled(
            format!(" {} ", initials),
            Style::default().fg(theme.text_bright).bg(theme.panel),
        ),
        Span::styled(" ", text),
        Span::styled(unicode::truncate_to_width(&contact.address, beside), text),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(avatar_w + 2), text),
        Span::styled(unicode::truncate_to_width(&contact.location, beside), dim),
    ]));
    lines.push(Line::from(""));

    for row in unicode::wrap_words(&contact.bio, inner_w) {
        lines.push(Line::from(Span::styled(format!(" {}", row), dim)));
    }
    lines.push(Line::from(""));

    // Mail heading with recent threads underneath
    lines.push(Line::from(vec![
        Span::styled(format!(" {} ", LinkKind::Mail.glyph()), dim),
        Span::styled("Mail", text),
    ]));
    for recent in &contact.recent {
        let subject = if recent.is_recap {
            format!("{} \u{1F680}", recent.subject)
        } else {
            recent.subject.clone()
        };
        lines.push(Line::from(Span::styled(
            format!("    {}", unicode::truncate_to_width(&subject, inner_w.saturating_sub(3))),
            dim,
        )));
    }

    // The first link is the mail entry shown above
    for link in contact.links.iter().skip(1) {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<2} ", link.kind.glyph()), dim),
            Span::styled(unicode::truncate_to_width(&link.label, inner_w.saturating_sub(3)), text),
        ]));
    }

    lines
}
