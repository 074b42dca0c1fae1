use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

/// Narrow left rail: menu, mail (active), calendar, and the "ai" mark at
/// the bottom
pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let active = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(" \u{2261}", dim)),
        Line::from(""),
        Line::from(Span::styled(" \u{2709} ", active)),
        Line::from(Span::styled(" \u{25A6}", dim)),
    ];
    let height = area.height as usize;
    while lines.len() + 1 < height {
        lines.push(Line::from(""));
    }
    if lines.len() < height {
        lines.push(Line::from(Span::styled(" ai", dim)));
    }

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
