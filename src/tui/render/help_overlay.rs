use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, View};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let styles = (key_style, desc_style);

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    match app.view {
        View::Inbox => {
            lines.push(Line::from(Span::styled(" Inbox", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", styles);
            add_binding(&mut lines, " g/G", "Jump to top/bottom", styles);
            add_binding(&mut lines, " Enter", "Open email", styles);
            add_binding(&mut lines, " e", "Mark done", styles);
            add_binding(&mut lines, " Tab/S-Tab", "Next/previous category", styles);
            add_binding(&mut lines, " 1-8", "Toggle category filter", styles);
            add_binding(&mut lines, " 0/Esc", "Clear filter", styles);
        }
        View::Message => {
            lines.push(Line::from(Span::styled(" Message", header_style)));
            add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Scroll", styles);
            add_binding(&mut lines, " C-d/C-u", "Page down/up", styles);
            add_binding(&mut lines, " e", "Mark done, open next", styles);
            add_binding(&mut lines, " Esc", "Back to inbox", styles);
        }
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Command palette", header_style)));
    add_binding(&mut lines, " Ctrl+K", "Open / close", styles);
    add_binding(&mut lines, " Tab", "Switch list / filter focus", styles);
    add_binding(&mut lines, " Enter", "Run selected action", styles);
    lines.push(Line::from(""));

    // Global keys
    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " ?", "Toggle this help", styles);
    add_binding(&mut lines, " q", "Quit", styles);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    (key_style, desc_style): (Style, Style),
) {
    let key_width = 16;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
