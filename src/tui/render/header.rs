use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

use super::helpers::push_right_aligned;

/// Top row: "Inbox" with the total count, or the way back from a message
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let title = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = match app.view {
        View::Inbox => vec![
            Span::styled(" Inbox", title),
            Span::styled(format!("  {}", app.mailbox.total_count()), dim),
        ],
        View::Message => vec![
            Span::styled(" \u{2190} ", Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled("Inbox", title),
            Span::styled(format!("  {}", app.mailbox.total_count()), dim),
        ],
    };

    // Compose/search glyphs; decorative only
    let right = vec![Span::styled("\u{270E}  \u{2315} ", dim)];
    push_right_aligned(&mut spans, right, width, Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_total_count() {
        let app = fixture_app();
        let out = render_to_string(40, 1, |frame, area| render_header(frame, &app, area));
        assert!(out.starts_with(" Inbox  8"));
    }

    #[test]
    fn count_follows_completion() {
        let mut app = fixture_app();
        app.mark_done();
        let out = render_to_string(40, 1, |frame, area| render_header(frame, &app, area));
        assert!(out.starts_with(" Inbox  7"));
    }
}
