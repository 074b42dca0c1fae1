use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, InputMode};

use super::helpers::{pad_spans, push_right_aligned};

/// Render the status row (bottom of screen): toast on the left, key hint on
/// the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if let Some(toast) = &app.toast {
        spans.push(Span::styled(
            format!(" \u{2714} {}", toast.text),
            Style::default()
                .fg(app.theme.green)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let hint = match app.mode {
        InputMode::Normal => "Ctrl-K for commands",
        InputMode::OverlayOpen => "Tab filter  Enter run  Esc close",
        InputMode::TextEntryFocused => "Tab list  Enter run  Esc close",
    };
    if app.show_key_hints {
        push_right_aligned(&mut spans, vec![Span::styled(format!("{} ", hint), dim)], width, Style::default().bg(bg));
    } else {
        pad_spans(&mut spans, width, Style::default().bg(bg));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn idle_shows_hint() {
        let app = fixture_app();
        let out = render(&app);
        assert!(out.ends_with("Ctrl-K for commands"));
    }

    #[test]
    fn toast_after_mark_done() {
        let mut app = fixture_app();
        app.mark_done();
        let out = render(&app);
        assert!(out.starts_with(" \u{2714} Marked as Done"));
        assert!(out.ends_with("Ctrl-K for commands"));
    }

    #[test]
    fn hint_follows_palette_focus() {
        let mut app = fixture_app();
        app.open_palette();
        assert!(render(&app).ends_with("Tab list  Enter run  Esc close"));
        app.mode = InputMode::OverlayOpen;
        assert!(render(&app).ends_with("Tab filter  Enter run  Esc close"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let (mailbox, contacts) = crate::io::fixture::load_fixture().unwrap();
        let mut config = AppConfig::default();
        config.ui.show_key_hints = false;
        let app = App::new(mailbox, contacts, &config);
        assert_eq!(render(&app), "");
    }
}
