use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Category;
use crate::tui::app::App;

/// Render the category tabs with a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Split into tab row and separator row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    let sep_cols = render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1], &sep_cols);
}

/// Tab text for a category. Counts are only shown when non-zero.
fn tab_text(category: Category, count: usize, short: bool) -> String {
    let label: String = if short {
        category.label().chars().take(3).collect()
    } else {
        category.label().to_string()
    };
    if count > 0 {
        format!(" {} {} ", label, count)
    } else {
        format!(" {} ", label)
    }
}

/// Render tabs and return the column positions of each separator character.
/// Falls back to three-letter labels when the full ones don't fit.
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) -> Vec<usize> {
    let counts = app.category_counts();
    let full_width: usize = 1 + Category::ALL
        .iter()
        .map(|c| tab_text(*c, counts[c], false).chars().count() + 1)
        .sum::<usize>();
    let short = full_width > area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    let mut sep_cols: Vec<usize> = Vec::new();
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );
    spans.push(Span::styled(" ", Style::default().bg(app.theme.background)));

    for category in Category::ALL {
        let is_current = app.filter == Some(category);
        let count = counts[&category];
        let text = tab_text(category, count, short);
        let style = if is_current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else if count > 0 {
            Style::default()
                .fg(app.theme.category_color(category))
                .bg(app.theme.background)
        } else {
            Style::default().fg(app.theme.dim).bg(app.theme.background)
        };
        spans.push(Span::styled(text, style));
        sep_cols.push(spans.iter().map(|s| s.content.chars().count()).sum());
        spans.push(sep.clone());
    }

    let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background));
    frame.render_widget(tabs, area);
    sep_cols
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect, sep_cols: &[usize]) {
    let width = area.width as usize;
    let bg = app.theme.background;
    let dim = app.theme.dim;

    let sep_line = |end: usize| -> String {
        (0..end)
            .map(|col| {
                if sep_cols.contains(&col) {
                    '\u{2534}'
                } else {
                    '\u{2500}'
                }
            })
            .collect()
    };

    let Some(category) = app.filter else {
        let sep_widget = Paragraph::new(sep_line(width)).style(Style::default().fg(dim).bg(bg));
        frame.render_widget(sep_widget, area);
        return;
    };

    // "filter: <label>" indicator at the right end of the separator
    let indicator = vec![
        Span::styled("filter: ", Style::default().fg(app.theme.purple).bg(bg)),
        Span::styled(
            category.label(),
            Style::default().fg(app.theme.category_color(category)).bg(bg),
        ),
    ];
    let indicator_width: usize = indicator.iter().map(|s| s.content.chars().count()).sum();
    // +2: one space before indicator, one space after (right edge buffer)
    let separator_end = width.saturating_sub(indicator_width + 2);

    let mut spans = vec![
        Span::styled(sep_line(separator_end), Style::default().fg(dim).bg(bg)),
        Span::styled(" ", Style::default().bg(bg)),
    ];
    spans.extend(indicator);
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    let sep_widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(sep_widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn counts_only_when_nonzero() {
        assert_eq!(tab_text(Category::News, 2, false), " News 2 ");
        assert_eq!(tab_text(Category::Linear, 0, false), " Linear ");
        assert_eq!(tab_text(Category::Engineering, 1, true), " Eng 1 ");
    }

    #[test]
    fn wide_bar_uses_full_labels() {
        let app = fixture_app();
        let out = render_to_string(120, 2, |frame, area| render_tab_bar(frame, &app, area));
        assert!(out.contains("Important 2"));
        assert!(out.contains("GitHub 1"));
        assert!(out.contains(" Linear "));
        assert!(out.contains('\u{2534}'));
    }

    #[test]
    fn narrow_bar_abbreviates() {
        let app = fixture_app();
        let out = render_to_string(60, 2, |frame, area| render_tab_bar(frame, &app, area));
        assert!(out.contains("Imp 2"));
        assert!(!out.contains("Important"));
    }

    #[test]
    fn active_filter_shows_indicator() {
        let mut app = fixture_app();
        app.set_filter(Some(Category::News));
        let out = render_to_string(120, 2, |frame, area| render_tab_bar(frame, &app, area));
        assert!(out.contains("filter: News"));
    }
}
