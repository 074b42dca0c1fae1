pub mod command_palette;
pub mod contact_panel;
pub mod header;
pub mod help_overlay;
pub mod helpers;
pub mod inbox_view;
pub mod message_view;
pub mod sidebar;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

const SIDEBAR_W: u16 = 4;
const CONTACT_W: u16 = 32;
/// Below this width the contact panel is dropped
const CONTACT_MIN_TOTAL: u16 = 90;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let (sidebar, main, contact) = split_columns(area);
    sidebar::render_sidebar(frame, app, sidebar);

    // Layout: header (1 row) | tabs (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(2), // category tabs + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(main);

    header::render_header(frame, app, chunks[0]);
    tab_bar::render_tab_bar(frame, app, chunks[1]);

    match app.view {
        View::Inbox => inbox_view::render_inbox_view(frame, app, chunks[2]),
        View::Message => message_view::render_message_view(frame, app, chunks[2]),
    }

    if let Some(contact_area) = contact {
        contact_panel::render_contact_panel(frame, app, contact_area);
    }

    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.command_palette.is_some() {
        command_palette::render_command_palette(frame, app, area);
    }
}

/// Sidebar | main | optional contact panel
fn split_columns(area: Rect) -> (Rect, Rect, Option<Rect>) {
    if area.width >= CONTACT_MIN_TOTAL {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(SIDEBAR_W),
                Constraint::Min(1),
                Constraint::Length(CONTACT_W),
            ])
            .split(area);
        (cols[0], cols[1], Some(cols[2]))
    } else {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_W), Constraint::Min(1)])
            .split(area);
        (cols[0], cols[1], None)
    }
}
