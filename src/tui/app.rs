use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::fixture::load_fixture;
use crate::model::{AppConfig, Category, Contact, ContactDirectory, Email, EmailId, Mailbox, Selection};
use crate::ops::complete::{Completion, complete};
use crate::ops::projection::{self, GroupView};
use crate::ops::selection;

use super::command_actions::CommandPaletteState;
use super::input;
use super::render;
use super::theme::Theme;

/// How long a status toast stays up
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Grouped email list
    Inbox,
    /// The selected email, full layout
    Message,
}

/// Who receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Command palette open, focus on its result list
    OverlayOpen,
    /// Focus inside a text input (the palette's filter field)
    TextEntryFocused,
}

/// A transient message in the status row
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub at: Instant,
}

/// Main application state. Owns the working set exclusively; all mutation
/// goes through the methods below.
pub struct App {
    pub mailbox: Mailbox,
    pub contacts: ContactDirectory,
    pub selection: Selection,
    pub filter: Option<Category>,
    pub view: View,
    pub mode: InputMode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub show_help: bool,
    pub command_palette: Option<CommandPaletteState>,
    pub toast: Option<Toast>,
    /// Scroll offset for the inbox list (first visible line)
    pub inbox_scroll: usize,
    /// Scroll offset for the message view
    pub message_scroll: usize,
}

impl App {
    pub fn new(mailbox: Mailbox, contacts: ContactDirectory, config: &AppConfig) -> Self {
        let mut app = App {
            mailbox,
            contacts,
            selection: Selection::default(),
            filter: None,
            view: View::Inbox,
            mode: InputMode::Normal,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            show_help: false,
            command_palette: None,
            toast: None,
            inbox_scroll: 0,
            message_scroll: 0,
        };
        app.reset_cursor();
        app
    }

    // -----------------------------------------------------------------------
    // Derived state, recomputed on every call
    // -----------------------------------------------------------------------

    pub fn visible_groups(&self) -> Vec<GroupView<'_>> {
        projection::project(self.mailbox.groups(), self.filter)
    }

    pub fn visible_ids(&self) -> Vec<EmailId> {
        projection::visible_ids(self.mailbox.groups(), self.filter)
    }

    pub fn category_counts(&self) -> indexmap::IndexMap<Category, usize> {
        projection::category_counts(self.mailbox.groups())
    }

    pub fn selected_email(&self) -> Option<&Email> {
        self.selection
            .selected
            .as_ref()
            .and_then(|id| self.mailbox.find(id))
    }

    pub fn displayed_contact(&self) -> Option<&Contact> {
        selection::displayed_contact(&self.mailbox, &self.contacts, &self.selection)
    }

    /// Position of the hovered email in the visible list
    pub fn cursor_index(&self) -> Option<usize> {
        let hovered = self.selection.hovered.as_ref()?;
        self.visible_ids().iter().position(|id| id == hovered)
    }

    // -----------------------------------------------------------------------
    // Gestures
    // -----------------------------------------------------------------------

    /// Move the cursor (hover) by `delta` rows, clamped to the visible list
    pub fn move_cursor(&mut self, delta: isize) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            selection::hover(&mut self.selection, None);
            return;
        }
        let next = match self.cursor_index() {
            Some(i) => i.saturating_add_signed(delta).min(ids.len() - 1),
            None => 0,
        };
        selection::hover(&mut self.selection, ids.get(next));
    }

    pub fn cursor_to_top(&mut self) {
        let ids = self.visible_ids();
        selection::hover(&mut self.selection, ids.first());
    }

    pub fn cursor_to_bottom(&mut self) {
        let ids = self.visible_ids();
        selection::hover(&mut self.selection, ids.last());
    }

    /// Put the cursor on the first visible email if it is not on a visible one
    pub fn reset_cursor(&mut self) {
        if self.cursor_index().is_none() {
            self.cursor_to_top();
        }
    }

    /// Open the email under the cursor
    pub fn open_hovered(&mut self) {
        let Some(id) = self.selection.hovered.clone() else {
            return;
        };
        selection::select(&mut self.mailbox, &mut self.selection, &id);
        if self.selection.is_selected(&id) {
            self.view = View::Message;
            self.message_scroll = 0;
        }
    }

    /// Leave the message view and forget the selection
    pub fn close_message(&mut self) {
        selection::clear_selection(&mut self.selection);
        self.view = View::Inbox;
        self.message_scroll = 0;
    }

    /// Set or clear the category filter, keeping the cursor on a visible row
    pub fn set_filter(&mut self, filter: Option<Category>) {
        self.filter = filter;
        self.inbox_scroll = 0;
        log::debug!("filter set to {:?}", filter.map(Category::id));
        self.reset_cursor();
    }

    /// Toggle a category: choosing the active one clears the filter
    pub fn toggle_filter(&mut self, category: Category) {
        if self.filter == Some(category) {
            self.set_filter(None);
        } else {
            self.set_filter(Some(category));
        }
    }

    /// Step through the category tabs; `None` sits between last and first
    pub fn cycle_filter(&mut self, forward: bool) {
        let all = Category::ALL;
        let next = match (self.filter, forward) {
            (None, true) => Some(all[0]),
            (None, false) => Some(all[all.len() - 1]),
            (Some(c), true) => all.get(c.index() + 1).copied(),
            (Some(c), false) => c.index().checked_sub(1).map(|i| all[i]),
        };
        self.set_filter(next);
    }

    /// Mark the hovered (else selected) email done
    pub fn mark_done(&mut self) -> Option<Completion> {
        let hovered = self.selection.hovered.clone();
        let done = complete(&mut self.mailbox, &mut self.selection, self.filter, None)?;

        // Keep the cursor on the list: follow the removed row's neighbor
        if hovered.as_ref() == Some(&done.removed.id) {
            selection::hover(&mut self.selection, done.neighbor.as_ref());
        }
        if self.view == View::Message {
            match &self.selection.selected {
                Some(next) => {
                    let next = next.clone();
                    selection::select(&mut self.mailbox, &mut self.selection, &next);
                    selection::hover(&mut self.selection, Some(&next));
                    self.message_scroll = 0;
                }
                None => self.view = View::Inbox,
            }
        }
        self.reset_cursor();
        self.notify("Marked as Done");
        Some(done)
    }

    pub fn notify(&mut self, text: &str) {
        self.toast = Some(Toast {
            text: text.to_string(),
            at: Instant::now(),
        });
    }

    /// Drop the toast once it has been visible long enough
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.at.elapsed() >= TOAST_TTL) {
            self.toast = None;
        }
    }

    // -----------------------------------------------------------------------
    // Command palette
    // -----------------------------------------------------------------------

    pub fn open_palette(&mut self) {
        self.show_help = false;
        self.command_palette = Some(CommandPaletteState::new());
        self.mode = InputMode::TextEntryFocused;
    }

    pub fn close_palette(&mut self) {
        self.command_palette = None;
        self.mode = InputMode::Normal;
    }

    pub fn toggle_palette(&mut self) {
        if self.command_palette.is_some() {
            self.close_palette();
        } else {
            self.open_palette();
        }
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let (mailbox, contacts) = load_fixture()?;
    log::info!(
        "starting TUI with {} emails in {} groups",
        mailbox.total_count(),
        mailbox.groups().len()
    );
    let mut app = App::new(mailbox, contacts, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("TUI exited");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.expire_toast();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
