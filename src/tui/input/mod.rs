mod command;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Category;

use super::app::{App, InputMode, View};
use super::command_actions::CommandAction;

use command::{apply_palette_intent, run_action};
use navigate::apply_navigate_intent;

/// What a keystroke means in the current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TogglePalette,
    Quit,
    ToggleHelp,
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,
    ScrollMessage(isize),
    Open,
    Back,
    NextFilter,
    PrevFilter,
    PickFilter(Category),
    ClearFilter,
    /// Single-letter palette shortcut, only produced in `Normal`
    Shortcut(CommandAction),
    PaletteUp,
    PaletteDown,
    PaletteRun,
    PaletteClose,
    PaletteFocusInput,
    PaletteFocusList,
    PaletteType(char),
    PaletteBackspace,
    Ignore,
}

/// Everything the dispatcher looks at besides the key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyContext {
    pub mode: InputMode,
    pub view: View,
    pub help_open: bool,
}

impl KeyContext {
    pub fn of(app: &App) -> Self {
        KeyContext {
            mode: app.mode,
            view: app.view,
            help_open: app.show_help,
        }
    }
}

fn is_palette_chord(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}

/// Map a key to an intent. The palette chord works in every mode; single
/// letter shortcuts only in `Normal`.
pub fn dispatch(ctx: KeyContext, key: KeyEvent) -> Intent {
    if is_palette_chord(&key) {
        return Intent::TogglePalette;
    }
    match ctx.mode {
        InputMode::Normal => navigate::normal_intent(ctx, key),
        InputMode::OverlayOpen => command::overlay_intent(key),
        InputMode::TextEntryFocused => command::text_entry_intent(key),
    }
}

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    let intent = dispatch(KeyContext::of(app), key);
    apply(app, intent);
}

/// Apply an intent to the app
pub fn apply(app: &mut App, intent: Intent) {
    match intent {
        Intent::TogglePalette => app.toggle_palette(),
        Intent::Shortcut(action) => run_action(app, action),
        Intent::PaletteUp
        | Intent::PaletteDown
        | Intent::PaletteRun
        | Intent::PaletteClose
        | Intent::PaletteFocusInput
        | Intent::PaletteFocusList
        | Intent::PaletteType(_)
        | Intent::PaletteBackspace => apply_palette_intent(app, intent),
        Intent::Ignore => {}
        _ => apply_navigate_intent(app, intent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fixture::load_fixture;
    use crate::model::{AppConfig, EmailId};

    fn app() -> App {
        let (mailbox, contacts) = load_fixture().unwrap();
        App::new(mailbox, contacts, &AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl_k() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL)
    }

    fn ctx(mode: InputMode) -> KeyContext {
        KeyContext {
            mode,
            view: View::Inbox,
            help_open: false,
        }
    }

    #[test]
    fn chord_toggles_palette_in_every_mode() {
        for mode in [
            InputMode::Normal,
            InputMode::OverlayOpen,
            InputMode::TextEntryFocused,
        ] {
            assert_eq!(dispatch(ctx(mode), ctrl_k()), Intent::TogglePalette);
        }
        let cmd_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SUPER);
        assert_eq!(dispatch(ctx(InputMode::Normal), cmd_k), Intent::TogglePalette);
    }

    #[test]
    fn single_letter_shortcuts_only_in_normal() {
        let e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(
            dispatch(ctx(InputMode::Normal), e),
            Intent::Shortcut(CommandAction::MarkDone)
        );
        assert_eq!(dispatch(ctx(InputMode::OverlayOpen), e), Intent::Ignore);
        assert_eq!(
            dispatch(ctx(InputMode::TextEntryFocused), e),
            Intent::PaletteType('e')
        );
    }

    #[test]
    fn e_marks_done_in_normal_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert!(!app.mailbox.contains(&EmailId::new("1")));
        assert_eq!(app.mailbox.total_count(), 7);
    }

    #[test]
    fn e_is_suppressed_while_palette_open() {
        let mut app = app();
        handle_key(&mut app, ctrl_k());
        assert_eq!(app.mode, InputMode::TextEntryFocused);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mailbox.total_count(), 8);
        assert_eq!(app.command_palette.as_ref().unwrap().input, "e");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, InputMode::OverlayOpen);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mailbox.total_count(), 8);
        assert_eq!(app.command_palette.as_ref().unwrap().input, "e");
    }

    #[test]
    fn palette_mark_done_runs_completion() {
        let mut app = app();
        handle_key(&mut app, ctrl_k());
        press(&mut app, KeyCode::Enter);
        assert!(app.command_palette.is_none());
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.mailbox.total_count(), 7);
        assert_eq!(app.toast.as_ref().unwrap().text, "Marked as Done");
    }

    #[test]
    fn declared_palette_action_only_closes() {
        let mut app = app();
        handle_key(&mut app, ctrl_k());
        for c in "star".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(
            app.command_palette.as_ref().unwrap().selected_action(),
            Some(CommandAction::Star)
        );
        let before = app.mailbox.clone();
        press(&mut app, KeyCode::Enter);
        assert!(app.command_palette.is_none());
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.mailbox, before);
        assert!(app.toast.is_none());
    }

    #[test]
    fn escape_closes_palette_without_effect() {
        let mut app = app();
        handle_key(&mut app, ctrl_k());
        press(&mut app, KeyCode::Esc);
        assert!(app.command_palette.is_none());
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.mailbox.total_count(), 8);
    }

    #[test]
    fn navigation_and_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selection.hovered, Some(EmailId::new("3")));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view, View::Message);
        assert_eq!(app.selection.selected, Some(EmailId::new("3")));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.view, View::Inbox);
        assert!(app.selection.selected.is_none());
    }

    #[test]
    fn number_keys_pick_and_toggle_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.filter, Some(Category::News));
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.filter, None);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.filter, Some(Category::Important));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.filter, None);
    }

    #[test]
    fn mark_done_in_message_view_acts_on_open_email() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('2'));
        apply(&mut app, Intent::PickFilter(Category::Shared));
        assert_eq!(app.filter, None);
        assert_eq!(app.selection.hovered, Some(EmailId::new("1")));

        press(&mut app, KeyCode::Char('e'));
        assert!(!app.mailbox.contains(&EmailId::new("1")));
        assert!(app.mailbox.contains(&EmailId::new("4")));
        assert_eq!(app.mailbox.total_count(), 7);
        assert_eq!(app.view, View::Message);
        assert_eq!(app.selection.selected, Some(EmailId::new("2")));
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mailbox.total_count(), 8);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
