use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, InputMode};
use crate::tui::command_actions::{CommandAction, Effect, Wiring};

use super::Intent;

/// Palette open with focus on the result list. Letters do nothing here so a
/// stray `e` cannot complete an email behind the overlay.
pub(super) fn overlay_intent(key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Esc => Intent::PaletteClose,
        KeyCode::Enter => Intent::PaletteRun,
        KeyCode::Up | KeyCode::Char('k') => Intent::PaletteUp,
        KeyCode::Down | KeyCode::Char('j') => Intent::PaletteDown,
        KeyCode::Tab | KeyCode::BackTab => Intent::PaletteFocusInput,
        _ => Intent::Ignore,
    }
}

/// Palette open with focus in its filter field
pub(super) fn text_entry_intent(key: KeyEvent) -> Intent {
    match key.code {
        KeyCode::Esc => Intent::PaletteClose,
        KeyCode::Enter => Intent::PaletteRun,
        KeyCode::Up => Intent::PaletteUp,
        KeyCode::Down => Intent::PaletteDown,
        KeyCode::Tab | KeyCode::BackTab => Intent::PaletteFocusList,
        KeyCode::Backspace => Intent::PaletteBackspace,
        KeyCode::Char(c) => Intent::PaletteType(c),
        _ => Intent::Ignore,
    }
}

pub(super) fn apply_palette_intent(app: &mut App, intent: Intent) {
    match intent {
        Intent::PaletteClose => app.close_palette(),
        Intent::PaletteRun => {
            let chosen = app
                .command_palette
                .as_ref()
                .and_then(|cp| cp.selected_action());
            app.close_palette();
            if let Some(action) = chosen {
                run_action(app, action);
            }
        }
        Intent::PaletteFocusInput => {
            if app.command_palette.is_some() {
                app.mode = InputMode::TextEntryFocused;
            }
        }
        Intent::PaletteFocusList => {
            if app.command_palette.is_some() {
                app.mode = InputMode::OverlayOpen;
            }
        }
        _ => {
            let Some(cp) = &mut app.command_palette else {
                return;
            };
            match intent {
                Intent::PaletteUp => cp.move_selection(-1),
                Intent::PaletteDown => cp.move_selection(1),
                Intent::PaletteType(c) => cp.push_char(c),
                Intent::PaletteBackspace => cp.pop_char(),
                _ => {}
            }
        }
    }
}

/// Run a palette action, from its shortcut or from the palette
pub(super) fn run_action(app: &mut App, action: CommandAction) {
    match action.wiring() {
        Wiring::Wired(Effect::MarkDone) => {
            if app.mark_done().is_none() {
                log::debug!("mark done: nothing to complete");
            }
        }
        Wiring::Declared => log::debug!("{:?} has no behavior", action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::fixture::load_fixture;
    use crate::model::AppConfig;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn list_focus_swallows_letters() {
        for c in ['e', 's', 'a', '#', 'q'] {
            assert_eq!(overlay_intent(key(KeyCode::Char(c))), Intent::Ignore);
        }
        assert_eq!(overlay_intent(key(KeyCode::Char('j'))), Intent::PaletteDown);
    }

    #[test]
    fn text_entry_types_letters() {
        assert_eq!(
            text_entry_intent(key(KeyCode::Char('j'))),
            Intent::PaletteType('j')
        );
        assert_eq!(
            text_entry_intent(key(KeyCode::Backspace)),
            Intent::PaletteBackspace
        );
    }

    #[test]
    fn tab_switches_focus() {
        let (mailbox, contacts) = load_fixture().unwrap();
        let mut app = App::new(mailbox, contacts, &AppConfig::default());
        app.open_palette();
        apply_palette_intent(&mut app, Intent::PaletteFocusList);
        assert_eq!(app.mode, InputMode::OverlayOpen);
        apply_palette_intent(&mut app, Intent::PaletteDown);
        assert_eq!(app.command_palette.as_ref().unwrap().selected, 1);
        apply_palette_intent(&mut app, Intent::PaletteFocusInput);
        assert_eq!(app.mode, InputMode::TextEntryFocused);
    }

    #[test]
    fn run_with_no_match_just_closes() {
        let (mailbox, contacts) = load_fixture().unwrap();
        let mut app = App::new(mailbox, contacts, &AppConfig::default());
        app.open_palette();
        for c in "zzz".chars() {
            apply_palette_intent(&mut app, Intent::PaletteType(c));
        }
        apply_palette_intent(&mut app, Intent::PaletteRun);
        assert!(app.command_palette.is_none());
        assert_eq!(app.mailbox.total_count(), 8);
    }
}
