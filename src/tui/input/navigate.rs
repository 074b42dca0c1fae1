use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Category;
use crate::tui::app::{App, View};
use crate::tui::command_actions::action_for_shortcut;

use super::{Intent, KeyContext};

/// Lines the message view scrolls per page key
const PAGE: isize = 10;

/// Convert Shift+lowercase letter to uppercase, matching how other terminals
/// report shifted letters
fn normalize_key(key: KeyEvent) -> KeyEvent {
    if key.modifiers.contains(KeyModifiers::SHIFT)
        && let KeyCode::Char(c) = key.code
        && c.is_ascii_lowercase()
    {
        return KeyEvent::new(
            KeyCode::Char(c.to_ascii_uppercase()),
            key.modifiers - KeyModifiers::SHIFT,
        );
    }
    key
}

pub(super) fn normal_intent(ctx: KeyContext, key: KeyEvent) -> Intent {
    let key = normalize_key(key);

    // Help overlay intercepts ? and Esc, everything else is swallowed
    if ctx.help_open {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc => Intent::ToggleHelp,
            _ => Intent::Ignore,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Intent::Quit,
            KeyCode::Char('d') if ctx.view == View::Message => Intent::ScrollMessage(PAGE),
            KeyCode::Char('u') if ctx.view == View::Message => Intent::ScrollMessage(-PAGE),
            _ => Intent::Ignore,
        };
    }

    let message = ctx.view == View::Message;
    match key.code {
        KeyCode::Char('q') => Intent::Quit,
        KeyCode::Char('?') => Intent::ToggleHelp,
        KeyCode::Char('j') | KeyCode::Down if message => Intent::ScrollMessage(1),
        KeyCode::Char('k') | KeyCode::Up if message => Intent::ScrollMessage(-1),
        KeyCode::PageDown if message => Intent::ScrollMessage(PAGE),
        KeyCode::PageUp if message => Intent::ScrollMessage(-PAGE),
        KeyCode::Char('j') | KeyCode::Down => Intent::CursorDown,
        KeyCode::Char('k') | KeyCode::Up => Intent::CursorUp,
        KeyCode::Char('g') | KeyCode::Home => Intent::CursorTop,
        KeyCode::Char('G') | KeyCode::End => Intent::CursorBottom,
        KeyCode::Enter => Intent::Open,
        KeyCode::Esc => Intent::Back,
        // Filters reshape the list, which the message view does not show
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('0'..='9') if message => Intent::Ignore,
        KeyCode::Tab => Intent::NextFilter,
        KeyCode::BackTab => Intent::PrevFilter,
        KeyCode::Char('0') => Intent::ClearFilter,
        KeyCode::Char(c @ '1'..='8') => {
            let idx = c as usize - '1' as usize;
            Intent::PickFilter(Category::ALL[idx])
        }
        KeyCode::Char(c) => action_for_shortcut(c).map_or(Intent::Ignore, Intent::Shortcut),
        _ => Intent::Ignore,
    }
}

pub(super) fn apply_navigate_intent(app: &mut App, intent: Intent) {
    match intent {
        Intent::Quit => app.should_quit = true,
        Intent::ToggleHelp => app.show_help = !app.show_help,
        Intent::CursorDown => app.move_cursor(1),
        Intent::CursorUp => app.move_cursor(-1),
        Intent::CursorTop => app.cursor_to_top(),
        Intent::CursorBottom => app.cursor_to_bottom(),
        Intent::ScrollMessage(delta) => {
            app.message_scroll = app.message_scroll.saturating_add_signed(delta);
        }
        Intent::Open => {
            if app.view == View::Inbox {
                app.open_hovered();
            }
        }
        Intent::Back => match app.view {
            View::Message => app.close_message(),
            View::Inbox if app.filter.is_some() => app.set_filter(None),
            View::Inbox => {}
        },
        // The open message stays the hover, so mark done keeps acting on it
        Intent::NextFilter | Intent::PrevFilter | Intent::PickFilter(_) | Intent::ClearFilter
            if app.view == View::Message => {}
        Intent::NextFilter => app.cycle_filter(true),
        Intent::PrevFilter => app.cycle_filter(false),
        Intent::PickFilter(category) => app.toggle_filter(category),
        Intent::ClearFilter => app.set_filter(None),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::InputMode;
    use crate::tui::command_actions::CommandAction;

    fn ctx(view: View) -> KeyContext {
        KeyContext {
            mode: InputMode::Normal,
            view,
            help_open: false,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn shift_letter_normalizes() {
        let shifted = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::SHIFT);
        assert_eq!(normal_intent(ctx(View::Inbox), shifted), Intent::CursorBottom);
        let shifted_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::SHIFT);
        assert_eq!(
            normal_intent(ctx(View::Inbox), shifted_e),
            Intent::Shortcut(CommandAction::MarkDone)
        );
    }

    #[test]
    fn j_k_scroll_in_message_view() {
        assert_eq!(
            normal_intent(ctx(View::Message), key(KeyCode::Char('j'))),
            Intent::ScrollMessage(1)
        );
        assert_eq!(
            normal_intent(ctx(View::Inbox), key(KeyCode::Char('j'))),
            Intent::CursorDown
        );
    }

    #[test]
    fn digits_map_to_categories() {
        assert_eq!(
            normal_intent(ctx(View::Inbox), key(KeyCode::Char('1'))),
            Intent::PickFilter(Category::Important)
        );
        assert_eq!(
            normal_intent(ctx(View::Inbox), key(KeyCode::Char('8'))),
            Intent::PickFilter(Category::Other)
        );
        assert_eq!(
            normal_intent(ctx(View::Inbox), key(KeyCode::Char('9'))),
            Intent::Ignore
        );
    }

    #[test]
    fn filter_keys_do_nothing_in_message_view() {
        for code in [KeyCode::Tab, KeyCode::BackTab, KeyCode::Char('0'), KeyCode::Char('4')] {
            assert_eq!(normal_intent(ctx(View::Message), key(code)), Intent::Ignore);
        }
        assert_eq!(
            normal_intent(ctx(View::Inbox), key(KeyCode::Tab)),
            Intent::NextFilter
        );
    }

    #[test]
    fn unbound_letters_are_ignored() {
        assert_eq!(
            normal_intent(ctx(View::Inbox), key(KeyCode::Char('z'))),
            Intent::Ignore
        );
    }
}
