//! Key-to-action translation
//!
//! Maps raw terminal key events to semantic actions according to the
//! current screen. While the entry field is revealed it has key focus, so
//! printable characters become draft input instead of shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::state::{EntryState, Screen};

/// Semantic user actions, produced by key mapping and mouse hit-testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the application
    Quit,
    /// Reveal the entry field
    ActivateEntry,
    /// Submit the current draft
    ConfirmEntry,
    /// Dismiss the entry field without submitting
    CancelEntry,
    /// Append one character to the draft
    EntryInput(char),
    /// Delete the last draft character
    EntryBackspace,
    /// Move the list highlight up one row
    CursorUp,
    /// Move the list highlight down one row
    CursorDown,
    /// Open the detail screen for the highlighted row
    OpenSelected,
    /// Open the detail screen for a specific row (mouse path)
    OpenRow(usize),
    /// Return from the detail screen to the list
    GoBack,
}

/// Translates a key event into an action for the given screen
///
/// # Returns
/// The matching action, or None for keys with no meaning on this screen
pub fn action_for(screen: &Screen, key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits, even while the entry field has focus
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::List {
            entry: EntryState::Hidden,
        } => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::ActivateEntry),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::Enter => Some(Action::OpenSelected),
            _ => None,
        },
        Screen::List {
            entry: EntryState::Revealed { .. },
        } => match key.code {
            KeyCode::Enter => Some(Action::ConfirmEntry),
            KeyCode::Esc => Some(Action::CancelEntry),
            KeyCode::Backspace => Some(Action::EntryBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::EntryInput(ch))
            }
            _ => None,
        },
        Screen::Detail { .. } => match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(Action::GoBack),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::city::CityName;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn revealed() -> Screen {
        Screen::List {
            entry: EntryState::Revealed {
                draft: String::new(),
            },
        }
    }

    fn detail() -> Screen {
        Screen::Detail {
            city: CityName::new("Edmonton").unwrap(),
        }
    }

    #[test]
    fn list_screen_shortcuts() {
        let screen = Screen::default();
        assert_eq!(
            action_for(&screen, key(KeyCode::Char('a'))),
            Some(Action::ActivateEntry)
        );
        assert_eq!(
            action_for(&screen, key(KeyCode::Enter)),
            Some(Action::OpenSelected)
        );
        assert_eq!(
            action_for(&screen, key(KeyCode::Down)),
            Some(Action::CursorDown)
        );
        assert_eq!(action_for(&screen, key(KeyCode::Char('q'))), Some(Action::Quit));
    }

    #[test]
    fn revealed_entry_captures_printable_keys() {
        let screen = revealed();
        assert_eq!(
            action_for(&screen, key(KeyCode::Char('q'))),
            Some(Action::EntryInput('q'))
        );
        assert_eq!(
            action_for(&screen, key(KeyCode::Char('a'))),
            Some(Action::EntryInput('a'))
        );
        assert_eq!(
            action_for(&screen, key(KeyCode::Enter)),
            Some(Action::ConfirmEntry)
        );
        assert_eq!(
            action_for(&screen, key(KeyCode::Esc)),
            Some(Action::CancelEntry)
        );
        assert_eq!(
            action_for(&screen, key(KeyCode::Backspace)),
            Some(Action::EntryBackspace)
        );
    }

    #[test]
    fn detail_screen_only_navigates_back_or_quits() {
        let screen = detail();
        assert_eq!(action_for(&screen, key(KeyCode::Esc)), Some(Action::GoBack));
        assert_eq!(
            action_for(&screen, key(KeyCode::Char('b'))),
            Some(Action::GoBack)
        );
        assert_eq!(action_for(&screen, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(action_for(&screen, key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_from_every_screen() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(&Screen::default(), ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(&revealed(), ctrl_c), Some(Action::Quit));
        assert_eq!(action_for(&detail(), ctrl_c), Some(Action::Quit));
    }
}
