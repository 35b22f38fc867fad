//! Terminal key to application event mapping.
//!
//! # Keybindings
//!
//! Browsing:
//! - `q` / `Ctrl+c`: Quit
//! - `j` / `Down` / `Ctrl+n`: Move down
//! - `k` / `Up` / `Ctrl+p`: Move up
//! - `Space`: Toggle the note under the cursor
//! - `a`: Select all displayed notes, or clear the selection
//! - `Enter`: Open the selection, or the note under the cursor
//! - `i`: Name a new note
//! - `/`: Search
//! - `:`: Show every note again
//! - `d` / `Delete`: Remove the selected notes from the list
//!
//! Naming a note or typing a query:
//! - Characters, `Backspace`, `Delete`, `Left`, `Right`, `Home`, `End`: Edit
//! - `Enter`: Confirm
//! - `Esc` / `Ctrl+c`: Cancel

use crate::app::{Event, InputMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press to an application event for the current mode.
///
/// Returns `None` for keys with no binding in that mode.
#[must_use]
pub fn map_key_event(key: &KeyEvent, mode: InputMode) -> Option<Event> {
    tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key event");

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if mode.is_text_entry() {
        return map_text_key(key.code, ctrl, key.modifiers.contains(KeyModifiers::ALT));
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Some(Event::Quit),
            KeyCode::Char('n') => Some(Event::KeyDown),
            KeyCode::Char('p') => Some(Event::KeyUp),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Char('q') => Event::Quit,
        KeyCode::Char('a') => Event::ToggleSelectAll,
        KeyCode::Up | KeyCode::Char('k') => Event::KeyUp,
        KeyCode::Down | KeyCode::Char('j') => Event::KeyDown,
        KeyCode::Char('/') => Event::EnterSearch,
        KeyCode::Char('d') | KeyCode::Delete => Event::DeleteSelected,
        KeyCode::Enter => Event::Confirm,
        KeyCode::Char('i') => Event::EnterInsert,
        KeyCode::Char(':') => Event::ResetFilter,
        KeyCode::Char(' ') => Event::ToggleSelect,
        _ => return None,
    };
    Some(event)
}

fn map_text_key(code: KeyCode, ctrl: bool, alt: bool) -> Option<Event> {
    let event = match code {
        KeyCode::Char('c') if ctrl => Event::Cancel,
        KeyCode::Esc => Event::Cancel,
        KeyCode::Enter => Event::Confirm,
        KeyCode::Backspace => Event::Backspace,
        KeyCode::Delete => Event::DeleteChar,
        KeyCode::Left => Event::CursorLeft,
        KeyCode::Right => Event::CursorRight,
        KeyCode::Home => Event::CursorHome,
        KeyCode::End => Event::CursorEnd,
        KeyCode::Char(c) if !ctrl && !alt => Event::Char(c),
        _ => return None,
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn browsing_bindings() {
        let browse = |k: KeyEvent| map_key_event(&k, InputMode::Browsing);
        assert_eq!(browse(key(KeyCode::Char('q'))), Some(Event::Quit));
        assert_eq!(browse(ctrl('c')), Some(Event::Quit));
        assert_eq!(browse(key(KeyCode::Char('a'))), Some(Event::ToggleSelectAll));
        assert_eq!(browse(key(KeyCode::Char('k'))), Some(Event::KeyUp));
        assert_eq!(browse(key(KeyCode::Up)), Some(Event::KeyUp));
        assert_eq!(browse(key(KeyCode::Char('j'))), Some(Event::KeyDown));
        assert_eq!(browse(key(KeyCode::Down)), Some(Event::KeyDown));
        assert_eq!(browse(key(KeyCode::Char('/'))), Some(Event::EnterSearch));
        assert_eq!(browse(key(KeyCode::Char('d'))), Some(Event::DeleteSelected));
        assert_eq!(browse(key(KeyCode::Delete)), Some(Event::DeleteSelected));
        assert_eq!(browse(key(KeyCode::Enter)), Some(Event::Confirm));
        assert_eq!(browse(key(KeyCode::Char('i'))), Some(Event::EnterInsert));
        assert_eq!(browse(key(KeyCode::Char(':'))), Some(Event::ResetFilter));
        assert_eq!(browse(key(KeyCode::Char(' '))), Some(Event::ToggleSelect));
        assert_eq!(browse(key(KeyCode::Char('x'))), None);
        assert_eq!(browse(key(KeyCode::Esc)), None);
    }

    #[test]
    fn text_mode_keys_are_input() {
        for mode in [InputMode::NamingNewNote, InputMode::SearchingQuery] {
            let text = |k: KeyEvent| map_key_event(&k, mode);
            assert_eq!(text(key(KeyCode::Char('q'))), Some(Event::Char('q')));
            assert_eq!(text(key(KeyCode::Char('j'))), Some(Event::Char('j')));
            assert_eq!(
                text(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT)),
                Some(Event::Char('M'))
            );
            assert_eq!(text(key(KeyCode::Esc)), Some(Event::Cancel));
            assert_eq!(text(ctrl('c')), Some(Event::Cancel));
            assert_eq!(text(key(KeyCode::Enter)), Some(Event::Confirm));
            assert_eq!(text(key(KeyCode::Delete)), Some(Event::DeleteChar));
            assert_eq!(text(key(KeyCode::Home)), Some(Event::CursorHome));
            assert_eq!(text(ctrl('x')), None);
        }
    }
}
