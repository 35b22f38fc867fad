//! Event handling and state transition logic.
//!
//! [`handle_event`] is the whole interaction state machine: it takes one event,
//! mutates [`AppState`], and returns whether a re-render is needed together with
//! the actions the runtime must perform. It never blocks and never performs I/O,
//! which is what lets the tests drive it without a terminal or an editor.
//!
//! # Dispatch
//!
//! Dispatch is by [`InputMode`] first, then by event:
//!
//! - **Browsing**: single-key commands (navigate, select, open, delete, mode entry)
//! - **`NamingNewNote`** / **`SearchingQuery`**: editing keys feed the pending
//!   input; `Confirm` and `Cancel` leave the mode
//!
//! [`Event::EditorExited`] is accepted in every mode.
//!
//! # Example
//!
//! ```rust
//! use notedrill::app::{handle_event, AppState, Event};
//! use notedrill::domain::LabelStyle;
//! use notedrill::ui::Theme;
//! use std::path::PathBuf;
//!
//! let mut state = AppState::new(PathBuf::from("/notes"), LabelStyle::BaseName, vec![], Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), notedrill::NotedrillError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events produced by the terminal keymap or by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Exit the program.
    Quit,
    /// Select every displayed note, or clear the selection.
    ToggleSelectAll,
    /// Move the cursor up one row.
    KeyUp,
    /// Move the cursor down one row.
    KeyDown,
    /// Start typing a search query.
    EnterSearch,
    /// Remove the selected notes from the list.
    DeleteSelected,
    /// Open notes (browsing) or accept the pending input (text modes).
    Confirm,
    /// Start typing the name of a new note.
    EnterInsert,
    /// Show every note again and clear the selection.
    ResetFilter,
    /// Toggle the note under the cursor in the selection.
    ToggleSelect,

    /// Leave a text mode, discarding the input.
    Cancel,
    /// Insert a character into the pending input.
    Char(char),
    /// Delete the character before the input cursor.
    Backspace,
    /// Delete the character under the input cursor.
    DeleteChar,
    /// Move the input cursor left.
    CursorLeft,
    /// Move the input cursor right.
    CursorRight,
    /// Move the input cursor to the start.
    CursorHome,
    /// Move the input cursor to the end.
    CursorEnd,

    /// The editor process finished.
    ///
    /// Carries the error message when it failed to start or exited unsuccessfully.
    EditorExited(std::result::Result<(), String>),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Events that do not apply to the current mode are
/// ignored and return `(false, vec![])`.
///
/// # Errors
///
/// No transition currently fails; the `Result` keeps the handler signature
/// uniform with the runtime, which propagates terminal errors with `?`.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, mode = ?state.input_mode).entered();

    if let Event::EditorExited(outcome) = event {
        return Ok(handle_editor_exit(state, outcome));
    }

    let outcome = match state.input_mode {
        InputMode::Browsing => handle_browsing(state, event),
        InputMode::NamingNewNote => handle_naming(state, event),
        InputMode::SearchingQuery => handle_searching(state, event),
    };
    Ok(outcome)
}

fn handle_browsing(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Quit => (false, vec![Action::Quit]),
        Event::ToggleSelectAll => {
            state.toggle_select_all();
            tracing::debug!(selected = state.selection.len(), "toggled select all");
            (true, vec![])
        }
        Event::KeyUp => {
            state.move_cursor_up();
            (true, vec![])
        }
        Event::KeyDown => {
            state.move_cursor_down();
            (true, vec![])
        }
        Event::EnterSearch => {
            tracing::debug!("entering search mode");
            state.begin_text_entry(InputMode::SearchingQuery);
            (true, vec![])
        }
        Event::EnterInsert => {
            tracing::debug!("entering insert mode");
            state.begin_text_entry(InputMode::NamingNewNote);
            (true, vec![])
        }
        Event::DeleteSelected => {
            let removed = state.delete_selected();
            tracing::debug!(removed, remaining = state.notes.len(), "deleted selected notes");
            (true, vec![])
        }
        Event::ResetFilter => {
            state.reset_filter();
            (true, vec![])
        }
        Event::ToggleSelect => {
            state.toggle_select_at_cursor();
            (true, vec![])
        }
        Event::Confirm => open_notes(state),
        Event::Cancel
        | Event::Char(_)
        | Event::Backspace
        | Event::DeleteChar
        | Event::CursorLeft
        | Event::CursorRight
        | Event::CursorHome
        | Event::CursorEnd
        | Event::EditorExited(_) => (false, vec![]),
    }
}

fn open_notes(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.selection.is_empty() {
        let Some(note) = state.note_at_cursor() else {
            tracing::debug!("no note under cursor");
            return (false, vec![]);
        };
        tracing::debug!(path = %note.path.display(), "opening note under cursor");
        return (false, vec![Action::OpenEditor { paths: vec![note.path.clone()] }]);
    }

    let paths = state.selected_paths();
    state.selection.clear();

    if paths.is_empty() {
        tracing::debug!("selection referred to no remaining notes");
        return (true, vec![]);
    }

    tracing::debug!(count = paths.len(), "opening selected notes");
    (true, vec![Action::OpenEditor { paths }])
}

fn handle_naming(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Confirm => {
            let name = state.end_text_entry();
            match state.create_note(&name) {
                Some(path) => {
                    tracing::debug!(path = %path.display(), "created note");
                    (true, vec![Action::OpenEditor { paths: vec![path] }])
                }
                None => {
                    tracing::debug!("note name left no file name, nothing created");
                    (true, vec![])
                }
            }
        }
        Event::Cancel => {
            state.end_text_entry();
            (true, vec![])
        }
        _ => (edit_input(state, event), vec![]),
    }
}

fn handle_searching(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Confirm => {
            let query = state.end_text_entry();
            state.apply_search(&query);
            (true, vec![])
        }
        Event::Cancel => {
            state.end_text_entry();
            (true, vec![])
        }
        _ => (edit_input(state, event), vec![]),
    }
}

/// Applies an editing event to the pending input. Returns whether it applied.
fn edit_input(state: &mut AppState, event: &Event) -> bool {
    match event {
        Event::Char(c) => state.input.insert(*c),
        Event::Backspace => state.input.backspace(),
        Event::DeleteChar => state.input.delete(),
        Event::CursorLeft => state.input.move_left(),
        Event::CursorRight => state.input.move_right(),
        Event::CursorHome => state.input.move_home(),
        Event::CursorEnd => state.input.move_end(),
        _ => return false,
    }
    tracing::trace!(input = %state.input.value(), "input updated");
    true
}

fn handle_editor_exit(state: &mut AppState, outcome: &std::result::Result<(), String>) -> (bool, Vec<Action>) {
    match outcome {
        Ok(()) => {
            state.last_error = None;
        }
        Err(message) => {
            tracing::warn!(error = %message, "editor failed");
            state.last_error = Some(message.clone());
        }
    }
    (true, vec![])
}
