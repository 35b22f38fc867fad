//! Top-level rendering coordinator.
//!
//! Rendering is a pure function of state and terminal size. The renderer
//! computes the view model, picks one of the three screens, and returns the
//! frame as a string of text and ANSI escapes. Clearing the screen and writing
//! the frame is left to the runtime.
//!
//! # Architecture
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the screen for the current view model
//!
//! # Example
//!
//! ```rust
//! use notedrill::app::AppState;
//! use notedrill::domain::LabelStyle;
//! use notedrill::ui::{render, Theme};
//! use std::path::PathBuf;
//!
//! let state = AppState::new(PathBuf::from("/notes"), LabelStyle::BaseName, vec![], Theme::default());
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("0 notes"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the UI for a terminal of `rows` x `cols` into a frame string.
///
/// In the text modes the frame ends with a cursor movement to the input
/// position, so the runtime only has to make the cursor visible.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

/// Renders a view model with the screen it describes.
fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();

    if let Some(prompt) = &vm.prompt {
        components::render_prompt_screen(&mut out, vm, prompt, theme, cols, rows);
    } else if let Some(empty) = &vm.empty_state {
        components::render_empty_screen(&mut out, vm, empty, theme, cols, rows);
    } else {
        components::render_list_screen(&mut out, vm, theme, cols, rows);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InputMode;
    use crate::domain::{LabelStyle, Note, NoteKey};
    use std::path::PathBuf;

    /// Drops escape sequences, replacing cursor moves with newlines.
    fn plain(frame: &str) -> String {
        let mut out = String::new();
        let mut chars = frame.chars();
        while let Some(c) = chars.next() {
            if c != '\u{1b}' {
                out.push(c);
                continue;
            }
            for esc in chars.by_ref() {
                if esc.is_ascii_alphabetic() {
                    if esc == 'H' {
                        out.push('\n');
                    }
                    break;
                }
            }
        }
        out
    }

    fn state_with(names: &[&str]) -> AppState {
        let notes = names
            .iter()
            .enumerate()
            .map(|(i, name)| Note::new(NoteKey::new(i as u64), PathBuf::from(format!("/notes/{name}.md")), None))
            .collect();
        AppState::new(PathBuf::from("/notes"), LabelStyle::BaseName, notes, Theme::default())
    }

    #[test]
    fn list_screen_shows_markers_and_count() {
        let mut state = state_with(&["alpha", "beta"]);
        state.move_cursor_down();
        state.toggle_select_at_cursor();

        let text = plain(&render(&state, 24, 80));
        assert!(text.contains("What notes should i open ?"));
        assert!(text.contains("2 notes, 1 selected"));
        assert!(text.contains("  [ ] alpha"));
        assert!(text.contains("> [x] beta"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn prompt_screen_replaces_list() {
        let mut state = state_with(&["alpha"]);
        state.begin_text_entry(InputMode::SearchingQuery);

        let text = plain(&render(&state, 24, 80));
        assert!(text.contains("How is the note named ?"));
        assert!(text.contains("> Maths"));
        assert!(text.contains("(esc to quit)"));
        assert!(!text.contains("alpha"));
    }

    #[test]
    fn prompt_frame_ends_on_input_cursor() {
        let mut state = state_with(&[]);
        state.begin_text_entry(InputMode::NamingNewNote);
        for c in "abc".chars() {
            state.input.insert(c);
        }
        state.input.move_left();

        let frame = render(&state, 24, 80);
        assert!(frame.ends_with("\u{1b}[4;5H"));
    }

    #[test]
    fn empty_root_shows_empty_state() {
        let state = state_with(&[]);
        let text = plain(&render(&state, 24, 80));
        assert!(text.contains("No notes in /notes"));
        assert!(text.contains("Press i to create one"));
    }

    #[test]
    fn editor_error_is_shown_in_footer() {
        let mut state = state_with(&["alpha"]);
        state.last_error = Some("vim exited with 1".to_string());
        let text = plain(&render(&state, 24, 80));
        assert!(text.contains("error: vim exited with 1"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut state = state_with(&["a-rather-long-note-name", "b"]);
        state.last_error = Some("boom".to_string());
        for (rows, cols) in [(0, 0), (1, 1), (3, 5), (7, 12)] {
            let _ = render(&state, rows, cols);
        }
        state.begin_text_entry(InputMode::NamingNewNote);
        let _ = render(&state, 2, 2);
    }
}
