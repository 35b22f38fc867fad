//! Event execution loop body, independent of the terminal.
//!
//! A [`Session`] owns the application state and an [`EditorLauncher`]. Each
//! [`Session::step`] runs one event through [`handle_event`], executes the
//! returned actions, and feeds the editor outcome back as
//! [`Event::EditorExited`]. The terminal loop in [`run`](super::run) only reads
//! keys and draws frames around it.

use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::{NotedrillError, Result};
use crate::infrastructure::EditorLauncher;

/// What the loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading events, redrawing first if `render` is set.
    Continue { render: bool },
    /// Leave the loop and exit successfully.
    Quit,
}

/// Application state paired with the launcher that executes its actions.
#[derive(Debug)]
pub struct Session<L> {
    pub state: AppState,
    pub launcher: L,
}

impl<L: EditorLauncher> Session<L> {
    pub const fn new(state: AppState, launcher: L) -> Self {
        Self { state, launcher }
    }

    /// Processes one event and executes its actions in order.
    ///
    /// Editor failures are not errors here: they are recorded in the state
    /// through `EditorExited` and the session continues.
    ///
    /// # Errors
    ///
    /// Propagates any launcher error other than [`NotedrillError::Editor`],
    /// such as a terminal I/O failure while suspending or restoring the screen.
    pub fn step(&mut self, event: &Event) -> Result<Flow> {
        let (mut render, actions) = handle_event(&mut self.state, event)?;

        tracing::debug!(action_count = actions.len(), render, "event handled");

        for action in actions {
            match action {
                Action::Quit => return Ok(Flow::Quit),
                Action::OpenEditor { paths } => {
                    let outcome = match self.launcher.launch(&paths) {
                        Ok(()) => Ok(()),
                        Err(NotedrillError::Editor(message)) => Err(message),
                        Err(e) => return Err(e),
                    };
                    let (exit_render, _) = handle_event(&mut self.state, &Event::EditorExited(outcome))?;
                    render |= exit_render;
                }
            }
        }

        Ok(Flow::Continue { render })
    }
}
