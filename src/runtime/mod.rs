//! Terminal runtime: the crossterm event loop around the state machine.
//!
//! ```text
//! event::read → map_key_event → Session::step → render → TerminalGuard::draw
//! ```
//!
//! The loop is single-threaded and blocks on input. An editor launch blocks it
//! too, with the terminal handed to the editor until it exits.
//!
//! # Modules
//!
//! - [`keymap`]: crossterm key events to application events
//! - [`session`]: one event in, actions executed, editor outcome fed back
//! - [`terminal`]: raw mode, alternate screen, suspend around the editor

pub mod keymap;
pub mod session;
pub mod terminal;

pub use keymap::map_key_event;
pub use session::{Flow, Session};
pub use terminal::{SuspendingLauncher, TerminalGuard};

use crate::domain::Result;
use crate::infrastructure::ProcessLauncher;
use crate::{initialize, ui, Config};
use crossterm::event::{self, Event as TerminalEvent, KeyEventKind};

/// Runs the picker until the user quits.
///
/// # Errors
///
/// Returns startup errors (unreadable notes root, bad theme) and terminal I/O
/// errors. Editor failures are shown in the UI instead.
pub fn run(config: &Config) -> Result<()> {
    let state = initialize(config)?;
    let launcher = SuspendingLauncher::new(ProcessLauncher::new(config.editor.clone()));
    let mut session = Session::new(state, launcher);

    let mut terminal = TerminalGuard::enter()?;
    let mut render = true;

    loop {
        if render {
            let (rows, cols) = terminal.size()?;
            let frame = ui::render(&session.state, rows, cols);
            terminal.draw(&frame, session.state.input_mode.is_text_entry())?;
        }

        let event = match event::read()? {
            TerminalEvent::Key(key) if key.kind == KeyEventKind::Press => {
                map_key_event(&key, session.state.input_mode)
            }
            TerminalEvent::Resize(..) => {
                render = true;
                continue;
            }
            _ => None,
        };

        let Some(event) = event else {
            render = false;
            continue;
        };

        match session.step(&event)? {
            Flow::Quit => break,
            Flow::Continue { render: should_render } => render = should_render,
        }
    }

    tracing::debug!("picker closed");
    Ok(())
}
