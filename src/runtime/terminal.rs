//! Raw mode and alternate screen handling.

use crate::domain::Result;
use crate::infrastructure::EditorLauncher;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

/// Owns the terminal while the picker runs.
///
/// Entering switches to raw mode on the alternate screen; dropping the guard
/// restores the terminal, including on early returns through `?`.
#[derive(Debug)]
pub struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    /// Takes over the terminal and installs a panic hook that gives it back.
    ///
    /// # Errors
    ///
    /// Fails when stdout is not a terminal or raw mode cannot be enabled.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));

        Ok(Self { stdout })
    }

    /// Terminal size as `(rows, cols)`.
    ///
    /// # Errors
    ///
    /// Fails when the size cannot be queried.
    pub fn size(&self) -> Result<(usize, usize)> {
        let (cols, rows) = terminal::size()?;
        Ok((usize::from(rows), usize::from(cols)))
    }

    /// Clears the screen and writes one frame.
    ///
    /// The cursor is shown only when `show_cursor` is set; the frame leaves it
    /// on the input in the text modes.
    ///
    /// # Errors
    ///
    /// Fails when writing to the terminal fails.
    pub fn draw(&mut self, frame: &str, show_cursor: bool) -> Result<()> {
        queue!(self.stdout, Hide, MoveTo(0, 0), Clear(ClearType::All))?;
        self.stdout.write_all(frame.as_bytes())?;
        if show_cursor {
            queue!(self.stdout, Show)?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)
}

fn suspend() -> io::Result<()> {
    restore()
}

fn resume() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)
}

/// Hands the terminal to the editor for the duration of each launch.
///
/// The screen is restored after the editor exits whether or not it succeeded.
#[derive(Debug)]
pub struct SuspendingLauncher<L> {
    inner: L,
}

impl<L> SuspendingLauncher<L> {
    pub const fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: EditorLauncher> EditorLauncher for SuspendingLauncher<L> {
    fn launch(&mut self, paths: &[PathBuf]) -> Result<()> {
        suspend()?;
        let result = self.inner.launch(paths);
        resume()?;
        result
    }
}
