//! External editor launching.
//!
//! The state machine never spawns processes itself; it emits
//! [`Action::OpenEditor`](crate::app::Action::OpenEditor) and the runtime hands
//! the paths to an [`EditorLauncher`]. Tests substitute a recording launcher.

use crate::domain::{NotedrillError, Result};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Editor used when `EDITOR` is unset or empty.
pub const DEFAULT_EDITOR: &str = "nvim";

/// Runs an editor on a list of note paths and blocks until it exits.
pub trait EditorLauncher {
    /// Opens `paths` in the editor.
    ///
    /// # Errors
    ///
    /// Returns [`NotedrillError::Editor`] when the editor cannot be started or
    /// exits unsuccessfully.
    fn launch(&mut self, paths: &[PathBuf]) -> Result<()>;
}

/// Launches the configured editor as a foreground child process.
///
/// The child inherits stdin, stdout, and stderr. The caller is responsible for
/// releasing the terminal before calling [`EditorLauncher::launch`].
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    program: String,
}

impl ProcessLauncher {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Builds the command without running it.
    ///
    /// `EDITOR` values such as `code --wait` are split on whitespace: the first
    /// word is the program and the rest are leading arguments.
    #[must_use]
    pub fn command(&self, paths: &[PathBuf]) -> Command {
        let mut words = self.program.split_whitespace();
        let program = words.next().unwrap_or(DEFAULT_EDITOR);

        let mut command = Command::new(program);
        command
            .args(words)
            .args(paths)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR)
    }
}

impl EditorLauncher for ProcessLauncher {
    #[tracing::instrument(level = "debug", skip(self), fields(editor = %self.program))]
    fn launch(&mut self, paths: &[PathBuf]) -> Result<()> {
        let status = self
            .command(paths)
            .status()
            .map_err(|e| NotedrillError::Editor(format!("failed to start {}: {e}", self.program)))?;

        tracing::debug!(status = %status, "editor exited");

        if status.success() {
            Ok(())
        } else {
            Err(NotedrillError::Editor(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}
