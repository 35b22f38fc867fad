//! Error types for notedrill.
//!
//! This module defines the centralized error type [`NotedrillError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors fall into two groups. Startup errors (`Config`, `Enumerate`) abort the
//! program before the event loop starts. `Editor` errors are non-fatal: the runtime
//! converts them into an [`Event::EditorExited`](crate::app::Event::EditorExited)
//! message and the picker keeps running.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for notedrill operations.
///
/// # Examples
///
/// ```
/// use notedrill::NotedrillError;
///
/// fn validate_config() -> Result<(), NotedrillError> {
///     Err(NotedrillError::Config("Notes is not set".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum NotedrillError {
    /// Configuration is invalid or missing.
    ///
    /// Raised when the notes root variable is unset or empty.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The notes root could not be walked.
    ///
    /// Fatal at startup: without an enumerated note list there is nothing to pick.
    #[error("Cannot enumerate notes under {root}: {source}")]
    Enumerate {
        /// Root directory that failed to enumerate.
        root: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// The editor failed to start or exited abnormally.
    ///
    /// Never fatal; surfaced in the footer on the next render.
    #[error("Editor error: {0}")]
    Editor(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Terminal or filesystem I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for notedrill operations.
pub type Result<T> = std::result::Result<T, NotedrillError>;
