//! Domain layer for notedrill.
//!
//! This module contains the core domain types, independent of the terminal and
//! process plumbing around them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`note`]: Note model, identity keys, and label styles
//!
//! # Examples
//!
//! ```
//! use notedrill::domain::{Note, NoteKey, Result};
//! use std::path::PathBuf;
//!
//! fn create_note() -> Result<Note> {
//!     Ok(Note::new(NoteKey::new(0), PathBuf::from("/notes/Maths.md"), None))
//! }
//! # assert!(create_note().is_ok());
//! ```

pub mod error;
pub mod note;

pub use error::{NotedrillError, Result};
pub use note::{LabelStyle, Note, NoteKey, NOTE_EXTENSION};
