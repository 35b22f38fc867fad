//! Input mode state type for the application.
//!
//! The picker is always in exactly one [`InputMode`]. The mode decides whether a
//! key is a command (browsing) or text for the pending input (naming a new note,
//! typing a search query).
//!
//! # Example
//!
//! ```rust
//! use notedrill::app::InputMode;
//!
//! let mode = InputMode::SearchingQuery;
//! assert!(mode.is_text_entry());
//! assert!(!InputMode::Browsing.is_text_entry());
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default list mode: single-key commands navigate, select, open, delete.
    #[default]
    Browsing,

    /// Typing the name of a new note. Enter creates it, Esc discards it.
    NamingNewNote,

    /// Typing a fuzzy search query. Enter filters the list, Esc leaves it as is.
    SearchingQuery,
}

impl InputMode {
    /// Whether keys in this mode feed the pending text input.
    #[must_use]
    pub const fn is_text_entry(self) -> bool {
        matches!(self, Self::NamingNewNote | Self::SearchingQuery)
    }
}
