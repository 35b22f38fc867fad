//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready data: labels already truncated, highlight
//! ranges already computed, cursor and selection already resolved per row.
//!
//! # Example
//!
//! ```rust
//! use notedrill::ui::viewmodel::{DisplayItem, FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     display_items: vec![DisplayItem {
//!         name: "Maths".to_string(),
//!         modified: "2 hours ago".to_string(),
//!         is_cursor: true,
//!         is_selected: false,
//!         highlight_ranges: vec![(0, 2)],
//!     }],
//!     header: HeaderInfo { title: " What notes should i open ? ".to_string(), count: "1 notes".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string(), error: None },
//!     empty_state: None,
//!     prompt: None,
//! };
//! assert_eq!(vm.display_items.len(), 1);
//! ```

/// Complete UI view model for one frame.
///
/// Exactly one of three screens is described: the prompt when `prompt` is set,
/// the empty state when `empty_state` is set, the note table otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Rows of the table window.
    pub display_items: Vec<DisplayItem>,

    pub header: HeaderInfo,

    pub footer: FooterInfo,

    /// Set when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Set while a text mode is active.
    pub prompt: Option<PromptInfo>,
}

/// One row of the note table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Note label, already truncated to the name column.
    pub name: String,

    /// Human-readable modification time, e.g. `"3 days ago"`.
    pub modified: String,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,

    /// Whether this note is in the selection.
    pub is_selected: bool,

    /// Character ranges of `name` to highlight for the last search.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title bar text.
    pub title: String,

    /// Note and selection counts, e.g. `"12 notes, 2 selected"`.
    pub count: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,

    /// Last editor failure, if any.
    pub error: Option<String>,
}

/// Shown when no items are available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Text prompt for naming a note or typing a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInfo {
    /// Question asked above the input.
    pub question: String,

    /// Current input text.
    pub value: String,

    /// Input cursor, in characters.
    pub cursor: usize,

    /// Dimmed text shown while `value` is empty.
    pub placeholder: String,

    /// Help line under the input.
    pub hint: String,
}
