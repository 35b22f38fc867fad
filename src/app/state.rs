//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the picker. It owns the note
//! set, the displayed list derived from it, the cursor, the selection, the input
//! mode, and the pending text input. All list mutations go through methods here
//! so the cursor invariant (`cursor < display.len()` whenever the list is
//! non-empty) is restored after every change.
//!
//! # State Components
//!
//! - **Notes**: every known note, in insertion order
//! - **Display**: the notes currently listed, either all of them or the result
//!   of the last search
//! - **Cursor**: index into the display list
//! - **Selection**: set of [`NoteKey`]s marked for opening or deletion. Keyed by
//!   note identity, so it survives the display list being replaced.
//! - **Input Mode** and **Input**: see [`InputMode`] and [`TextInput`]
//!
//! # Example
//!
//! ```rust
//! use notedrill::app::AppState;
//! use notedrill::domain::{LabelStyle, Note, NoteKey};
//! use notedrill::ui::Theme;
//! use std::path::PathBuf;
//!
//! let notes = vec![Note::new(NoteKey::new(0), PathBuf::from("/notes/a.md"), None)];
//! let mut state = AppState::new(PathBuf::from("/notes"), LabelStyle::BaseName, notes, Theme::default());
//! state.move_cursor_down();
//! assert_eq!(state.cursor, 0);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! ```

use super::filter::{fuzzy_filter, highlight_ranges};
use super::input::{TextInput, PLACEHOLDER};
use super::modes::InputMode;
use crate::domain::{LabelStyle, Note, NoteKey};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, FooterInfo, HeaderInfo, PromptInfo, UIViewModel,
};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthChar;

/// Rows used by the list screen around the table: blank line, header, border,
/// column headers, bottom border, footer.
const LIST_CHROME_ROWS: usize = 6;

/// Maximum display width of the name column.
pub const NAME_COLUMN_WIDTH: usize = 48;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Notes root. New notes are created directly under it.
    pub root: PathBuf,

    /// How notes are labelled and matched.
    pub label_style: LabelStyle,

    /// Every known note, in insertion order. Duplicates are kept.
    pub notes: Vec<Note>,

    /// Notes currently listed. Either a copy of `notes` or a search result.
    pub display: Vec<Note>,

    /// Zero-based index into `display`.
    pub cursor: usize,

    /// Keys of selected notes.
    pub selection: BTreeSet<NoteKey>,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Pending text while naming a note or typing a query.
    pub input: TextInput,

    /// Query that produced `display`, if it is a search result.
    pub last_query: Option<String>,

    /// Most recent non-fatal runtime error, shown in the footer.
    pub last_error: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    next_key: NoteKey,
}

impl AppState {
    /// Creates the initial browsing state over the enumerated notes.
    #[must_use]
    pub fn new(root: PathBuf, label_style: LabelStyle, notes: Vec<Note>, theme: Theme) -> Self {
        let next_key = notes
            .iter()
            .map(|n| n.key.next())
            .max()
            .unwrap_or(NoteKey::new(0));

        Self {
            root,
            label_style,
            display: notes.clone(),
            notes,
            cursor: 0,
            selection: BTreeSet::new(),
            input_mode: InputMode::Browsing,
            input: TextInput::new(),
            last_query: None,
            last_error: None,
            theme,
            next_key,
        }
    }

    /// Display label of `note` under the configured style.
    #[must_use]
    pub fn label(&self, note: &Note) -> String {
        note.label(self.label_style, &self.root)
    }

    /// Moves the cursor up one row, stopping at the top.
    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the bottom.
    ///
    /// No-op when the display list is empty.
    pub fn move_cursor_down(&mut self) {
        if self.display.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.display.len() - 1);
    }

    /// Returns the note under the cursor, if any.
    #[must_use]
    pub fn note_at_cursor(&self) -> Option<&Note> {
        self.display.get(self.cursor)
    }

    #[must_use]
    pub fn is_selected(&self, note: &Note) -> bool {
        self.selection.contains(&note.key)
    }

    /// Toggles the note under the cursor in the selection.
    pub fn toggle_select_at_cursor(&mut self) {
        let Some(key) = self.note_at_cursor().map(|n| n.key) else {
            return;
        };
        if !self.selection.remove(&key) {
            self.selection.insert(key);
        }
    }

    /// Selects every displayed note, or clears the selection if exactly the
    /// displayed notes are already selected.
    pub fn toggle_select_all(&mut self) {
        let all_displayed_selected = self.selection.len() == self.display.len()
            && self.display.iter().all(|n| self.selection.contains(&n.key));

        if all_displayed_selected {
            self.selection.clear();
        } else {
            self.selection = self.display.iter().map(|n| n.key).collect();
        }
    }

    /// Paths of the selected notes, in note-set order.
    ///
    /// Keys that no longer refer to a note are ignored.
    #[must_use]
    pub fn selected_paths(&self) -> Vec<PathBuf> {
        self.notes
            .iter()
            .filter(|n| self.selection.contains(&n.key))
            .map(|n| n.path.clone())
            .collect()
    }

    /// Removes every selected note from the note set and resets the display.
    ///
    /// Returns the number of notes removed. Removal is by identity, so the
    /// result does not depend on the order in which notes were selected.
    pub fn delete_selected(&mut self) -> usize {
        let before = self.notes.len();
        let selection = std::mem::take(&mut self.selection);
        self.notes.retain(|n| !selection.contains(&n.key));
        self.reset_display();
        before - self.notes.len()
    }

    /// Shows the full note set again and clears the selection.
    pub fn reset_filter(&mut self) {
        self.selection.clear();
        self.reset_display();
    }

    /// Replaces the display with the notes matching `query`.
    pub fn apply_search(&mut self, query: &str) {
        let style = self.label_style;
        let root = self.root.clone();
        self.display = fuzzy_filter(query, &self.notes, |n| n.label(style, &root));
        self.cursor = 0;
        self.last_query = (!query.is_empty()).then(|| query.to_string());

        tracing::debug!(
            query = %query,
            matched = self.display.len(),
            total = self.notes.len(),
            "search applied"
        );
    }

    /// Appends a note named `name` (trimmed) under the root and returns its path.
    ///
    /// Returns `None` without changing anything when the trimmed name is empty
    /// or names no file, such as `/` or `..`.
    /// The file itself is not created; the editor does that on save.
    pub fn create_note(&mut self, name: &str) -> Option<PathBuf> {
        let path = Note::path_for(&self.root, name.trim())?;
        self.notes.push(Note::new(self.next_key, path.clone(), None));
        self.next_key = self.next_key.next();
        self.reset_display();
        Some(path)
    }

    /// Enters a text mode with an empty input.
    pub fn begin_text_entry(&mut self, mode: InputMode) {
        self.input_mode = mode;
        self.input.clear();
    }

    /// Returns to browsing and hands back whatever was typed.
    pub fn end_text_entry(&mut self) -> String {
        self.input_mode = InputMode::Browsing;
        self.input.take()
    }

    fn reset_display(&mut self) {
        self.display = self.notes.clone();
        self.last_query = None;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.display.len().saturating_sub(1));
    }

    /// Computes a renderable view model for a terminal of `rows` x `cols`.
    ///
    /// In the text modes the view model only carries a prompt. In browsing mode
    /// the table is windowed so the cursor row stays visible, centred when the
    /// list is longer than the screen.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();

        if let Some(prompt) = self.compute_prompt() {
            return UIViewModel {
                display_items: vec![],
                header,
                footer,
                empty_state: None,
                prompt: Some(prompt),
            };
        }

        if self.display.is_empty() {
            return UIViewModel {
                display_items: vec![],
                header,
                footer,
                empty_state: Some(self.compute_empty_state()),
                prompt: None,
            };
        }

        let available_rows = rows.saturating_sub(LIST_CHROME_ROWS).max(1);

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.display.len());
        if visible_end - visible_start < available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let name_width = NAME_COLUMN_WIDTH.min(cols.saturating_sub(16)).max(8);

        let display_items = self.display[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, note)| {
                self.compute_display_item(note, visible_start + relative_idx, name_width)
            })
            .collect();

        UIViewModel {
            display_items,
            header,
            footer,
            empty_state: None,
            prompt: None,
        }
    }

    fn compute_display_item(&self, note: &Note, absolute_idx: usize, name_width: usize) -> DisplayItem {
        let label = self.label(note);
        let name = truncate_to_width(&label, name_width);
        let visible_chars = name.chars().count();

        let highlight_ranges = self
            .last_query
            .as_deref()
            .map(|query| highlight_ranges(&label, query))
            .unwrap_or_default()
            .into_iter()
            .filter(|(start, _)| *start < visible_chars)
            .map(|(start, end)| (start, end.min(visible_chars)))
            .collect();

        DisplayItem {
            name,
            modified: note.time_ago(),
            is_cursor: absolute_idx == self.cursor,
            is_selected: self.is_selected(note),
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.last_query {
            Some(query) => format!(" What notes should i open ? matching \"{query}\" "),
            None => " What notes should i open ? ".to_string(),
        };

        let mut count = format!("{} notes", self.notes.len());
        if !self.selection.is_empty() {
            count.push_str(&format!(", {} selected", self.selection.len()));
        }

        HeaderInfo { title, count }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browsing => {
                "q: quit  enter: open  space: mark  a: all  i: new  /: find  :: reset  d: delete"
            }
            InputMode::NamingNewNote => "enter: create  esc: cancel",
            InputMode::SearchingQuery => "enter: search  esc: cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
            error: self.last_error.clone(),
        }
    }

    fn compute_prompt(&self) -> Option<PromptInfo> {
        let question = match self.input_mode {
            InputMode::Browsing => return None,
            InputMode::NamingNewNote => "How should I name the note ?",
            InputMode::SearchingQuery => "How is the note named ?",
        };

        Some(PromptInfo {
            question: question.to_string(),
            value: self.input.value(),
            cursor: self.input.cursor(),
            placeholder: PLACEHOLDER.to_string(),
            hint: "(esc to quit)".to_string(),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        match &self.last_query {
            Some(query) if !self.notes.is_empty() => EmptyState {
                message: format!("No notes match \"{query}\""),
                subtitle: "Press : to show every note".to_string(),
            },
            _ => EmptyState {
                message: format!("No notes in {}", display_root(&self.root)),
                subtitle: "Press i to create one".to_string(),
            },
        }
    }
}

fn display_root(root: &Path) -> String {
    root.to_string_lossy().into_owned()
}

/// Truncates `text` to at most `width` terminal columns, ending in `...` when cut.
fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
