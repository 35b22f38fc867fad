//! Note domain model.
//!
//! A [`Note`] is one markdown file under the notes root. Notes are identified
//! inside a running picker by a [`NoteKey`], which stays stable while the
//! displayed list is filtered, reordered, or reset. The path is what gets handed
//! to the editor; the label is what the user sees and what fuzzy search matches.

use std::path::{Component, Path, PathBuf};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Extension given to notes created from the picker.
pub const NOTE_EXTENSION: &str = "md";

/// Process-local identity of a note entry.
///
/// Keys are handed out in insertion order and never reused, so two entries that
/// point at the same file (a duplicate created twice) still have distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteKey(u64);

impl NoteKey {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the key following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// How a note is labelled in the list and matched by search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStyle {
    /// File name without the `.md` extension (`Maths`).
    #[default]
    BaseName,
    /// Path relative to the notes root (`school/Maths.md`).
    Path,
}

impl LabelStyle {
    /// Parses the `NOTEDRILL_LABELS` value. Unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" | "base" | "basename" => Some(Self::BaseName),
            "path" | "full" => Some(Self::Path),
            _ => None,
        }
    }
}

/// A markdown note known to the picker.
///
/// # Fields
///
/// - `key`: identity used by the selection set
/// - `path`: full path passed to the editor
/// - `modified`: Unix timestamp of the last modification, `None` for notes
///   created in this session that may not exist on disk yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub key: NoteKey,
    pub path: PathBuf,
    pub modified: Option<i64>,
}

impl Note {
    #[must_use]
    pub const fn new(key: NoteKey, path: PathBuf, modified: Option<i64>) -> Self {
        Self {
            key,
            path,
            modified,
        }
    }

    /// Builds the path of a note named `name` under `root`.
    ///
    /// Only the plain parts of `name` are kept, so leading separators, `.`,
    /// and `..` cannot move the note outside `root`. Returns `None` when
    /// nothing is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use notedrill::domain::Note;
    /// use std::path::{Path, PathBuf};
    ///
    /// let root = Path::new("/notes");
    /// assert_eq!(Note::path_for(root, "Foo"), Some(PathBuf::from("/notes/Foo.md")));
    /// assert_eq!(Note::path_for(root, "/etc/Foo"), Some(PathBuf::from("/notes/etc/Foo.md")));
    /// assert_eq!(Note::path_for(root, "/"), None);
    /// ```
    #[must_use]
    pub fn path_for(root: &Path, name: &str) -> Option<PathBuf> {
        let relative: PathBuf = Path::new(name)
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .collect();
        if relative.as_os_str().is_empty() {
            return None;
        }

        let mut file = relative.into_os_string();
        file.push(format!(".{NOTE_EXTENSION}"));
        Some(root.join(file))
    }

    /// Returns the display label for this note.
    ///
    /// # Examples
    ///
    /// ```
    /// use notedrill::domain::{LabelStyle, Note, NoteKey};
    /// use std::path::{Path, PathBuf};
    ///
    /// let note = Note::new(NoteKey::new(0), PathBuf::from("/notes/school/Maths.md"), None);
    /// assert_eq!(note.label(LabelStyle::BaseName, Path::new("/notes")), "Maths");
    /// assert_eq!(note.label(LabelStyle::Path, Path::new("/notes")), "school/Maths.md");
    /// ```
    #[must_use]
    pub fn label(&self, style: LabelStyle, root: &Path) -> String {
        match style {
            LabelStyle::BaseName => self
                .path
                .file_stem()
                .map_or_else(|| self.path.to_string_lossy(), |stem| stem.to_string_lossy())
                .into_owned(),
            LabelStyle::Path => self
                .path
                .strip_prefix(root)
                .unwrap_or(&self.path)
                .to_string_lossy()
                .into_owned(),
        }
    }

    /// Returns a human-readable string describing when the note was last modified.
    ///
    /// - Unknown modification time: "new"
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn time_ago(&self) -> String {
        let Some(modified) = self.modified else {
            return "new".to_string();
        };
        let diff = chrono::Utc::now().timestamp() - modified;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}
