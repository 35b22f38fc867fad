//! Recursive markdown enumeration under the notes root.

use crate::domain::{Note, NoteKey, NotedrillError, Result, NOTE_EXTENSION};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Walks `root` and returns every `*.md` file as a [`Note`], in file-name order.
///
/// Keys are assigned sequentially from zero in the returned order. Symlinks are
/// followed. Entries below the root that cannot be read are logged and skipped;
/// a root that cannot be read at all is an error.
///
/// # Errors
///
/// Returns [`NotedrillError::Enumerate`] when the root itself is missing or
/// unreadable.
///
/// # Example
///
/// ```no_run
/// use notedrill::infrastructure::enumerate_notes;
/// use std::path::Path;
///
/// let notes = enumerate_notes(Path::new("/home/ana/notes"))?;
/// println!("{} notes", notes.len());
/// # Ok::<(), notedrill::NotedrillError>(())
/// ```
pub fn enumerate_notes(root: &Path) -> Result<Vec<Note>> {
    let _span = tracing::debug_span!("enumerate_notes", root = %root.display()).entered();

    let mut notes = Vec::new();
    let mut key = NoteKey::new(0);

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(NotedrillError::Enumerate {
                    root: root.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !is_markdown_file(&entry) {
            continue;
        }

        notes.push(Note::new(key, entry.path().to_path_buf(), modified_timestamp(&entry)));
        key = key.next();
    }

    tracing::debug!(count = notes.len(), "notes enumerated");
    Ok(notes)
}

fn is_markdown_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext == NOTE_EXTENSION)
}

fn modified_timestamp(entry: &DirEntry) -> Option<i64> {
    let modified = entry.metadata().ok()?.modified().ok()?;
    Some(chrono::DateTime::<chrono::Utc>::from(modified).timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "# note\n").unwrap();
    }

    #[test]
    fn finds_markdown_recursively_in_name_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "beta.md");
        touch(dir.path(), "alpha.md");
        touch(dir.path(), "school/maths.md");
        touch(dir.path(), "todo.txt");
        touch(dir.path(), "README");

        let notes = enumerate_notes(dir.path()).unwrap();
        let rel: Vec<String> = notes
            .iter()
            .map(|n| n.path.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(rel, vec!["alpha.md", "beta.md", "school/maths.md"]);
    }

    #[test]
    fn keys_follow_returned_order() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.md");
        touch(dir.path(), "b.md");

        let notes = enumerate_notes(dir.path()).unwrap();
        assert_eq!(notes[0].key, NoteKey::new(0));
        assert_eq!(notes[1].key, NoteKey::new(1));
        assert!(notes.iter().all(|n| n.modified.is_some()));
    }

    #[test]
    fn directory_named_like_markdown_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("drafts.md")).unwrap();
        touch(dir.path(), "drafts.md/inner.md");

        let notes = enumerate_notes(dir.path()).unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].path.ends_with("drafts.md/inner.md"));
    }

    #[test]
    fn empty_root_yields_no_notes() {
        let dir = TempDir::new().unwrap();
        assert!(enumerate_notes(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = enumerate_notes(&missing).unwrap_err();
        assert!(matches!(err, NotedrillError::Enumerate { .. }));
    }
}
