//! Path helpers for the notes root and the log directory.
//!
//! All functions take the relevant environment values as arguments instead of
//! reading the process environment, so [`Config`](crate::Config) stays the only
//! place where variables are looked up.

use std::path::PathBuf;

/// Directory name used under the user data directory.
const APP_DIR: &str = "notedrill";

/// Returns the data directory that holds the log file.
///
/// Resolves to `$XDG_DATA_HOME/notedrill` when `XDG_DATA_HOME` is set and
/// non-empty, otherwise `$HOME/.local/share/notedrill`. Returns `None` when
/// neither is available.
///
/// # Examples
///
/// ```
/// use notedrill::infrastructure::get_data_dir;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     get_data_dir(None, Some("/home/ana")),
///     Some(PathBuf::from("/home/ana/.local/share/notedrill"))
/// );
/// assert_eq!(
///     get_data_dir(Some("/xdg"), Some("/home/ana")),
///     Some(PathBuf::from("/xdg/notedrill"))
/// );
/// ```
#[must_use]
pub fn get_data_dir(xdg_data_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_data_home.filter(|s| !s.is_empty()) {
        return Some(PathBuf::from(xdg).join(APP_DIR));
    }
    home.filter(|s| !s.is_empty())
        .map(|h| PathBuf::from(h).join(".local").join("share").join(APP_DIR))
}

/// Expands a leading `~` to the given home directory.
///
/// Paths without a tilde, or any path when `home` is unknown, are returned as is.
///
/// # Examples
///
/// ```
/// use notedrill::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("~/notes", Some("/home/ana")), PathBuf::from("/home/ana/notes"));
/// assert_eq!(expand_tilde("~", Some("/home/ana")), PathBuf::from("/home/ana"));
/// assert_eq!(expand_tilde("/srv/notes", Some("/home/ana")), PathBuf::from("/srv/notes"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> PathBuf {
    match home {
        Some(home) if path == "~" => PathBuf::from(home),
        Some(home) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_home_no_data_dir() {
        assert_eq!(get_data_dir(None, None), None);
        assert_eq!(get_data_dir(Some(""), Some("")), None);
    }

    #[test]
    fn tilde_without_home_is_untouched() {
        assert_eq!(expand_tilde("~/notes", None), PathBuf::from("~/notes"));
    }
}
