//! notedrill: an interactive terminal picker for markdown notes.
//!
//! notedrill lists every `*.md` file under a notes root and lets you:
//! - Navigate and fuzzy-search the list by note name
//! - Select several notes and open them together in your editor
//! - Create a note by typing its name
//! - Drop notes from the current list without touching the files

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← crossterm loop
//! │  - Key mapping, terminal suspend/resume             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, mode dispatch                    │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                     ┌───────────────┐
//! │ UI Layer      │                     │ Infrastructure│
//! │ (ui/)         │                     │ - Note scan   │
//! │ - Rendering   │                     │ - Editor      │
//! │ - Theming     │                     │ - Paths       │
//! └───────────────┘                     └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Note model, errors               │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Note, errors)
//! - [`infrastructure`]: Note enumeration, editor launching, paths
//! - [`ui`]: Terminal rendering with theme support
//! - [`runtime`]: crossterm event loop
//! - [`observability`]: File-based tracing
//!
//! # Configuration
//!
//! Configuration comes from the environment, read once at startup:
//!
//! | Variable | Meaning |
//! |---|---|
//! | `Notes` | Notes root directory (required) |
//! | `EDITOR` | Editor command, default `nvim` |
//! | `NOTEDRILL_LABELS` | `name` (default) or `path` |
//! | `NOTEDRILL_THEME` | Built-in theme name |
//! | `NOTEDRILL_THEME_FILE` | Theme TOML file, overrides `NOTEDRILL_THEME` |
//! | `NOTEDRILL_LOG` | Tracing filter; logging is off when unset |
//!
//! # Example
//!
//! ```rust
//! use notedrill::{handle_event, Config, Event};
//! use std::collections::BTreeMap;
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join("Maths.md"), "# Maths")?;
//!
//! let mut vars = BTreeMap::new();
//! vars.insert("Notes".to_string(), dir.path().to_string_lossy().into_owned());
//! let config = Config::from_map(&vars)?;
//!
//! let mut state = notedrill::initialize(&config)?;
//! let (_render, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{LabelStyle, Note, NoteKey, NotedrillError, Result};
pub use ui::Theme;

use infrastructure::{enumerate_notes, expand_tilde, get_data_dir, DEFAULT_EDITOR};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Environment variable naming the notes root.
pub const NOTES_VAR: &str = "Notes";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for notes. New notes are created directly under it.
    pub root: PathBuf,

    /// Editor command. May carry leading arguments, e.g. `code --wait`.
    pub editor: String,

    /// Whether notes are labelled by base name or by path.
    pub label_style: LabelStyle,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,

    /// Tracing filter directive. Tracing is disabled when `None`.
    pub log_filter: Option<String>,

    /// Directory holding the log file.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from a variable map.
    ///
    /// Empty values count as unset. A leading `~` in paths expands to `HOME`.
    ///
    /// # Errors
    ///
    /// Returns [`NotedrillError::Config`] when `Notes` is missing or empty, or
    /// when `NOTEDRILL_LABELS` is not `name` or `path`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use notedrill::{Config, LabelStyle};
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    ///
    /// let mut vars = BTreeMap::new();
    /// vars.insert("Notes".to_string(), "~/notes".to_string());
    /// vars.insert("HOME".to_string(), "/home/ana".to_string());
    ///
    /// let config = Config::from_map(&vars)?;
    /// assert_eq!(config.root, PathBuf::from("/home/ana/notes"));
    /// assert_eq!(config.editor, "nvim");
    /// assert_eq!(config.label_style, LabelStyle::BaseName);
    /// # Ok::<(), notedrill::NotedrillError>(())
    /// ```
    pub fn from_map(vars: &BTreeMap<String, String>) -> Result<Self> {
        let get = |key: &str| lookup(vars, key);
        let home = get("HOME");

        let root = get(NOTES_VAR)
            .map(|root| expand_tilde(root, home))
            .ok_or_else(|| {
                NotedrillError::Config(format!(
                    "{NOTES_VAR} is not set; point it at your notes directory"
                ))
            })?;

        let label_style = match get("NOTEDRILL_LABELS") {
            None => LabelStyle::default(),
            Some(value) => LabelStyle::parse(value).ok_or_else(|| {
                NotedrillError::Config(format!(
                    "NOTEDRILL_LABELS must be `name` or `path`, got `{value}`"
                ))
            })?,
        };

        Ok(Self {
            root,
            editor: get("EDITOR").unwrap_or(DEFAULT_EDITOR).to_string(),
            label_style,
            theme_name: get("NOTEDRILL_THEME").map(String::from),
            theme_file: get("NOTEDRILL_THEME_FILE").map(|f| expand_tilde(f, home)),
            log_filter: get("NOTEDRILL_LOG").map(String::from),
            data_dir: get_data_dir(get("XDG_DATA_HOME"), home),
        })
    }

    /// Builds the configuration from the process environment.
    ///
    /// Variables whose value is not valid Unicode are ignored.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_map`].
    pub fn from_env() -> Result<Self> {
        let vars: BTreeMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::from_map(&vars)
    }
}

/// Returns the trimmed value of `key`, treating empty values as unset.
fn lookup<'a>(vars: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// Builds the initial application state: enumerates notes and loads the theme.
///
/// # Errors
///
/// Returns [`NotedrillError::Enumerate`] when the root cannot be walked and
/// [`NotedrillError::Theme`] when the configured theme cannot be loaded.
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize", root = %config.root.display()).entered();

    let notes = enumerate_notes(&config.root)?;
    let theme = Theme::load(config.theme_name.as_deref(), config.theme_file.as_deref())?;

    tracing::debug!(notes = notes.len(), theme = %theme.name, "initialized");

    Ok(AppState::new(config.root.clone(), config.label_style, notes, theme))
}
