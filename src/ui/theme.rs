//! Theme management and ANSI escape sequence generation.
//!
//! A theme is a named palette of hex colors. Built-in themes are compiled into
//! the binary; custom themes are read from TOML files with the same layout.
//!
//! # Built-in Themes
//!
//! - `drill`: green title bar, red cursor and selection (default)
//! - `catppuccin-mocha`: dark theme with warm tones
//! - `catppuccin-latte`: light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#F9D6CA"
//! header_bg = "#569C6C"
//! count_fg = "#B39393"
//! text_normal = "#E8E3E3"
//! text_dim = "#B39393"
//! border = "#569C6C"
//! cursor_fg = "#FF6969"
//! selected_fg = "#FF6969"
//! prompt_fg = "#F9D6CA"
//! match_highlight_fg = "#1E1E1E"
//! match_highlight_bg = "#F9D6CA"
//! empty_state_fg = "#569C6C"
//! error_fg = "#FF6969"
//! ```
//!
//! # Example
//!
//! ```rust
//! use notedrill::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::{NotedrillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "drill";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title bar text color.
    pub header_fg: String,
    /// Optional title bar background.
    #[serde(default)]
    pub header_bg: Option<String>,
    /// Note count next to the title.
    pub count_fg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, modification times, hints).
    pub text_dim: String,
    /// Separator line color.
    pub border: String,

    /// Cursor marker and cursor row color.
    pub cursor_fg: String,
    /// Selected note color.
    pub selected_fg: String,

    /// Prompt question and input text color.
    pub prompt_fg: String,

    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,
    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,
    /// Editor failure message color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `drill`, `catppuccin-mocha`, `catppuccin-latte`.
    /// Returns `None` for any other name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use notedrill::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            DEFAULT_THEME => include_str!("../../themes/drill.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NotedrillError::Theme`] if the file cannot be read or its
    /// content is not a valid theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| NotedrillError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| NotedrillError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Resolves the configured theme. A theme file takes precedence over a name.
    ///
    /// # Errors
    ///
    /// Returns [`NotedrillError::Theme`] for an unreadable file or an unknown name.
    pub fn load(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(file) = file {
            return Self::from_file(file);
        }

        match name {
            None => Ok(Self::default()),
            Some(name) => Self::from_name(name)
                .ok_or_else(|| NotedrillError::Theme(format!("unknown theme `{name}`"))),
        }
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns white for anything that is not six hex digits.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in `drill` theme.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in `themes/drill.toml` fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in drill theme should always parse")
    }
}
