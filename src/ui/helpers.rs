//! Shared rendering utilities.
//!
//! Every helper appends to a frame buffer instead of printing, so a whole frame
//! is built as one `String` and written to the terminal in a single call.
//! Widths are terminal columns (via `unicode-width`), never byte lengths, and
//! highlight ranges are character indices.

use crate::ui::theme::Theme;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Appends an escape moving the cursor to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Terminal column width of `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `width` columns.
#[must_use]
pub fn clip_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Appends `text` with the given character ranges highlighted.
///
/// After each highlighted section the style is reset and `base_style` is
/// re-applied, so the rest of the row keeps its color. Ranges past the end of
/// `text` are clipped.
///
/// # Example
///
/// ```rust
/// use notedrill::ui::helpers::push_highlighted_text;
/// use notedrill::ui::Theme;
///
/// let mut out = String::new();
/// push_highlighted_text(&mut out, "Maths", &[(0, 2)], &Theme::default(), "");
/// assert!(out.contains("Ma"));
/// assert!(out.ends_with("ths"));
/// ```
pub fn push_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_style: &str,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start == end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(base_style);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Appends `text` centered in `cols` columns, padded on both sides.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text = clip_to_width(text, cols);
    let width = display_width(&text);
    let padding = cols.saturating_sub(width) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + width)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_splits_text_around_ranges() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted_text(&mut out, "beta", &[(0, 1), (2, 4)], &theme, "");

        let highlight = format!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        let expected = format!(
            "{highlight}b{reset}e{highlight}ta{reset}",
            reset = Theme::reset()
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn highlight_is_char_safe_and_clips() {
        let mut out = String::new();
        push_highlighted_text(&mut out, "été", &[(1, 10)], &Theme::default(), "");
        assert!(out.starts_with('é'));
        assert!(out.contains("té"));
    }

    #[test]
    fn width_counts_columns() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(clip_to_width("日本語", 5), "日本");
    }

    #[test]
    fn centered_fills_the_line() {
        let mut out = String::new();
        push_centered(&mut out, "ab", 6);
        assert_eq!(out, "  ab  ");
    }
}
