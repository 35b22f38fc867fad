//! Table component renderer.
//!
//! This module renders the note list as a table with NAME and MODIFIED columns,
//! a cursor marker, a selection marker, and fuzzy match highlighting.

use crate::ui::helpers::{self, clip_to_width, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width of the `"> [x] "` prefix in front of every name.
const MARKER_WIDTH: usize = 6;

/// Gap between the NAME and MODIFIED columns.
const COLUMN_GAP: usize = 2;

/// Width of the NAME column for `items`: the widest label, at least the heading.
#[must_use]
pub fn name_column_width(items: &[DisplayItem]) -> usize {
    items
        .iter()
        .map(|item| display_width(&item.name))
        .max()
        .unwrap_or(0)
        .max("NAME".len())
}

/// Renders the table column headers at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(out: &mut String, row: usize, name_width: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let line = format!(
        "{:marker$}{:<name$}{:gap$}MODIFIED",
        "",
        "NAME",
        "",
        marker = MARKER_WIDTH,
        name = name_width,
        gap = COLUMN_GAP,
    );
    let line = clip_to_width(&line, cols);

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&line);
    out.push_str(&" ".repeat(cols.saturating_sub(display_width(&line))));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders all table rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(
    out: &mut String,
    row: usize,
    items: &[DisplayItem],
    name_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(out, current_row, item, name_width, theme, cols);
    }
    current_row
}

/// Renders a single note row.
///
/// # Layout
///
/// ```text
/// > [x] NAME (padded to the column) [2 spaces] MODIFIED [padding to fill line]
/// ```
///
/// # Styling Precedence
///
/// 1. Selected notes use `selected_fg`
/// 2. The cursor row is bold
/// 3. Fuzzy match highlights are drawn over either, then the row style resumes
fn render_table_row(
    out: &mut String,
    row: usize,
    item: &DisplayItem,
    name_width: usize,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);

    let mut base_style = if item.is_selected {
        Theme::fg(&theme.colors.selected_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    if item.is_cursor {
        base_style.push_str(Theme::bold());
    }

    out.push_str(&Theme::fg(&theme.colors.cursor_fg));
    out.push(if item.is_cursor { '>' } else { ' ' });
    out.push(' ');
    out.push_str(&base_style);
    out.push_str(if item.is_selected { "[x]" } else { "[ ]" });
    out.push(' ');

    helpers::push_highlighted_text(out, &item.name, &item.highlight_ranges, theme, &base_style);

    let name_len = display_width(&item.name);
    out.push_str(&" ".repeat(name_width.saturating_sub(name_len) + COLUMN_GAP));
    out.push_str(Theme::reset());

    let used = MARKER_WIDTH + name_width.max(name_len) + COLUMN_GAP;
    let modified = clip_to_width(&item.modified, cols.saturating_sub(used));
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&modified);
    out.push_str(&" ".repeat(cols.saturating_sub(used + display_width(&modified))));
    out.push_str(Theme::reset());

    row + 1
}
