//! Composable UI component renderers.
//!
//! Each component appends one part of the frame to a shared buffer and returns
//! the next free row, so screens are assembled top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with note count
//! - [`footer`]: Keybinding hints and last editor error
//! - [`prompt`]: Question, input line and hint for the text modes
//! - [`table`]: Note list with NAME and MODIFIED columns
//! - [`empty`]: Empty state message when nothing is listed
//!
//! # Screens
//!
//! - [`render_list_screen`]: Header + Table + Footer
//! - [`render_empty_screen`]: Header + Empty state + Footer
//! - [`render_prompt_screen`]: Prompt + Footer

mod empty;
mod footer;
mod header;
mod prompt;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, PromptInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use prompt::render_prompt;
use table::{name_column_width, render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the bottom border and footer on the last two rows.
fn render_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(2);
    render_border(out, footer_row - 1, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

/// Renders the browsing layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Table Headers]
/// [Table Rows]
/// [Blank rows]
/// [Border]
/// [Footer]
/// ```
///
/// Uses 6 lines for chrome; the view model already holds only as many rows as
/// fit in the rest.
pub fn render_list_screen(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let name_width = name_column_width(&vm.display_items);

    let mut current_row = 2;
    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_table_headers(out, current_row, name_width, theme, cols);
    render_table_rows(out, current_row, &vm.display_items, name_width, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
}

/// Renders the header and a centered empty state message.
pub fn render_empty_screen(
    out: &mut String,
    vm: &UIViewModel,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let current_row = render_header(out, 2, &vm.header, theme, cols);
    render_border(out, current_row, &theme.colors.border, cols);
    render_empty_state(out, empty, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
}

/// Renders a text prompt and leaves the terminal cursor on the input.
pub fn render_prompt_screen(
    out: &mut String,
    vm: &UIViewModel,
    prompt: &PromptInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let (_next_row, (cursor_row, cursor_col)) = render_prompt(out, 2, prompt, theme, cols);

    render_bottom(out, vm, theme, cols, rows);
    position_cursor(out, cursor_row, cursor_col);
}
