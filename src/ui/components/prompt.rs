//! Prompt component renderer.
//!
//! This module renders the text entry screen used while naming a new note or
//! typing a search query.

use crate::ui::helpers::{clip_to_width, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

/// Left margin of the input line, `"> "`.
const INPUT_PREFIX: &str = "> ";

/// Renders the question, the input line and the hint starting at `row`.
///
/// # Layout
///
/// ```text
/// How should I name the note ?
///
/// > Maths
///
/// (esc to quit)
/// ```
///
/// The placeholder is drawn dimmed when the input is empty.
///
/// # Returns
///
/// `(next_row, (cursor_row, cursor_col))`: the row after the hint and the
/// 1-indexed terminal position of the input cursor.
pub fn render_prompt(
    out: &mut String,
    row: usize,
    prompt: &PromptInfo,
    theme: &Theme,
    cols: usize,
) -> (usize, (usize, usize)) {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.prompt_fg));
    out.push_str(&clip_to_width(&prompt.question, cols));
    out.push_str(Theme::reset());

    let input_row = row + 2;
    position_cursor(out, input_row, 1);
    out.push_str(&Theme::fg(&theme.colors.cursor_fg));
    out.push_str(INPUT_PREFIX);

    let room = cols.saturating_sub(INPUT_PREFIX.len());
    if prompt.value.is_empty() {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&clip_to_width(&prompt.placeholder, room));
    } else {
        out.push_str(&Theme::fg(&theme.colors.prompt_fg));
        out.push_str(&clip_to_width(&prompt.value, room));
    }
    out.push_str(Theme::reset());

    let before_cursor: String = prompt.value.chars().take(prompt.cursor).collect();
    let cursor_col = (INPUT_PREFIX.len() + display_width(&before_cursor) + 1).min(cols.max(1));

    let hint_row = input_row + 2;
    position_cursor(out, hint_row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&clip_to_width(&prompt.hint, cols));
    out.push_str(Theme::reset());

    (hint_row + 1, (input_row, cursor_col))
}
