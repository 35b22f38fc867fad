//! Header component renderer.

use crate::ui::helpers::{clip_to_width, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and note count at `row`.
///
/// The title is drawn inline with the header colors, followed by the count in
/// the dim count color. The rest of the line is cleared.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Layout
///
/// ```text
///  What notes should i open ?   12 notes, 2 selected
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let title = clip_to_width(&header.title, cols);
    let title_width = display_width(&title);

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&title);
    out.push_str(Theme::reset());

    let count = clip_to_width(&format!("  {}", header.count), cols.saturating_sub(title_width));
    let count_width = display_width(&count);

    out.push_str(&Theme::fg(&theme.colors.count_fg));
    out.push_str(&count);
    out.push_str(&" ".repeat(cols.saturating_sub(title_width + count_width)));
    out.push_str(Theme::reset());

    row + 1
}
