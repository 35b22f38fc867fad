//! Empty state component renderer.

use crate::ui::helpers::{position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Row of the empty state message. The subtitle goes on the row below.
const MESSAGE_ROW: usize = 6;

/// Renders the empty state message.
///
/// Displays a centered two-line message when there is nothing to list: either
/// the notes root holds no markdown files, or the last search matched nothing.
///
/// # Layout
///
/// ```text
/// [header rows]
///            No notes match "zzz"
///         Press : to show every note
/// ```
///
/// The message uses the `empty_state_fg` theme color, the subtitle uses
/// `text_dim` with dim styling.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(out, MESSAGE_ROW, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    push_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    position_cursor(out, MESSAGE_ROW + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());
}
