//! Footer component renderer.
//!
//! This module renders the help bar, prefixed with the last editor failure when
//! there is one.

use crate::ui::helpers::{clip_to_width, display_width, position_cursor, push_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer at `row`.
///
/// Without an error the keybinding hints are centered and dimmed. With an error
/// the line starts with `error: <message>` in the error color and the hints
/// follow in whatever width remains.
///
/// # Returns
///
/// The next available row position (row + 1)
///
/// # Truncation
///
/// Text wider than the terminal is cut to fit, so narrow terminals never wrap
/// the footer onto a new line.
pub fn render_footer(out: &mut String, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    let Some(error) = &footer.error else {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        push_centered(out, &footer.keybindings, cols);
        out.push_str(Theme::reset());
        return row + 1;
    };

    let message = clip_to_width(&format!("error: {error}"), cols);
    let message_width = display_width(&message);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.error_fg));
    out.push_str(&message);
    out.push_str(Theme::reset());

    let hints = clip_to_width(&format!("  {}", footer.keybindings), cols.saturating_sub(message_width));
    let hints_width = display_width(&hints);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&hints);
    out.push_str(&" ".repeat(cols.saturating_sub(message_width + hints_width)));
    out.push_str(Theme::reset());

    row + 1
}
