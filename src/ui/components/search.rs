//! Type-ahead line renderer.

use crate::ui::helpers::{pad, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

use super::anchor::ANCHOR_MARGIN;

/// Renders the search buffer on one row, aligned with the anchor text.
///
/// An empty buffer shows a dimmed hint instead.
pub fn render_search_line(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    pad(out, ANCHOR_MARGIN + 2);

    let used = if search.query.is_empty() {
        let hint = "type to jump";
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(hint);
        text_width(hint)
    } else {
        let label = "Search: ";
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(label);
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&search.query);
        text_width(label) + text_width(&search.query)
    };

    pad(out, cols.saturating_sub(ANCHOR_MARGIN + 2 + used));
    out.push_str(Theme::reset());
    row + 1
}
