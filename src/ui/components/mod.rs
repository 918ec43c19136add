//! Composable UI component renderers.
//!
//! Each component appends one part of the frame to a `String` and returns the
//! next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`anchor`]: The boxed control showing the current selection
//! - [`search`]: Type-ahead line under the anchor
//! - [`menu`]: Option rows with focus and selection styling
//! - [`empty`]: Message for an open menu without options
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! 1       [blank line]
//! 2       [Header]
//! 3       [Border]
//! 4-6     [Anchor box]
//! 7       [Search line]   open and searchable only
//! ...     [Menu rows]     open only
//! rows-1  [Border]
//! rows    [Footer]
//! ```

mod anchor;
mod empty;
mod footer;
mod header;
mod menu;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use anchor::render_anchor;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use menu::render_menu;
use search::render_search_line;

pub use anchor::{ANCHOR_MARGIN, ANCHOR_ROWS};

/// Row of the header (row 1 stays blank).
pub const HEADER_ROW: usize = 2;

/// Renders a horizontal border line at `row`.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders a whole frame for `vm`.
///
/// The menu part is drawn only while the anchor reports the menu open; an
/// open menu without options shows the empty state instead of rows.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = HEADER_ROW;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_anchor(out, current_row, &vm.anchor, theme, cols);

    if vm.anchor.is_open {
        if let Some(search) = &vm.search_bar {
            current_row = render_search_line(out, current_row, search, theme, cols);
        }
        if let Some(empty) = &vm.empty_state {
            render_empty_state(out, current_row, empty, theme, cols);
        } else {
            render_menu(out, current_row, &vm.display_items, theme, cols);
        }
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::MENU_FIRST_ROW;

    #[test]
    fn menu_starts_right_below_the_anchor() {
        // header, border, anchor box
        assert_eq!(HEADER_ROW + 2 + ANCHOR_ROWS, MENU_FIRST_ROW);
    }
}
