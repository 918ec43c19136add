//! Option list renderer.
//!
//! Each option is one row under the anchor:
//!
//! ```text
//!   ✓ banana      the yellow one
//!     blueberry
//! ```
//!
//! The focused row gets the focus background across the full width; the
//! committed option carries a check mark. Focus and selection are independent
//! and both can apply to the same row.

use crate::ui::helpers::{self, pad, position_cursor, text_width, truncate_end};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

use super::anchor::ANCHOR_MARGIN;

/// Columns before the label: margin, marker and its trailing space.
const LABEL_INDENT: usize = ANCHOR_MARGIN + 2;

/// Renders all visible options starting at `row`.
pub fn render_menu(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_menu_row(out, current_row, item, theme, cols))
}

fn render_menu_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = if item.is_focused {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.focus_fg),
            Theme::bg(&theme.colors.focus_bg)
        )
    } else if item.is_selected {
        Theme::fg(&theme.colors.selected_fg)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, 1);
    out.push_str(&base);
    pad(out, ANCHOR_MARGIN);

    if item.is_selected {
        if !item.is_focused {
            out.push_str(&Theme::fg(&theme.colors.selected_fg));
        }
        out.push_str(Theme::bold());
        out.push('✓');
        out.push_str(Theme::reset());
        out.push_str(&base);
        out.push(' ');
    } else {
        pad(out, 2);
    }

    let label = truncate_end(&item.label, cols.saturating_sub(LABEL_INDENT));
    helpers::push_highlighted(out, &label, &item.highlight_ranges, theme, &base);
    let mut used = LABEL_INDENT + text_width(&label);

    if let Some(title) = &item.title {
        let room = cols.saturating_sub(used + 2);
        if room > 0 {
            let title = truncate_end(title, room);
            pad(out, 2);
            if !item.is_focused {
                out.push_str(&Theme::fg(&theme.colors.text_dim));
            }
            out.push_str(&title);
            used += 2 + text_width(&title);
        }
    }

    pad(out, cols.saturating_sub(used));
    out.push_str(Theme::reset());
    row + 1
}
