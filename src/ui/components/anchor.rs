//! Anchor control renderer.
//!
//! The anchor is the always-visible box showing the current selection. It
//! takes three rows and keeps a fixed margin so the menu lines up under it.

use crate::ui::helpers::{pad, position_cursor, text_width, truncate_end};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::AnchorInfo;

/// Horizontal margin for the anchor box (spaces on left and right).
pub const ANCHOR_MARGIN: usize = 2;

/// Rows taken by the anchor box.
pub const ANCHOR_ROWS: usize = 3;

/// Renders the anchor box starting at `row`.
///
/// ```text
/// ┌──────────────────────┐
/// │ banana             ▾ │
/// └──────────────────────┘
/// ```
///
/// The outline switches to `anchor_border` while the menu is open and the
/// placeholder is drawn dimmed.
pub fn render_anchor(out: &mut String, row: usize, anchor: &AnchorInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(ANCHOR_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if anchor.is_open {
        Theme::fg(&theme.colors.anchor_border)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let indicator = if anchor.is_open { '▴' } else { '▾' };

    position_cursor(out, row, 1);
    pad(out, ANCHOR_MARGIN);
    out.push_str(&border);
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    // One space either side of the text, then the indicator and its space.
    let text = truncate_end(&anchor.text, inner_width.saturating_sub(4));
    let padding = inner_width.saturating_sub(text_width(&text) + 4);

    position_cursor(out, row + 1, 1);
    pad(out, ANCHOR_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push(' ');
    if anchor.is_placeholder {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    } else {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&text);
    out.push_str(Theme::reset());
    pad(out, padding + 1);
    out.push_str(&border);
    out.push(indicator);
    out.push(' ');
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, ANCHOR_MARGIN);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + ANCHOR_ROWS
}
