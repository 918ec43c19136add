//! Shared rendering utilities.
//!
//! Components write ANSI output into a `String` frame instead of straight to
//! stdout, so a whole frame is printed at once and can be inspected in tests.

use crate::ui::theme::Theme;

/// Appends a cursor move to `row`/`col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.extend(std::iter::repeat(' ').take(count));
}

/// Appends `text` with some character ranges highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. After each highlighted run the base colors are restored:
/// `restore` is re-applied so a focused row keeps its background.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(restore);

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

/// Number of terminal cells `text` is assumed to take (one per character).
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
#[must_use]
pub fn truncate_end(text: &str, max: usize) -> String {
    if text_width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_matched_prefix() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "banana", &[(0, 2)], &theme, "");

        let highlight = Theme::bg(&theme.colors.match_highlight_bg);
        let start = out.find(&highlight).expect("highlight applied");
        let reset = out.find(Theme::reset()).expect("reset applied");
        assert!(start < reset);
        assert!(out[..reset].ends_with("ba"));
        assert!(out.ends_with("nana"));
    }

    #[test]
    fn highlight_tolerates_out_of_range() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "ab", &[(0, 5)], &theme, "");
        assert!(out.contains("ab"));
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_end("héllo", 10), "héllo");
        assert_eq!(truncate_end("héllo", 3), "hé…");
        assert_eq!(truncate_end("héllo", 0), "");
    }
}
