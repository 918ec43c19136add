//! Menu state and keyboard input types.
//!
//! The widget cycles between two states for its whole lifetime:
//!
//! ```text
//!            activate / ArrowDown / ArrowUp / Enter
//!   Closed ───────────────────────────────────────▶ Open ◀─┐
//!     ▲                                              │     │ ArrowDown, ArrowUp,
//!     │      Escape / activate / commit / close      │     │ printable chars
//!     └──────────────────────────────────────────────┘ ────┘
//! ```

/// Whether the option menu is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Only the anchor is shown.
    Closed,
    /// The option list is shown and receives keyboard input.
    Open,
}

impl From<bool> for MenuState {
    fn from(is_open: bool) -> Self {
        if is_open {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

/// Keyboard input understood by the widget.
///
/// Named keys and character input are distinct variants. Only
/// [`Key::Char`] carrying a printable character feeds the search buffer, so a
/// named key can never be mistaken for a one-letter search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Space,
    /// A character produced by typing.
    Char(char),
}

impl Key {
    /// Returns the character this key contributes to a search, if any.
    ///
    /// Control characters are rejected. Space counts as printable.
    #[must_use]
    pub fn printable(self) -> Option<char> {
        match self {
            Self::Char(c) if !c.is_control() => Some(c),
            Self::Space => Some(' '),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_printable_input_reaches_search() {
        assert_eq!(Key::Char('a').printable(), Some('a'));
        assert_eq!(Key::Char('7').printable(), Some('7'));
        assert_eq!(Key::Space.printable(), Some(' '));
        assert_eq!(Key::Char('\t').printable(), None);
        assert_eq!(Key::Char('\u{1b}').printable(), None);
        assert_eq!(Key::Escape.printable(), None);
        assert_eq!(Key::ArrowDown.printable(), None);
    }
}
