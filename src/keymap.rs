//! Translation of Zellij key presses into widget input.
//!
//! Only unmodified (or Shift-only) characters reach the search buffer, so
//! Alt and Ctrl chords never turn into type-ahead text.

use crate::select::{Event, Key};
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to a widget event, or `None` if the widget ignores it.
///
/// Ctrl+n and Ctrl+p move focus like the arrow keys.
#[must_use]
pub fn map_key(key: &KeyWithModifier) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::Key(Key::ArrowDown)),
            BareKey::Char('p') => Some(Event::Key(Key::ArrowUp)),
            _ => None,
        };
    }
    if !is_plain(key) {
        return None;
    }

    let key = match key.bare_key {
        BareKey::Down => Key::ArrowDown,
        BareKey::Up => Key::ArrowUp,
        BareKey::Enter => Key::Enter,
        BareKey::Esc => Key::Escape,
        BareKey::Char(' ') => Key::Space,
        BareKey::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(Event::Key(key))
}

/// `q` and `Esc` leave the plugin while the menu is closed. While it is open
/// they are ordinary widget input.
#[must_use]
pub fn is_quit_key(key: &KeyWithModifier, menu_open: bool) -> bool {
    !menu_open
        && key.has_no_modifiers()
        && matches!(key.bare_key, BareKey::Esc | BareKey::Char('q'))
}

/// No modifiers, or Shift alone (which only picks the character's case).
fn is_plain(key: &KeyWithModifier) -> bool {
    key.key_modifiers
        .iter()
        .all(|modifier| *modifier == KeyModifier::Shift)
}
