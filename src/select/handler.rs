//! Event handling for the select widget.
//!
//! [`handle_event`] is the widget's single entry point for input. It
//! pattern-matches the event against the current [`MenuState`], applies the
//! transition through [`SelectState`] methods and returns whether a re-render
//! is needed together with the actions the host must execute.
//!
//! # Event Types
//!
//! - **Anchor**: `Activate` toggles the menu
//! - **Keyboard**: `Key` drives navigation, commit and type-ahead search
//! - **Pointer**: `Click` commits an option while the menu is open
//! - **Timer**: `SearchTimeout` reports expiry of a scheduled clear
//! - **Lifecycle**: `Close` is an external close request, `Teardown` releases
//!   the pending timer

use super::actions::Action;
use super::modes::{Key, MenuState};
use super::state::SelectState;
use super::timer::TimerHandle;
use crate::domain::{OptionValue, Result};

/// Input delivered to the select widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The anchor control was clicked.
    Activate,
    /// A key was pressed while the widget had keyboard focus.
    Key(Key),
    /// The option at this index was clicked.
    Click(usize),
    /// A scheduled search clear fired.
    SearchTimeout(TimerHandle),
    /// Something outside the widget asked it to close.
    Close,
    /// The widget is going away.
    Teardown,
}

/// Processes an event, mutates widget state, and returns actions to execute.
///
/// The boolean is `true` when the visible state may have changed.
///
/// # Errors
///
/// Widget transitions never fail; the `Result` keeps the signature uniform
/// with the host's other handlers.
///
/// # Example
///
/// ```
/// use zelect::select::{handle_event, Event, Key, SelectConfig, SelectOption};
///
/// let options = ["apple", "banana"].into_iter().map(SelectOption::from).collect();
/// let mut select = SelectConfig::<String>::new(options).build();
///
/// let (render, _) = handle_event(&mut select, &Event::Activate)?;
/// assert!(render && select.is_open());
///
/// handle_event(&mut select, &Event::Key(Key::ArrowDown))?;
/// assert_eq!(select.focused_index(), Some(1));
/// # Ok::<(), zelect::ZelectError>(())
/// ```
pub fn handle_event<V: OptionValue>(
    state: &mut SelectState<V>,
    event: &Event,
) -> Result<(bool, Vec<Action<V>>)> {
    let _span = tracing::debug_span!(
        "handle_event",
        event_type = ?event,
        menu = ?state.menu_state()
    )
    .entered();

    match (*event, state.menu_state()) {
        (Event::Activate, _) => Ok((true, state.toggle())),

        (Event::Key(key), MenuState::Closed) => Ok(handle_closed_key(state, key)),
        (Event::Key(key), MenuState::Open) => Ok(handle_open_key(state, key)),

        (Event::Click(index), MenuState::Open) => {
            let actions = state.commit(index);
            Ok((!actions.is_empty(), actions))
        }
        (Event::Click(index), MenuState::Closed) => {
            tracing::debug!(index, "ignoring option click while closed");
            Ok((false, vec![]))
        }

        (Event::SearchTimeout(handle), _) => Ok((state.search_timeout(handle), vec![])),

        (Event::Close, MenuState::Open) => Ok((true, state.close_menu())),
        (Event::Close, MenuState::Closed) => Ok((false, vec![])),

        (Event::Teardown, _) => Ok((false, state.teardown())),
    }
}

fn handle_closed_key<V: OptionValue>(state: &mut SelectState<V>, key: Key) -> (bool, Vec<Action<V>>) {
    match key {
        Key::Space | Key::Enter | Key::ArrowDown | Key::ArrowUp => (true, state.open_menu()),
        Key::Escape | Key::Char(_) => (false, vec![]),
    }
}

fn handle_open_key<V: OptionValue>(state: &mut SelectState<V>, key: Key) -> (bool, Vec<Action<V>>) {
    match key {
        Key::ArrowDown => {
            state.focus_next();
            (true, vec![])
        }
        Key::ArrowUp => {
            state.focus_previous();
            (true, vec![])
        }
        Key::Escape => {
            let mut actions = state.close_menu();
            actions.push(Action::FocusAnchor);
            (true, actions)
        }
        Key::Enter => {
            let actions = state.commit_focused();
            (!actions.is_empty(), actions)
        }
        Key::Space | Key::Char(_) => match key.printable() {
            Some(c) => {
                let actions = state.type_char(c);
                (!actions.is_empty(), actions)
            }
            None => (false, vec![]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{SelectConfig, SelectOption};
    use serde_json::json;

    fn fruit() -> SelectState<String> {
        SelectConfig::new(
            ["apple", "banana", "cherry"]
                .into_iter()
                .map(SelectOption::from)
                .collect(),
        )
        .build()
    }

    fn press(state: &mut SelectState<String>, key: Key) -> (bool, Vec<Action<String>>) {
        handle_event(state, &Event::Key(key)).expect("widget events never fail")
    }

    #[test]
    fn activate_toggles_menu() {
        let mut select = fruit();
        handle_event(&mut select, &Event::Activate).unwrap();
        assert!(select.is_open());
        handle_event(&mut select, &Event::Activate).unwrap();
        assert!(!select.is_open());
    }

    #[test]
    fn space_and_arrows_open_a_closed_menu() {
        for key in [Key::Space, Key::ArrowDown, Key::ArrowUp, Key::Enter] {
            let mut select = fruit();
            let (render, _) = press(&mut select, key);
            assert!(render);
            assert!(select.is_open(), "{key:?} should open");
            assert_eq!(select.focused_index(), Some(0));
        }
    }

    #[test]
    fn typing_while_closed_is_ignored() {
        let mut select = fruit();
        assert_eq!(press(&mut select, Key::Char('b')), (false, vec![]));
        assert_eq!(select.search_text(), "");
    }

    #[test]
    fn arrows_stay_in_bounds() {
        let mut select = fruit();
        press(&mut select, Key::Space);
        for _ in 0..10 {
            press(&mut select, Key::ArrowDown);
            let focused = select.focused_index().unwrap();
            assert!(focused < select.options().len());
        }
        for _ in 0..10 {
            press(&mut select, Key::ArrowUp);
        }
        assert_eq!(select.focused_index(), Some(0));
    }

    #[test]
    fn escape_closes_and_returns_focus_to_anchor() {
        let mut select = fruit();
        press(&mut select, Key::Space);
        let (_, actions) = press(&mut select, Key::Escape);
        assert_eq!(actions, vec![Action::FocusAnchor]);
        assert!(!select.is_open());
    }

    #[test]
    fn type_ahead_then_enter_commits() {
        let mut select = fruit();
        press(&mut select, Key::Space);
        press(&mut select, Key::Char('b'));
        press(&mut select, Key::Char('a'));
        assert_eq!(select.focused_index(), Some(1));

        let (_, actions) = press(&mut select, Key::Enter);
        assert!(actions.contains(&Action::Change {
            value: "banana".to_string(),
            selected_index: 1
        }));
        assert!(!select.is_open());
        assert_eq!(select.search_text(), "");
    }

    #[test]
    fn search_timeout_clears_buffer() {
        let mut select = fruit();
        press(&mut select, Key::Space);
        let (_, actions) = press(&mut select, Key::Char('c'));
        let Some(Action::ScheduleSearchClear { handle, .. }) = actions.last().cloned() else {
            panic!("expected a scheduled clear");
        };

        let (render, _) = handle_event(&mut select, &Event::SearchTimeout(handle)).unwrap();
        assert!(render);
        assert_eq!(select.search_text(), "");
        assert_eq!(select.focused_index(), Some(2));

        let (render, _) = handle_event(&mut select, &Event::SearchTimeout(handle)).unwrap();
        assert!(!render);
    }

    #[test]
    fn click_commits_only_while_open() {
        let mut select = fruit();
        let (render, actions) = handle_event(&mut select, &Event::Click(2)).unwrap();
        assert!(!render && actions.is_empty());

        handle_event(&mut select, &Event::Activate).unwrap();
        let (_, actions) = handle_event(&mut select, &Event::Click(2)).unwrap();
        let changes = actions
            .iter()
            .filter(|a| matches!(a, Action::Change { .. }))
            .count();
        assert_eq!(changes, 1);
        assert_eq!(select.selected_index(), Some(2));
    }

    #[test]
    fn external_close_request() {
        let mut select = fruit();
        assert_eq!(handle_event(&mut select, &Event::Close).unwrap(), (false, vec![]));
        handle_event(&mut select, &Event::Activate).unwrap();
        let (render, _) = handle_event(&mut select, &Event::Close).unwrap();
        assert!(render);
        assert!(!select.is_open());
    }

    #[test]
    fn object_options_ignore_keystrokes() {
        let mut select = SelectConfig::new(vec![
            SelectOption::new(json!({ "id": 1 }), "first"),
            SelectOption::new(json!({ "id": 2 }), "second"),
        ])
        .build();
        handle_event(&mut select, &Event::Activate).unwrap();
        let (render, actions) = handle_event(&mut select, &Event::Key(Key::Char('s'))).unwrap();
        assert!(!render && actions.is_empty());
        assert_eq!(select.focused_index(), Some(0));
    }

    #[test]
    fn teardown_releases_timer() {
        let mut select = fruit();
        press(&mut select, Key::Space);
        press(&mut select, Key::Char('a'));
        let (_, actions) = handle_event(&mut select, &Event::Teardown).unwrap();
        assert!(matches!(actions.as_slice(), [Action::CancelSearchClear { .. }]));
    }
}
