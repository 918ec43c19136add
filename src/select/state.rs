//! Select widget state and its transitions.
//!
//! [`SelectState`] is the single source of truth for one searchable select.
//! It combines the persistent state (committed selection, open flag), each
//! wrapped in a [`Control`] that records who owns it, with the ephemeral
//! interaction state (focused index, search buffer).
//!
//! # State Components
//!
//! - **Options**: ordered option descriptors, replaceable by the owner
//! - **Selection**: committed value, owned or delegated
//! - **Open**: menu visibility, owned or delegated independently
//! - **Focus**: keyboard cursor, always `None` or within bounds
//! - **Search**: type-ahead buffer and its inactivity timer
//!
//! Transitions return the [`Action`]s the host must execute. Delegated state
//! is never mutated by a transition; the corresponding request action is
//! emitted instead and the owner answers through [`SelectState::sync_value`]
//! or [`SelectState::sync_open`].
//!
//! # Example
//!
//! ```
//! use zelect::select::{Action, SelectConfig, SelectOption};
//!
//! let options = ["apple", "banana", "cherry"].into_iter().map(SelectOption::from).collect();
//! let mut select = SelectConfig::<String>::new(options).build();
//!
//! select.open_menu();
//! select.type_char('b');
//! assert_eq!(select.focused_index(), Some(1));
//!
//! let actions = select.commit_focused();
//! assert!(matches!(actions[0], Action::Change { selected_index: 1, .. }));
//! assert_eq!(select.selected_value().map(String::as_str), Some("banana"));
//! ```

use super::actions::Action;
use super::control::Control;
use super::matcher::{self, SearchProjection};
use super::modes::MenuState;
use super::option::SelectOption;
use super::search::SearchBuffer;
use super::timer::TimerHandle;
use crate::domain::{values_equal, OptionValue};
use std::time::Duration;

/// Default inactivity delay before the search buffer clears.
pub const DEFAULT_CLEAR_SEARCH_AFTER: Duration = Duration::from_millis(500);

/// Default anchor text when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select…";

/// Construction options for a [`SelectState`].
///
/// Supplying [`value`](Self::value) or [`is_open`](Self::is_open) hands
/// ownership of that piece of state to the caller for the widget's lifetime.
#[derive(Debug, Clone)]
pub struct SelectConfig<V: OptionValue> {
    options: Vec<SelectOption<V>>,
    value: Option<Option<V>>,
    default_value: Option<V>,
    is_open: Option<bool>,
    clear_search_after: Duration,
    searchable_value: Option<SearchProjection<V>>,
    placeholder: String,
    close_on_commit: bool,
}

impl<V: OptionValue> SelectConfig<V> {
    /// Starts a configuration with the given options and all defaults.
    #[must_use]
    pub fn new(options: Vec<SelectOption<V>>) -> Self {
        Self {
            options,
            value: None,
            default_value: None,
            is_open: None,
            clear_search_after: DEFAULT_CLEAR_SEARCH_AFTER,
            searchable_value: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            close_on_commit: true,
        }
    }

    /// Makes the selection controlled, starting from `value`.
    #[must_use]
    pub fn value(mut self, value: Option<V>) -> Self {
        self.value = Some(value);
        self
    }

    /// Initial selection for uncontrolled mode. Ignored when controlled.
    #[must_use]
    pub fn default_value(mut self, value: V) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Makes the open state controlled, starting from `is_open`.
    #[must_use]
    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    #[must_use]
    pub fn clear_search_after(mut self, after: Duration) -> Self {
        self.clear_search_after = after;
        self
    }

    /// Enables search over values that are not string-like.
    #[must_use]
    pub fn searchable_value(mut self, projection: SearchProjection<V>) -> Self {
        self.searchable_value = Some(projection);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether committing an option also closes the menu. Default `true`.
    #[must_use]
    pub fn close_on_commit(mut self, close: bool) -> Self {
        self.close_on_commit = close;
        self
    }

    /// Builds the widget state, fixing ownership modes.
    #[must_use]
    pub fn build(self) -> SelectState<V> {
        let selection = match self.value {
            Some(value) => Control::Delegated(value),
            None => Control::Owned(self.default_value),
        };
        let open = match self.is_open {
            Some(is_open) => Control::Delegated(is_open),
            None => Control::Owned(false),
        };

        tracing::debug!(
            option_count = self.options.len(),
            selection_delegated = selection.is_delegated(),
            open_delegated = open.is_delegated(),
            "select state created"
        );

        SelectState {
            options: self.options,
            selection,
            open,
            focused_index: None,
            search: SearchBuffer::default(),
            clear_search_after: self.clear_search_after,
            projection: self.searchable_value,
            placeholder: self.placeholder,
            close_on_commit: self.close_on_commit,
        }
    }
}

/// State of one searchable single-select widget.
#[derive(Debug, Clone)]
pub struct SelectState<V: OptionValue> {
    options: Vec<SelectOption<V>>,
    selection: Control<Option<V>>,
    open: Control<bool>,
    focused_index: Option<usize>,
    search: SearchBuffer,
    clear_search_after: Duration,
    projection: Option<SearchProjection<V>>,
    placeholder: String,
    close_on_commit: bool,
}

impl<V: OptionValue> SelectState<V> {
    #[must_use]
    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    #[must_use]
    pub fn menu_state(&self) -> MenuState {
        MenuState::from(self.is_open())
    }

    /// Committed value, whether or not an option currently carries it.
    #[must_use]
    pub fn selected_value(&self) -> Option<&V> {
        self.selection.get().as_ref()
    }

    /// Index of the first option structurally equal to the committed value.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        let value = self.selected_value()?;
        self.options.iter().position(|o| values_equal(&o.value, value))
    }

    #[must_use]
    pub const fn focused_index(&self) -> Option<usize> {
        self.focused_index
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        self.search.as_str()
    }

    /// Handle of the pending search clear, if one is scheduled.
    #[must_use]
    pub const fn pending_search_clear(&self) -> Option<TimerHandle> {
        self.search.pending()
    }

    #[must_use]
    pub fn is_searchable(&self) -> bool {
        matcher::is_searchable(&self.options, self.projection.as_ref())
    }

    #[must_use]
    pub fn projection(&self) -> Option<&SearchProjection<V>> {
        self.projection.as_ref()
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the option at `index` is the committed selection.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        match (self.options.get(index), self.selected_value()) {
            (Some(option), Some(value)) => values_equal(&option.value, value),
            _ => false,
        }
    }

    /// Whether the option at `index` is the keyboard focus target.
    #[must_use]
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused_index == Some(index)
    }

    /// Text shown on the anchor control.
    ///
    /// The selected option's label, else its title, else the placeholder. A
    /// committed value that no option carries also shows the placeholder.
    #[must_use]
    pub fn anchor_text(&self) -> &str {
        self.selected_text().unwrap_or(&self.placeholder)
    }

    /// The selected option's label or title, if it has one to show.
    #[must_use]
    pub fn selected_text(&self) -> Option<&str> {
        self.selected_index()
            .and_then(|i| self.options[i].display_text())
    }

    /// Anchor activation: opens a closed menu, closes an open one.
    pub fn toggle(&mut self) -> Vec<Action<V>> {
        if self.is_open() {
            self.close_menu()
        } else {
            self.open_menu()
        }
    }

    /// Opens the menu and moves focus to the selection, or to the first option.
    pub fn open_menu(&mut self) -> Vec<Action<V>> {
        self.reset_focus();

        if self.open.request(true) {
            tracing::debug!(focused_index = ?self.focused_index, "menu opened");
            vec![]
        } else {
            tracing::debug!("open requested from owner");
            vec![Action::RequestOpen]
        }
    }

    /// Closes the menu and clears the search buffer.
    pub fn close_menu(&mut self) -> Vec<Action<V>> {
        let mut actions = self.reset_search();

        if self.open.request(false) {
            tracing::debug!("menu closed");
        } else {
            tracing::debug!("close requested from owner");
            actions.push(Action::RequestClose);
        }
        actions
    }

    /// Moves focus one option down, stopping at the last option.
    pub fn focus_next(&mut self) {
        let Some(last) = self.options.len().checked_sub(1) else {
            self.focused_index = None;
            return;
        };
        self.focused_index = Some(self.focused_index.map_or(0, |i| (i + 1).min(last)));
    }

    /// Moves focus one option up, stopping at the first option.
    pub fn focus_previous(&mut self) {
        if self.options.is_empty() {
            self.focused_index = None;
            return;
        }
        self.focused_index = Some(self.focused_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Feeds one typed character to the type-ahead search.
    ///
    /// Ignored entirely when the option set is not searchable. Otherwise the
    /// character is appended, focus jumps to the first prefix match (a miss
    /// leaves focus alone) and the inactivity timer restarts.
    pub fn type_char(&mut self, c: char) -> Vec<Action<V>> {
        if !self.is_searchable() {
            tracing::trace!(char = %c, "options not searchable, ignoring input");
            return vec![];
        }

        let (cancelled, handle) = self.search.push(c);

        let matched = matcher::find_prefix_match(
            &self.options,
            self.search.as_str(),
            self.projection.as_ref(),
        );
        if let Some(index) = matched {
            self.focused_index = Some(index);
        }

        tracing::trace!(
            query = %self.search.as_str(),
            matched = ?matched,
            %handle,
            "search buffer updated"
        );

        let mut actions = Vec::with_capacity(2);
        if let Some(handle) = cancelled {
            actions.push(Action::CancelSearchClear { handle });
        }
        actions.push(Action::ScheduleSearchClear {
            handle,
            after: self.clear_search_after,
        });
        actions
    }

    /// Reports expiry of a search-clear timer.
    ///
    /// Returns `true` if the buffer was cleared; stale handles are ignored.
    pub fn search_timeout(&mut self, handle: TimerHandle) -> bool {
        let cleared = self.search.expire(handle);
        tracing::trace!(%handle, cleared, "search timer expired");
        cleared
    }

    /// Commits the option at `index`.
    ///
    /// Emits exactly one [`Action::Change`]. Owned selection is updated;
    /// delegated selection waits for [`sync_value`](Self::sync_value). An
    /// out-of-range index is ignored.
    pub fn commit(&mut self, index: usize) -> Vec<Action<V>> {
        let Some(option) = self.options.get(index) else {
            tracing::debug!(index, option_count = self.options.len(), "commit index out of range");
            return vec![];
        };

        let value = option.value.clone();
        tracing::debug!(index, label = %option.label, "option committed");

        self.focused_index = Some(index);
        self.selection.request(Some(value.clone()));

        let mut actions = vec![Action::Change {
            value,
            selected_index: index,
        }];
        if self.close_on_commit {
            actions.extend(self.close_menu());
        }
        actions
    }

    /// Commits the focused option, if any.
    pub fn commit_focused(&mut self) -> Vec<Action<V>> {
        self.focused_index
            .map_or_else(Vec::new, |index| self.commit(index))
    }

    /// Accepts the owner's current selection. No-op for owned selection.
    pub fn sync_value(&mut self, value: Option<V>) -> bool {
        let applied = self.selection.sync(value);
        if !applied {
            tracing::debug!("ignoring value sync for uncontrolled selection");
        }
        applied
    }

    /// Accepts the owner's current open state. No-op for owned open state.
    ///
    /// Opening resets focus and closing clears the search buffer, the same as
    /// widget-driven transitions.
    pub fn sync_open(&mut self, is_open: bool) -> Vec<Action<V>> {
        let was_open = self.is_open();
        if !self.open.sync(is_open) {
            tracing::debug!("ignoring open sync for uncontrolled open state");
            return vec![];
        }

        match (was_open, is_open) {
            (false, true) => {
                self.reset_focus();
                vec![]
            }
            (true, false) => self.reset_search(),
            _ => vec![],
        }
    }

    /// Replaces the option list.
    ///
    /// An open menu is refocused as if it had just opened and its search
    /// buffer is cleared; a closed one only keeps focus within bounds.
    pub fn set_options(&mut self, options: Vec<SelectOption<V>>) -> Vec<Action<V>> {
        self.options = options;
        tracing::debug!(option_count = self.options.len(), "options replaced");

        if self.is_open() {
            self.reset_focus();
            return self.reset_search();
        }
        self.focused_index = match self.options.len().checked_sub(1) {
            Some(last) => self.focused_index.map(|i| i.min(last)),
            None => None,
        };
        vec![]
    }

    /// Releases the pending search timer. Call when the widget goes away.
    pub fn teardown(&mut self) -> Vec<Action<V>> {
        self.search
            .cancel_timer()
            .map(|handle| Action::CancelSearchClear { handle })
            .into_iter()
            .collect()
    }

    fn reset_focus(&mut self) {
        self.focused_index = if self.options.is_empty() {
            None
        } else {
            Some(self.selected_index().unwrap_or(0))
        };
    }

    fn reset_search(&mut self) -> Vec<Action<V>> {
        self.search
            .reset()
            .map(|handle| Action::CancelSearchClear { handle })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fruit_options() -> Vec<SelectOption<String>> {
        ["apple", "banana", "cherry"]
            .into_iter()
            .map(SelectOption::from)
            .collect()
    }

    fn fruit() -> SelectConfig<String> {
        SelectConfig::new(fruit_options())
    }

    #[test]
    fn opening_focuses_selection_or_first_option() {
        let mut select = fruit().build();
        select.open_menu();
        assert_eq!(select.focused_index(), Some(0));

        let mut select = fruit().default_value("cherry".to_string()).build();
        select.open_menu();
        assert_eq!(select.focused_index(), Some(2));
    }

    #[test]
    fn opening_an_empty_list_focuses_nothing() {
        let mut select = SelectConfig::<String>::new(vec![]).build();
        select.open_menu();
        assert!(select.is_open());
        assert_eq!(select.focused_index(), None);
        select.focus_next();
        assert_eq!(select.focused_index(), None);
    }

    #[test]
    fn arrow_navigation_clamps_without_wrapping() {
        let mut select = fruit().build();
        select.open_menu();
        select.focus_previous();
        assert_eq!(select.focused_index(), Some(0));
        for _ in 0..5 {
            select.focus_next();
        }
        assert_eq!(select.focused_index(), Some(2));
        select.focus_previous();
        assert_eq!(select.focused_index(), Some(1));
    }

    #[test]
    fn typing_schedules_and_replaces_the_clear_timer() {
        let mut select = fruit().build();
        select.open_menu();

        let first = select.type_char('b');
        let Some(Action::ScheduleSearchClear { handle: h1, after }) = first.last().cloned() else {
            panic!("expected a scheduled clear, got {first:?}");
        };
        assert_eq!(after, DEFAULT_CLEAR_SEARCH_AFTER);

        let second = select.type_char('a');
        assert_eq!(second[0], Action::CancelSearchClear { handle: h1 });
        assert_eq!(select.focused_index(), Some(1));
        assert_eq!(select.search_text(), "ba");

        assert!(!select.search_timeout(h1));
        let h2 = select.pending_search_clear().expect("timer pending");
        assert!(select.search_timeout(h2));
        assert_eq!(select.search_text(), "");
    }

    #[test]
    fn search_miss_keeps_focus() {
        let mut select = fruit().build();
        select.open_menu();
        select.focus_next();
        select.type_char('z');
        assert_eq!(select.focused_index(), Some(1));
    }

    #[test]
    fn unsearchable_options_ignore_typing() {
        let mut select = SelectConfig::new(vec![
            SelectOption::new(json!({ "id": 1 }), "one"),
            SelectOption::new(json!({ "id": 2 }), "two"),
        ])
        .build();
        select.open_menu();
        assert!(select.type_char('t').is_empty());
        assert_eq!(select.search_text(), "");
        assert_eq!(select.focused_index(), Some(0));
    }

    #[test]
    fn projection_enables_search_over_objects() {
        let mut select = SelectConfig::new(vec![
            SelectOption::new(json!({ "id": 1, "name": "one" }), "One"),
            SelectOption::new(json!({ "id": 2, "name": "two" }), "Two"),
        ])
        .searchable_value(SearchProjection::new(|v: &Value| {
            v["name"].as_str().unwrap_or_default().to_string()
        }))
        .build();
        select.open_menu();
        select.type_char('t');
        assert_eq!(select.focused_index(), Some(1));
    }

    #[test]
    fn commit_emits_one_change_and_updates_owned_selection() {
        let mut select = fruit().build();
        select.open_menu();
        let actions = select.commit(1);

        let changes: Vec<_> = actions
            .iter()
            .filter(|a| matches!(a, Action::Change { .. }))
            .collect();
        assert_eq!(
            changes,
            vec![&Action::Change {
                value: "banana".to_string(),
                selected_index: 1
            }]
        );
        assert_eq!(select.selected_value().map(String::as_str), Some("banana"));
        assert!(!select.is_open());
        assert_eq!(select.anchor_text(), "banana");
    }

    #[test]
    fn commit_can_leave_the_menu_open() {
        let mut select = fruit().close_on_commit(false).build();
        select.open_menu();
        let actions = select.commit(2);
        assert_eq!(actions.len(), 1);
        assert!(select.is_open());
    }

    #[test]
    fn commit_out_of_range_is_ignored() {
        let mut select = fruit().build();
        select.open_menu();
        assert!(select.commit(9).is_empty());
        assert_eq!(select.selected_value(), None);
    }

    #[test]
    fn controlled_selection_waits_for_owner() {
        let mut select = fruit().value(None).build();
        select.open_menu();
        let actions = select.commit(0);
        assert!(matches!(actions[0], Action::Change { selected_index: 0, .. }));
        assert_eq!(select.selected_value(), None);

        assert!(select.sync_value(Some("apple".to_string())));
        assert_eq!(select.selected_index(), Some(0));
    }

    #[test]
    fn controlled_open_state_emits_requests() {
        let mut select = fruit().is_open(false).build();
        assert_eq!(select.toggle(), vec![Action::RequestOpen]);
        assert!(!select.is_open());

        select.sync_open(true);
        assert!(select.is_open());
        assert_eq!(select.focused_index(), Some(0));

        assert_eq!(select.toggle(), vec![Action::RequestClose]);
        assert!(select.is_open());
        select.sync_open(false);
        assert!(!select.is_open());
    }

    #[test]
    fn uncontrolled_state_ignores_syncs() {
        let mut select = fruit().default_value("apple".to_string()).build();
        assert!(!select.sync_value(Some("cherry".to_string())));
        assert!(select.sync_open(true).is_empty());
        assert!(!select.is_open());
        assert_eq!(select.selected_index(), Some(0));
    }

    #[test]
    fn unknown_selection_shows_placeholder() {
        let select = fruit()
            .default_value("durian".to_string())
            .placeholder("Pick a fruit")
            .build();
        assert_eq!(select.selected_index(), None);
        assert_eq!(select.anchor_text(), "Pick a fruit");
    }

    #[test]
    fn selection_matches_structurally() {
        let select = SelectConfig::new(vec![
            SelectOption::new(json!({ "id": 1 }), "one"),
            SelectOption::new(json!({ "id": 2 }), "two"),
        ])
        .default_value(json!({ "id": 2 }))
        .build();
        assert_eq!(select.selected_index(), Some(1));
        assert!(select.is_selected(1));
        assert!(!select.is_selected(0));
    }

    #[test]
    fn closing_clears_search_and_cancels_timer() {
        let mut select = fruit().build();
        select.open_menu();
        select.type_char('c');
        let handle = select.pending_search_clear().expect("timer pending");

        let actions = select.close_menu();
        assert_eq!(actions, vec![Action::CancelSearchClear { handle }]);
        assert_eq!(select.search_text(), "");
    }

    #[test]
    fn replacing_options_clamps_focus() {
        let mut select = fruit().build();
        select.open_menu();
        select.focus_next();
        select.focus_next();
        select.set_options(vec!["kiwi".into()]);
        assert_eq!(select.focused_index(), Some(0));
        select.set_options(vec![]);
        assert_eq!(select.focused_index(), None);
    }

    #[test]
    fn replacing_options_while_open_refocuses_and_clears_search() {
        let mut select = SelectConfig::new(vec![])
            .default_value("cherry".to_string())
            .build();
        select.open_menu();
        assert_eq!(select.focused_index(), None);

        let actions = select.set_options(fruit_options());
        assert!(actions.is_empty());
        assert_eq!(select.focused_index(), Some(2));

        select.type_char('a');
        let handle = select.pending_search_clear().unwrap();
        let actions = select.set_options(vec!["kiwi".into(), "lime".into()]);
        assert_eq!(actions, vec![Action::CancelSearchClear { handle }]);
        assert_eq!(select.search_text(), "");
        assert_eq!(select.focused_index(), Some(0));
    }

    #[test]
    fn replacing_options_while_closed_keeps_menu_closed() {
        let mut select = fruit().build();
        assert!(select.set_options(vec!["kiwi".into()]).is_empty());
        assert!(!select.is_open());
        assert_eq!(select.focused_index(), None);
    }

    #[test]
    fn teardown_cancels_pending_timer() {
        let mut select = fruit().build();
        select.open_menu();
        select.type_char('a');
        let handle = select.pending_search_clear().expect("timer pending");
        assert_eq!(select.teardown(), vec![Action::CancelSearchClear { handle }]);
        assert!(!select.search_timeout(handle));
        assert!(select.teardown().is_empty());
    }
}
