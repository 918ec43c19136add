//! Zellij plugin entry point for Zelect.
//!
//! This module is the thin shim between the `zelect` library and the Zellij
//! plugin system. It translates Zellij events into widget [`Event`]s, runs
//! them through [`handle_event`] and executes the returned actions with
//! Zellij's host functions.
//!
//! # Timers
//!
//! The widget asks for a search clear with `ScheduleSearchClear { handle }`.
//! Zellij timeouts cannot be cancelled and fire as anonymous `Timer` events in
//! the order they were set, so the shim queues the handles and pairs each
//! firing with the oldest one. Handles the widget has since replaced are
//! ignored by the widget itself.
//!
//! # Pipes
//!
//! ```bash
//! zellij pipe --plugin file:zelect.wasm -- '["apple", "banana", "cherry"]'
//! ```
//!
//! A CLI pipe payload replaces the options and opens the menu. The pipe stays
//! blocked until an option is committed; the commit is written back as
//! `{"value": ..., "selectedIndex": n}` and the plugin closes.

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use zelect::keymap;
use zelect::picker::{self, Picker};
use zelect::select::TimerHandle;
use zelect::{handle_event, Action, Config, Event, Key};

register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's [`Picker`] with the Zellij-side bookkeeping: queued
/// timer handles, the pipe waiting for an answer and the last pane height
/// (needed to map clicks to options).
struct State {
    picker: Picker,

    /// Handles of timeouts set with `set_timeout`, oldest first.
    pending_timers: VecDeque<TimerHandle>,

    /// CLI pipe blocked until the next commit.
    cli_pipe: Option<String>,

    last_rows: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            picker: zelect::initialize(&Config::default()),
            pending_timers: VecDeque::new(),
            cli_pipe: None,
            last_rows: 0,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the picker and subscribes to input.
    ///
    /// # Permissions
    ///
    /// Requests `ReadCliPipes` so `zellij pipe` callers can receive the
    /// committed value.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zelect::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.picker = zelect::initialize(&config);

        request_permission(&[PermissionType::ReadCliPipes]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(
            options = self.picker.select.options().len(),
            "plugin load complete"
        );
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                tracing::debug!(bare_key = ?key.bare_key, "key event");
                if keymap::is_quit_key(key, self.picker.select.is_open()) {
                    self.quit();
                    return false;
                }
                match keymap::map_key(key) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => match self.pending_timers.pop_front() {
                Some(handle) => Event::SearchTimeout(handle),
                None => {
                    tracing::debug!("timer fired with no queued handle");
                    return false;
                }
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("pipe permission granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("pipe permission denied - commits will only be logged");
                    }
                }
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Handles `zellij pipe` messages carrying an options payload.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let span = tracing::debug_span!("plugin_pipe", name = %pipe_message.name);
        let _guard = span.entered();

        if let PipeSource::Cli(ref pipe_id) = pipe_message.source {
            block_cli_pipe_input(pipe_id);
            if let Some(previous) = self.cli_pipe.replace(pipe_id.clone()) {
                tracing::debug!(pipe = %previous, "superseded by a newer pipe");
                unblock_cli_pipe_input(&previous);
            }
        }

        if let Some(payload) = pipe_message.payload.as_deref() {
            match self.picker.replace_options(payload) {
                Ok(actions) => {
                    tracing::debug!(
                        count = self.picker.select.options().len(),
                        "options replaced from pipe"
                    );
                    for a in &actions {
                        self.execute_action(a);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rejecting pipe payload");
                    if let Some(pipe_id) = self.cli_pipe.take() {
                        cli_pipe_output(&pipe_id, &format!("error: {e}\n"));
                        unblock_cli_pipe_input(&pipe_id);
                    }
                    return false;
                }
            }
        }

        if self.picker.select.is_open() {
            true
        } else {
            self.dispatch(&Event::Activate)
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.last_rows = rows;
        zelect::ui::render(&self.picker, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.picker.select, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in &actions {
                    self.execute_action(a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, _col) => {
                let row = usize::try_from(line).ok()? + 1;
                if let Some(index) = self.picker.option_at_row(row, self.last_rows) {
                    return Some(Event::Click(index));
                }
                let anchor_first = picker::MENU_FIRST_ROW - zelect::ui::components::ANCHOR_ROWS;
                (anchor_first..picker::MENU_FIRST_ROW)
                    .contains(&row)
                    .then_some(Event::Activate)
            }
            Mouse::ScrollDown(_) if self.picker.select.is_open() => {
                Some(Event::Key(Key::ArrowDown))
            }
            Mouse::ScrollUp(_) if self.picker.select.is_open() => Some(Event::Key(Key::ArrowUp)),
            _ => None,
        }
    }

    /// Releases the search timer and any waiting pipe, then closes the pane.
    fn quit(&mut self) {
        tracing::debug!("quitting");
        self.dispatch(&Event::Teardown);
        if let Some(pipe_id) = self.cli_pipe.take() {
            unblock_cli_pipe_input(&pipe_id);
            close_self();
        } else {
            hide_self();
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action<serde_json::Value>) {
        match action {
            Action::Change {
                value,
                selected_index,
            } => {
                tracing::info!(selected_index, %value, "option committed");
                let Some(pipe_id) = self.cli_pipe.take() else {
                    return;
                };
                match picker::change_payload(value, *selected_index) {
                    Ok(payload) => cli_pipe_output(&pipe_id, &format!("{payload}\n")),
                    Err(e) => tracing::warn!(error = %e, "failed to encode commit"),
                }
                unblock_cli_pipe_input(&pipe_id);
                close_self();
            }
            Action::ScheduleSearchClear { handle, after } => {
                set_timeout(after.as_secs_f64());
                self.pending_timers.push_back(*handle);
            }
            Action::CancelSearchClear { handle } => {
                tracing::debug!(%handle, "search clear superseded");
            }
            Action::FocusAnchor => {
                tracing::debug!("focus returned to anchor");
            }
            Action::RequestOpen | Action::RequestClose => {
                tracing::debug!("open state is owned by the picker");
            }
        }
    }
}
