//! The searchable single-select widget.
//!
//! A headless state machine: it owns no rendering and no clock. Input arrives
//! as [`Event`]s, state changes happen synchronously inside
//! [`handle_event`], and effects leave as [`Action`]s for the host.
//!
//! ```text
//! Anchor activate → open/close → Option list (open flag + focus)
//!        Keys → focus moves / search buffer → Matcher → focus
//!        Commit → Action::Change { value, selected_index }
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects returned to the host
//! - [`control`]: Owned versus delegated state
//! - [`handler`]: Event dispatch
//! - [`matcher`]: Prefix search over option values
//! - [`modes`]: Menu state and key input
//! - [`option`]: Option descriptors
//! - [`search`]: Type-ahead buffer
//! - [`state`]: The widget state container
//! - [`timer`]: Scoped handles for the search-clear timer

pub mod actions;
pub mod control;
pub mod handler;
pub mod matcher;
pub mod modes;
pub mod option;
pub mod search;
pub mod state;
pub mod timer;

pub use actions::Action;
pub use control::Control;
pub use handler::{handle_event, Event};
pub use matcher::SearchProjection;
pub use modes::{Key, MenuState};
pub use option::SelectOption;
pub use state::{SelectConfig, SelectState, DEFAULT_CLEAR_SEARCH_AFTER, DEFAULT_PLACEHOLDER};
pub use timer::TimerHandle;
