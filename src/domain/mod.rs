//! Domain layer for the zelect plugin.
//!
//! Holds the types the widget and the plugin shim agree on, independent of
//! Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`value`]: The [`OptionValue`] trait and structural equality

pub mod error;
pub mod value;

pub use error::{Result, ZelectError};
pub use value::{values_equal, OptionValue};
