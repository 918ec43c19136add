//! Terminal rendering for the picker.
//!
//! ```text
//! Picker → compute_viewmodel → UIViewModel → components → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready state
//! - [`renderer`]: Frame rendering entry points
//! - [`components`]: Per-region renderers
//! - [`helpers`]: Cursor movement, padding and highlighting
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    AnchorInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
