//! View model types representing renderable UI state.
//!
//! View models are computed from the picker via
//! [`Picker::compute_viewmodel`](crate::picker::Picker::compute_viewmodel) and
//! consumed by the renderer. They hold display-ready data only.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, option count).
    pub header: HeaderInfo,

    /// The always-visible anchor control.
    pub anchor: AnchorInfo,

    /// Options inside the visible window. Empty while the menu is closed.
    pub display_items: Vec<DisplayItem>,

    /// Option index of the first entry in `display_items`.
    pub visible_start: usize,

    /// Type-ahead line, present while the menu is open and searchable.
    pub search_bar: Option<SearchBarInfo>,

    /// Footer information (keybindings).
    pub footer: FooterInfo,

    /// Message shown instead of the list when the open menu has no options.
    pub empty_state: Option<EmptyState>,
}

/// Anchor control display information.
#[derive(Debug, Clone)]
pub struct AnchorInfo {
    /// Selected option's label or title, or the placeholder.
    pub text: String,

    /// Whether `text` is the placeholder.
    pub is_placeholder: bool,

    /// Whether the menu below the anchor is open.
    pub is_open: bool,
}

/// Display information for a single option row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub label: String,

    /// Secondary text, already truncated to fit.
    pub title: Option<String>,

    /// Whether this option is the committed selection.
    pub is_selected: bool,

    /// Whether this option is the keyboard focus target.
    pub is_focused: bool,

    /// Character ranges of the label matched by the search buffer.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search line display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current contents of the type-ahead buffer.
    pub query: String,
}
