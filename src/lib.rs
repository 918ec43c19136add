//! Zelect: a searchable single-select picker for Zellij.
//!
//! The crate is a headless dropdown widget plus the plugin that hosts it:
//! - An anchor control showing the current selection (or a placeholder)
//! - An option list with keyboard focus, opened and closed from the anchor
//! - Incremental type-ahead search that jumps focus to the first prefix match
//! - Caller-owned ("delegated") or widget-owned selection and open state
//! - A `zellij pipe` interface that returns the committed option as JSON

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Picker (picker.rs)                                 │  ← JSON options
//! │  - Option payload parsing                           │  ← View model
//! │  - Change payloads, click hit-testing               │
//! └─────────────────────────────────────────────────────┘
//!              │                          │
//! ┌──────────────────────────┐  ┌──────────────────────┐
//! │ Widget (select/)         │  │ UI Layer (ui/)       │
//! │ - Event handling         │  │ - Rendering          │
//! │ - Owned/delegated state  │  │ - Theming            │
//! │ - Prefix search + timer  │  │ - Components         │
//! └──────────────────────────┘  └──────────────────────┘
//!              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │  ← Errors, values
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```kdl
//! plugin location="file:/path/to/zelect.wasm" {
//!     options "[\"apple\", \"banana\", \"cherry\"]"
//!     placeholder "Pick a fruit"
//!     title "Fruit"
//! }
//! ```
//!
//! The widget works without the plugin as well:
//!
//! ```
//! use zelect::select::{handle_event, Action, Event, Key, SelectConfig, SelectOption};
//!
//! let options = ["apple", "banana", "cherry"].into_iter().map(SelectOption::from).collect();
//! let mut select = SelectConfig::<String>::new(options).build();
//!
//! handle_event(&mut select, &Event::Activate)?;
//! handle_event(&mut select, &Event::Key(Key::Char('b')))?;
//! let (_, actions) = handle_event(&mut select, &Event::Key(Key::Enter))?;
//!
//! assert!(actions.contains(&Action::Change { value: "banana".to_string(), selected_index: 1 }));
//! # Ok::<(), zelect::ZelectError>(())
//! ```

pub mod domain;
pub mod infrastructure;
pub mod keymap;
pub mod observability;
pub mod picker;
pub mod select;
pub mod ui;

pub use domain::{OptionValue, Result, ZelectError};
pub use picker::Picker;
pub use select::{handle_event, Action, Event, Key, SelectConfig, SelectOption, SelectState};
pub use ui::Theme;

use select::{DEFAULT_CLEAR_SEARCH_AFTER, DEFAULT_PLACEHOLDER};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;

/// Plugin configuration parsed from the Zellij layout.
///
/// ```kdl
/// plugin location="file:/path/to/zelect.wasm" {
///     options "[{\"value\": {\"id\": 1}, \"label\": \"One\"}]"
///     value "{\"id\": 1}"
///     search_field "name"
///     clear_search_after "800"
///     close_on_select "false"
///     theme "catppuccin-latte"
///     trace_level "zelect=debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Options shown when the plugin loads. A pipe payload replaces them.
    pub options: Vec<SelectOption<Value>>,

    /// Initially selected value, matched structurally against the options.
    pub value: Option<Value>,

    /// Anchor text while nothing is selected.
    pub placeholder: String,

    /// Inactivity period after which the search buffer clears.
    pub clear_search_after: Duration,

    /// String field of object values used for type-ahead search.
    pub search_field: Option<String>,

    /// Whether committing an option closes the menu.
    pub close_on_select: bool,

    /// Header text.
    pub title: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a TOML theme; `~` refers to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,

    /// Problems found while parsing, reported once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: vec![],
            value: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            clear_search_after: DEFAULT_CLEAR_SEARCH_AFTER,
            search_field: None,
            close_on_select: true,
            title: "Select".to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            warnings: vec![],
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Every key is optional. Malformed values fall back to their defaults and
    /// leave a message in [`Config::warnings`].
    ///
    /// # Parsing Rules
    ///
    /// - `options`: JSON array, see [`picker::parse_options`]
    /// - `value`: JSON; text that is not JSON is taken as a string value
    /// - `clear_search_after`: milliseconds
    /// - `close_on_select`: `true` or `false`
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use zelect::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("options".to_string(), r#"["apple", "banana"]"#.to_string());
    /// map.insert("value".to_string(), "banana".to_string());
    /// map.insert("clear_search_after".to_string(), "800".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.options.len(), 2);
    /// assert_eq!(config.value, Some(serde_json::json!("banana")));
    /// assert_eq!(config.clear_search_after, Duration::from_millis(800));
    /// assert!(config.warnings.is_empty());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let mut warnings = vec![];

        let options = config
            .get("options")
            .and_then(|json| {
                picker::parse_options(json)
                    .map_err(|e| warnings.push(format!("ignoring options: {e}")))
                    .ok()
            })
            .unwrap_or_default();

        let value = config.get("value").map(|raw| {
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.clone()))
        });

        let clear_search_after = config
            .get("clear_search_after")
            .and_then(|ms| {
                ms.trim()
                    .parse::<u64>()
                    .map_err(|e| warnings.push(format!("ignoring clear_search_after {ms:?}: {e}")))
                    .ok()
            })
            .map_or(defaults.clear_search_after, Duration::from_millis);

        let close_on_select = config
            .get("close_on_select")
            .and_then(|flag| {
                flag.trim()
                    .parse::<bool>()
                    .map_err(|e| warnings.push(format!("ignoring close_on_select {flag:?}: {e}")))
                    .ok()
            })
            .unwrap_or(defaults.close_on_select);

        Self {
            options,
            value,
            placeholder: config
                .get("placeholder")
                .cloned()
                .unwrap_or(defaults.placeholder),
            clear_search_after,
            search_field: config
                .get("search_field")
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
            close_on_select,
            title: config.get("title").cloned().unwrap_or(defaults.title),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config
                .get("trace_level")
                .cloned()
                .unwrap_or(defaults.trace_level),
            warnings,
        }
    }

    /// Resolves the configured theme, falling back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the picker described by `config`.
///
/// Configuration warnings are logged here, so call this after
/// [`observability::init_tracing`].
///
/// ```
/// use zelect::{initialize, Config};
///
/// let config = Config {
///     options: zelect::picker::parse_options(r#"["apple", "banana"]"#)?,
///     value: Some(serde_json::json!("banana")),
///     ..Config::default()
/// };
///
/// let picker = initialize(&config);
/// assert_eq!(picker.select.selected_index(), Some(1));
/// assert!(!picker.select.is_open());
/// # Ok::<(), zelect::ZelectError>(())
/// ```
#[must_use]
pub fn initialize(config: &Config) -> Picker {
    tracing::debug!(
        options = config.options.len(),
        search_field = ?config.search_field,
        "initializing zelect plugin"
    );
    for warning in &config.warnings {
        tracing::warn!(%warning, "configuration");
    }

    let mut builder = SelectConfig::new(config.options.clone())
        .placeholder(config.placeholder.as_str())
        .clear_search_after(config.clear_search_after)
        .close_on_commit(config.close_on_select);
    if let Some(value) = &config.value {
        builder = builder.default_value(value.clone());
    }
    if let Some(field) = &config.search_field {
        builder = builder.searchable_value(picker::field_projection(field));
    }

    Picker::new(builder.build(), config.theme(), config.title.as_str())
}
