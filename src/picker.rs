//! The picker: a select widget over JSON values, plus what the plugin needs
//! to render and report it.
//!
//! Options arrive as JSON, either from the plugin configuration or from a
//! `zellij pipe` payload. Each array element is either a plain value, labelled
//! by its own text, or a descriptor object:
//!
//! ```json
//! ["apple", "banana", { "value": { "id": 7 }, "label": "Cherry", "title": "fruit #7" }]
//! ```
//!
//! An object without a `value` key is itself the option value.

use crate::domain::{Result, ZelectError};
use crate::select::{matcher, Action, SearchProjection, SelectOption, SelectState};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    AnchorInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rows used by everything except the option list: blank line, header,
/// border, 3-line anchor box, bottom border and footer.
const CHROME_ROWS: usize = 8;

/// Extra rows taken by the search line while it is visible.
const SEARCH_ROWS: usize = 1;

/// First screen row (1-indexed) of the option list.
pub const MENU_FIRST_ROW: usize = 7;

/// A descriptor entry in an options payload.
#[derive(Debug, Deserialize)]
struct OptionDescriptor {
    value: Value,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OptionEntry {
    Described(OptionDescriptor),
    Plain(Value),
}

/// Payload written back to the caller when an option is committed.
#[derive(Debug, Serialize)]
pub struct ChangeEvent<'a> {
    pub value: &'a Value,
    #[serde(rename = "selectedIndex")]
    pub selected_index: usize,
}

/// Parses a JSON array of option entries.
///
/// # Errors
///
/// Returns [`ZelectError::Json`] for invalid JSON and [`ZelectError::Config`]
/// when the document is not an array.
///
/// # Example
///
/// ```
/// use zelect::picker::parse_options;
///
/// let options = parse_options(r#"["apple", {"value": 2, "label": "Two"}]"#)?;
/// assert_eq!(options[0].label, "apple");
/// assert_eq!(options[1].label, "Two");
/// # Ok::<(), zelect::ZelectError>(())
/// ```
pub fn parse_options(json: &str) -> Result<Vec<SelectOption<Value>>> {
    let document: Value = serde_json::from_str(json)?;
    let Value::Array(entries) = document else {
        return Err(ZelectError::Config(
            "options must be a JSON array".to_string(),
        ));
    };

    entries
        .into_iter()
        .map(|entry| {
            let entry: OptionEntry = serde_json::from_value(entry)?;
            Ok(match entry {
                OptionEntry::Described(d) => {
                    let label = d.label.unwrap_or_else(|| label_for(&d.value));
                    SelectOption {
                        value: d.value,
                        label,
                        title: d.title,
                    }
                }
                OptionEntry::Plain(value) => {
                    let label = label_for(&value);
                    SelectOption::new(value, label)
                }
            })
        })
        .collect()
}

/// Display text for a bare value: strings as-is, anything else as compact JSON.
fn label_for(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_string(), str::to_string)
}

/// Builds a projection that searches object values by one string field.
///
/// Values without the field, or with a non-string field, project to the empty
/// string and never match a non-empty query.
#[must_use]
pub fn field_projection(field: &str) -> SearchProjection<Value> {
    let field = field.to_string();
    SearchProjection::new(move |value: &Value| {
        value
            .get(&field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    })
}

/// Serializes a commit for the caller.
///
/// # Errors
///
/// Returns [`ZelectError::Json`] if serialization fails.
pub fn change_payload(value: &Value, selected_index: usize) -> Result<String> {
    Ok(serde_json::to_string(&ChangeEvent {
        value,
        selected_index,
    })?)
}

/// Plugin-level state: the select widget plus presentation settings.
#[derive(Debug, Clone)]
pub struct Picker {
    /// The select widget.
    pub select: SelectState<Value>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Header title.
    pub title: String,
}

impl Picker {
    #[must_use]
    pub fn new(select: SelectState<Value>, theme: Theme, title: impl Into<String>) -> Self {
        Self {
            select,
            theme,
            title: title.into(),
        }
    }

    /// Replaces the option list from a JSON payload.
    ///
    /// Returns the widget's actions, e.g. cancelling the search clear of an
    /// open menu.
    ///
    /// # Errors
    ///
    /// Propagates [`parse_options`] errors; the current options are kept.
    pub fn replace_options(&mut self, payload: &str) -> Result<Vec<Action<Value>>> {
        let options = parse_options(payload)?;
        Ok(self.select.set_options(options))
    }

    /// Maps a clicked screen row (1-indexed) to an option index.
    #[must_use]
    pub fn option_at_row(&self, row: usize, rows: usize) -> Option<usize> {
        if !self.select.is_open() {
            return None;
        }
        let vm = self.compute_viewmodel(rows, 0);
        let first_row = MENU_FIRST_ROW + if vm.search_bar.is_some() { SEARCH_ROWS } else { 0 };
        let offset = row.checked_sub(first_row)?;
        (offset < vm.display_items.len()).then_some(vm.visible_start + offset)
    }

    /// Computes a renderable view model from the widget state.
    ///
    /// # Windowing Algorithm
    ///
    /// The option list shows as many rows as fit below the anchor. The window
    /// is centered on the focused option and pulled back near the end of the
    /// list so it stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let select = &self.select;
        let options = select.options();
        let is_open = select.is_open();
        let searchable = select.is_searchable();

        let anchor = AnchorInfo {
            text: select.anchor_text().to_string(),
            is_placeholder: select.selected_text().is_none(),
            is_open,
        };

        let search_bar = (is_open && searchable).then(|| SearchBarInfo {
            query: select.search_text().to_string(),
        });

        let header = HeaderInfo {
            title: format!(" {} ({}) ", self.title, options.len()),
        };
        let footer = Self::compute_footer(is_open, searchable);

        if !is_open {
            return UIViewModel {
                header,
                anchor,
                display_items: vec![],
                visible_start: 0,
                search_bar,
                footer,
                empty_state: None,
            };
        }

        if options.is_empty() {
            return UIViewModel {
                header,
                anchor,
                display_items: vec![],
                visible_start: 0,
                search_bar,
                footer,
                empty_state: Some(EmptyState {
                    message: "No options".to_string(),
                    subtitle: "Pipe a JSON array to this plugin to populate it".to_string(),
                }),
            };
        }

        let chrome = CHROME_ROWS + if search_bar.is_some() { SEARCH_ROWS } else { 0 };
        let available_rows = rows.saturating_sub(chrome).max(1);
        let focused = select.focused_index().unwrap_or(0);

        let mut visible_start = focused.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(options.len());
        if visible_end - visible_start < available_rows && options.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = select.search_text();
        let display_items = (visible_start..visible_end)
            .map(|index| self.compute_display_item(index, query, cols))
            .collect();

        UIViewModel {
            header,
            anchor,
            display_items,
            visible_start,
            search_bar,
            footer,
            empty_state: None,
        }
    }

    fn compute_display_item(&self, index: usize, query: &str, cols: usize) -> DisplayItem {
        let option = &self.select.options()[index];

        let highlight_ranges = if query.is_empty() {
            vec![]
        } else {
            let matches = matcher::searchable_text(&option.value, self.select.projection())
                .is_some_and(|text| text.starts_with(query));
            if matches && option.label.starts_with(query) {
                vec![(0, query.chars().count())]
            } else {
                vec![]
            }
        };

        DisplayItem {
            label: option.label.clone(),
            title: option
                .title
                .as_ref()
                .map(|t| truncate_start(t, cols.saturating_sub(option.label.chars().count() + 8))),
            is_selected: self.select.is_selected(index),
            is_focused: self.select.is_focused(index),
            highlight_ranges,
        }
    }

    fn compute_footer(is_open: bool, searchable: bool) -> FooterInfo {
        let keybindings = match (is_open, searchable) {
            (false, _) => "Space/Enter/↓: open  q/Esc: quit",
            (true, true) => "↑/↓: move  Enter: select  Esc: close  Type to jump",
            (true, false) => "↑/↓: move  Enter: select  Esc: close",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens text from the start to at most `max_width` characters.
fn truncate_start(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width || max_width == 0 {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{tail}")
}
