//! Option descriptors for the select widget.

use crate::domain::OptionValue;

/// A single selectable item.
///
/// Options are immutable for the duration of a render pass. The `value` is
/// opaque to the widget apart from structural equality and, when string-like,
/// its search text.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<V: OptionValue> {
    /// Value committed when this option is chosen.
    pub value: V,

    /// Text shown in the menu and on the anchor.
    pub label: String,

    /// Secondary text, used on the anchor when the label is empty.
    pub title: Option<String>,
}

impl<V: OptionValue> SelectOption<V> {
    /// Creates an option with a label and no title.
    #[must_use]
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            title: None,
        }
    }

    /// Sets the option's title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Text to display on the anchor for this option.
    ///
    /// Prefers the label, falling back to the title. Returns `None` when both
    /// are empty so the caller can substitute its placeholder.
    #[must_use]
    pub fn display_text(&self) -> Option<&str> {
        if !self.label.is_empty() {
            return Some(&self.label);
        }
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

impl From<&str> for SelectOption<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string(), value)
    }
}

impl From<String> for SelectOption<String> {
    fn from(value: String) -> Self {
        let label = value.clone();
        Self::new(value, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text_falls_back_to_title() {
        let labelled = SelectOption::new(1_u32, "One").with_title("first");
        assert_eq!(labelled.display_text(), Some("One"));

        let titled = SelectOption::new(2_u32, "").with_title("second");
        assert_eq!(titled.display_text(), Some("second"));

        let bare = SelectOption::new(3_u32, "");
        assert_eq!(bare.display_text(), None);
    }

    #[test]
    fn string_options_label_themselves() {
        let option: SelectOption<String> = "banana".into();
        assert_eq!(option.value, "banana");
        assert_eq!(option.label, "banana");
    }
}
