//! Type-ahead search over the option list.
//!
//! The matcher resolves a typed buffer to an option index. Each option is
//! projected to a searchable string, either through a caller-supplied
//! [`SearchProjection`] or from the value's own string. The first option, in
//! list order, whose string starts with the buffer wins. Matching is
//! case-sensitive and never wraps; a miss leaves focus where it was.

use super::option::SelectOption;
use crate::domain::OptionValue;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied projection from an option value to its searchable string.
pub struct SearchProjection<V>(Arc<dyn Fn(&V) -> String + Send + Sync>);

impl<V> SearchProjection<V> {
    /// Wraps a projection function.
    pub fn new<F>(project: F) -> Self
    where
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(project))
    }

    /// Applies the projection to a value.
    #[must_use]
    pub fn project(&self, value: &V) -> String {
        (self.0)(value)
    }
}

impl<V> Clone for SearchProjection<V> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<V> fmt::Debug for SearchProjection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProjection").finish_non_exhaustive()
    }
}

/// Returns `true` when type-ahead search is possible over `options`.
///
/// A projection makes any option set searchable. Without one, every value must
/// expose its own string. An empty option set without a projection is
/// considered searchable, since no value contradicts it.
#[must_use]
pub fn is_searchable<V: OptionValue>(
    options: &[SelectOption<V>],
    projection: Option<&SearchProjection<V>>,
) -> bool {
    projection.is_some() || options.iter().all(|o| o.value.search_text().is_some())
}

/// Computes the searchable string for a single value.
///
/// Returns `None` when the value is not string-like and no projection exists.
#[must_use]
pub fn searchable_text<'a, V: OptionValue>(
    value: &'a V,
    projection: Option<&SearchProjection<V>>,
) -> Option<Cow<'a, str>> {
    match projection {
        Some(projection) => Some(Cow::Owned(projection.project(value))),
        None => value.search_text().map(Cow::Borrowed),
    }
}

/// Finds the first option whose searchable string starts with `query`.
///
/// Returns `None` for an empty query, for a non-searchable option set, or when
/// nothing matches.
#[must_use]
pub fn find_prefix_match<V: OptionValue>(
    options: &[SelectOption<V>],
    query: &str,
    projection: Option<&SearchProjection<V>>,
) -> Option<usize> {
    if query.is_empty() || !is_searchable(options, projection) {
        return None;
    }

    options.iter().position(|option| {
        searchable_text(&option.value, projection).is_some_and(|text| text.starts_with(query))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fruit() -> Vec<SelectOption<String>> {
        ["apple", "banana", "cherry", "blueberry"]
            .into_iter()
            .map(SelectOption::from)
            .collect()
    }

    #[test]
    fn prefix_resolves_to_first_match_in_list_order() {
        let options = fruit();
        assert_eq!(find_prefix_match(&options, "ba", None), Some(1));
        assert_eq!(find_prefix_match(&options, "b", None), Some(1));
        assert_eq!(find_prefix_match(&options, "bl", None), Some(3));
        assert_eq!(find_prefix_match(&options, "c", None), Some(2));
    }

    #[test]
    fn matching_is_case_sensitive_and_misses_are_none() {
        let options = fruit();
        assert_eq!(find_prefix_match(&options, "Ba", None), None);
        assert_eq!(find_prefix_match(&options, "z", None), None);
        assert_eq!(find_prefix_match(&options, "", None), None);
    }

    #[test]
    fn object_values_need_a_projection() {
        let options = vec![
            SelectOption::new(json!({ "id": 1, "name": "alpha" }), "Alpha"),
            SelectOption::new(json!({ "id": 2, "name": "beta" }), "Beta"),
        ];
        assert!(!is_searchable(&options, None));
        assert_eq!(find_prefix_match(&options, "b", None), None);

        let by_name = SearchProjection::new(|v: &Value| {
            v.get("name").and_then(Value::as_str).unwrap_or_default().to_string()
        });
        assert!(is_searchable(&options, Some(&by_name)));
        assert_eq!(find_prefix_match(&options, "be", Some(&by_name)), Some(1));
    }

    #[test]
    fn one_non_string_value_disables_search() {
        let options = vec![
            SelectOption::new(json!("apple"), "apple"),
            SelectOption::new(json!(42), "forty-two"),
        ];
        assert!(!is_searchable(&options, None));
        assert_eq!(find_prefix_match(&options, "a", None), None);
    }
}
