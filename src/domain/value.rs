//! Option value abstraction.
//!
//! Select options carry opaque values. Two things are asked of a value type:
//!
//! - **Structural equality**: the committed selection is matched against the
//!   option list with `PartialEq`, never by identity. Two separately built
//!   `serde_json::Value` objects with the same fields select the same option.
//! - **Search text**: type-ahead search is only possible when every value in
//!   the list exposes its own string, or when the caller supplies a projection.
//!   [`OptionValue::search_text`] reports the former.

use std::fmt::Debug;

/// A value that can be carried by a select option.
///
/// The default [`search_text`](OptionValue::search_text) returns `None`,
/// meaning the value is not string-like and cannot take part in type-ahead
/// search without a projection.
pub trait OptionValue: Clone + PartialEq + Debug {
    /// Returns the value's own searchable string, if it is string-like.
    fn search_text(&self) -> Option<&str> {
        None
    }
}

impl OptionValue for String {
    fn search_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl OptionValue for &str {
    fn search_text(&self) -> Option<&str> {
        Some(*self)
    }
}

impl OptionValue for serde_json::Value {
    fn search_text(&self) -> Option<&str> {
        self.as_str()
    }
}

macro_rules! opaque_option_values {
    ($($ty:ty),* $(,)?) => {
        $(impl OptionValue for $ty {})*
    };
}

opaque_option_values!(bool, char, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Returns `true` when two option values are structurally equal.
///
/// Thin wrapper over `PartialEq`, kept as a named function so selection
/// matching reads as a deliberate deep comparison at call sites.
#[must_use]
pub fn values_equal<V: OptionValue>(a: &V, b: &V) -> bool {
    a == b
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_objects_compare_structurally() {
        let a = json!({ "id": 1, "tags": ["x", "y"] });
        let b = json!({ "tags": ["x", "y"], "id": 1 });
        assert!(values_equal(&a, &b));
        assert!(!values_equal(&a, &json!({ "id": 2, "tags": ["x", "y"] })));
    }

    #[test]
    fn only_string_values_expose_search_text() {
        assert_eq!(json!("apple").search_text(), Some("apple"));
        assert_eq!(json!({ "id": 1 }).search_text(), None);
        assert_eq!(json!(3).search_text(), None);
        assert_eq!("pear".search_text(), Some("pear"));
        assert_eq!(String::from("fig").search_text(), Some("fig"));
        assert_eq!(7_u32.search_text(), None);
    }
}
