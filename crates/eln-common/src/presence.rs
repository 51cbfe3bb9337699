//! Presence checks for optional input fields.
//!
//! The persistence layer hands over `null`, `""` and `[]` interchangeably for
//! "nothing recorded". Every visibility decision and every assembler goes
//! through these helpers so a missing value and an empty one behave the same.

/// A text field counts as present when it is set and non-empty.
pub fn text(value: Option<&str>) -> bool {
    matches!(value, Some(s) if !s.is_empty())
}

/// A list field counts as present when it has at least one entry.
pub fn list<T>(values: &[T]) -> bool {
    !values.is_empty()
}

/// A numeric field counts as present when it is set and finite.
pub fn number(value: Option<f64>) -> bool {
    finite(value).is_some()
}

/// Keep a numeric value only if it is finite.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
