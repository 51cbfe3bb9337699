//! Rich-text values (plain strings or Quill deltas).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rich text as stored by the notebook editor.
///
/// The value is kept verbatim so renderers can reproduce formatting. It is
/// either a plain JSON string or a Quill delta (`{"ops": [{"insert": ...}]}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Value);

impl RichText {
    /// Wrap a plain string.
    pub fn plain(text: impl Into<String>) -> Self {
        RichText(Value::String(text.into()))
    }

    /// Whether the value carries any content.
    ///
    /// `null`, `""`, `{}`, `[]` and a delta with an empty `ops` list are absent.
    pub fn is_present(&self) -> bool {
        match &self.0 {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            Value::Array(ops) => !ops.is_empty(),
            Value::Object(map) => match map.get("ops") {
                Some(Value::Array(ops)) => !ops.is_empty(),
                Some(_) => true,
                None => !map.is_empty(),
            },
            Value::Bool(_) | Value::Number(_) => true,
        }
    }

    /// Concatenate the textual inserts of the value.
    ///
    /// Embeds (images, formulas) carry no text and are skipped.
    pub fn plain_text(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Array(ops) => collect_inserts(ops),
            Value::Object(map) => match map.get("ops") {
                Some(Value::Array(ops)) => collect_inserts(ops),
                _ => String::new(),
            },
            Value::Number(n) => n.to_string(),
            Value::Bool(_) | Value::Null => String::new(),
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        RichText::plain(text)
    }
}

fn collect_inserts(ops: &[Value]) -> String {
    ops.iter()
        .filter_map(|op| op.get("insert").and_then(Value::as_str))
        .collect()
}
