//! Field values of a book record

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single field value as it appears in the source JSON.
///
/// Records are consumed duck-typed, so any JSON value is accepted. Only the
/// scalar variants take part in filtering and sorting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON `null` or an absent field
    #[default]
    Null,

    Bool(bool),

    /// Kept as a JSON number so it prints exactly as it was written
    Number(serde_json::Number),

    Text(String),

    /// Arrays and objects
    Nested(serde_json::Value),
}

impl FieldValue {
    /// Whether this value is null or absent
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Whether this value is a scalar (bool, number or text)
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            FieldValue::Bool(_) | FieldValue::Number(_) | FieldValue::Text(_)
        )
    }

    /// Text form of a scalar value; `None` for null and nested values
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            FieldValue::Number(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Text(s) => Some(Cow::Borrowed(s)),
            FieldValue::Null | FieldValue::Nested(_) => None,
        }
    }

    /// Text shown in a table cell: empty for null, compact JSON for nested values
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Null => Cow::Borrowed(""),
            FieldValue::Nested(v) => Cow::Owned(v.to_string()),
            other => other.as_text().unwrap_or_default(),
        }
    }

    /// Numeric interpretation used by the sort engine.
    ///
    /// JSON numbers are numeric; text is numeric when its trimmed form parses
    /// as a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(FieldValue::Number)
            .unwrap_or(FieldValue::Null)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => FieldValue::Number(n),
            serde_json::Value::String(s) => FieldValue::Text(s),
            nested => FieldValue::Nested(nested),
        }
    }
}
