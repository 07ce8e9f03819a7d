//! The Book Record type

use super::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

static NULL: FieldValue = FieldValue::Null;

/// One catalog entry.
///
/// Fields are kept in the order they appear in the source object. Apart from
/// `id`, `cover` and `buy` nothing about the schema is assumed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookRecord {
    fields: IndexMap<String, FieldValue>,
}

impl BookRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a field, keeping its original position when replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Build a record from a JSON value; only objects are records
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Object(map) => Some(Self {
                fields: map
                    .into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            }),
            _ => None,
        }
    }

    /// Value of a field; absent fields read as null
    pub fn get(&self, key: &str) -> &FieldValue {
        self.fields.get(key).unwrap_or(&NULL)
    }

    /// First non-null value among `key` and `fallback`
    pub fn get_or(&self, key: &str, fallback: Option<&str>) -> &FieldValue {
        let primary = self.get(key);
        match fallback {
            Some(alt) if primary.is_null() => self.get(alt),
            _ => primary,
        }
    }

    /// Fields in natural key order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in natural key order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn id(&self) -> &FieldValue {
        self.get("id")
    }

    /// Title text, empty when absent
    pub fn title(&self) -> String {
        self.get("title").display_text().into_owned()
    }

    /// Cover image URL, `None` when absent or blank
    pub fn cover(&self) -> Option<&str> {
        self.non_blank("cover")
    }

    /// Purchase link, `None` when absent or blank
    pub fn buy(&self) -> Option<&str> {
        self.non_blank("buy")
    }

    fn non_blank(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            FieldValue::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
