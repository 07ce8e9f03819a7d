//! Declared table columns

use crate::types::{BookRecord, FieldValue};
use serde::{Deserialize, Serialize};

/// A declared column: which field it shows and how it is labelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field name, also the column id used for sorting
    pub field: String,

    /// Header text
    pub label: String,

    /// Field read when `field` is null (e.g. `genre` for `category`)
    #[serde(default)]
    pub fallback: Option<String>,

    /// Clamp the cell to two lines
    #[serde(default)]
    pub clamp: bool,
}

impl Column {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            fallback: None,
            clamp: false,
        }
    }

    pub fn or_field(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Value of this column for a record
    pub fn value<'r>(&self, record: &'r BookRecord) -> &'r FieldValue {
        record.get_or(&self.field, self.fallback.as_deref())
    }
}

/// The catalog columns with English labels
pub fn default_columns() -> Vec<Column> {
    catalog_columns(["ID", "Title", "Author", "Year", "Category"])
}

/// Catalog columns with the given labels, in id/title/author/year/category order
pub fn catalog_columns(labels: [&str; 5]) -> Vec<Column> {
    let [id, title, author, year, category] = labels;
    vec![
        Column::new("id", id),
        Column::new("title", title).clamped(),
        Column::new("author", author).clamped(),
        Column::new("year", year),
        Column::new("category", category).or_field("genre").clamped(),
    ]
}

/// Fallback field declared for `field`, if any
pub fn fallback_for<'c>(columns: &'c [Column], field: &str) -> Option<&'c str> {
    columns
        .iter()
        .find(|c| c.field == field)
        .and_then(|c| c.fallback.as_deref())
}

/// Header label for `field`; undeclared fields are labelled by name
pub fn label_for<'c>(columns: &'c [Column], field: &'c str) -> &'c str {
    columns
        .iter()
        .find(|c| c.field == field)
        .map(|c| c.label.as_str())
        .unwrap_or(field)
}

/// Column ids for undeclared tables: every field name in first-seen order
pub fn discover_fields<'a>(records: impl IntoIterator<Item = &'a BookRecord>) -> Vec<String> {
    let mut seen = indexmap::IndexSet::new();
    for record in records {
        for key in record.keys() {
            if !seen.contains(key) {
                seen.insert(key.to_string());
            }
        }
    }
    seen.into_iter().collect()
}

/// Columns for an undeclared table: one per discovered field, labelled by name
pub fn undeclared_columns<'a>(records: impl IntoIterator<Item = &'a BookRecord>) -> Vec<Column> {
    discover_fields(records)
        .into_iter()
        .map(|field| Column::new(field.clone(), field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_falls_back_to_genre() {
        let columns = default_columns();
        let record = BookRecord::new().with("genre", "Poetry");
        assert_eq!(columns[4].value(&record), &FieldValue::from("Poetry"));
        assert_eq!(fallback_for(&columns, "category"), Some("genre"));
        assert_eq!(fallback_for(&columns, "year"), None);
    }

    #[test]
    fn test_label_for() {
        let columns = default_columns();
        assert_eq!(label_for(&columns, "year"), "Year");
        assert_eq!(label_for(&columns, "isbn"), "isbn");
    }

    #[test]
    fn test_discover_fields_first_seen_order() {
        let records = vec![
            BookRecord::new().with("id", 1).with("title", "A"),
            BookRecord::new().with("isbn", "x").with("id", 2),
        ];
        assert_eq!(discover_fields(&records), vec!["id", "title", "isbn"]);
    }
}
