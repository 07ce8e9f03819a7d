//! Keyword filter over record fields

use crate::types::BookRecord;

/// Trimmed, lowercased keyword; `None` when the raw text is blank
pub fn normalize_keyword(raw: &str) -> Option<String> {
    let keyword = raw.trim().to_lowercase();
    (!keyword.is_empty()).then_some(keyword)
}

/// Whether any scalar field of `record` contains `keyword` (already normalized)
pub fn matches(record: &BookRecord, keyword: &str) -> bool {
    record.fields().any(|(_, value)| {
        value
            .as_text()
            .is_some_and(|text| text.to_lowercase().contains(keyword))
    })
}

/// Records matching `raw`, in input order. A blank keyword keeps everything.
pub fn filter_records<'a, I>(records: I, raw: &str) -> Vec<&'a BookRecord>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    match normalize_keyword(raw) {
        Some(keyword) => records
            .into_iter()
            .filter(|record| matches(record, &keyword))
            .collect(),
        None => records.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::demo_books;
    use serde_json::json;

    fn ids(records: &[&BookRecord]) -> Vec<String> {
        records.iter().map(|r| r.id().display_text().into_owned()).collect()
    }

    #[test]
    fn test_keyword_is_trimmed_and_case_insensitive() {
        let books = demo_books();
        let found = filter_records(&books, "  PyThOn ");
        assert_eq!(ids(&found), vec!["9", "10"]);
    }

    #[test]
    fn test_blank_keyword_keeps_order() {
        let books = demo_books();
        assert_eq!(filter_records(&books, "   ").len(), books.len());
        assert_eq!(filter_records(&books, "")[0], &books[0]);
    }

    #[test]
    fn test_numbers_match_by_text() {
        let books = demo_books();
        let found = filter_records(&books, "1994");
        assert_eq!(ids(&found), vec!["3"]);
    }

    #[test]
    fn test_nested_and_null_fields_are_skipped() {
        let record = BookRecord::from_json(json!({
            "id": 1,
            "tags": ["python"],
            "meta": {"lang": "python"},
            "note": null
        }))
        .unwrap();
        assert!(!matches(&record, "python"));
        assert!(!matches(&record, "null"));
    }

    #[test]
    fn test_booleans_match_by_text() {
        let record = BookRecord::new().with("available", true);
        assert!(matches(&record, "true"));
    }
}
