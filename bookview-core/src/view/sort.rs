//! Column sort with null handling and natural string order

use crate::types::{BookRecord, FieldValue};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

static CHUNKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[^0-9]+").expect("chunk pattern is valid"));

/// Active sort: a column id and a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: false,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            descending: true,
        }
    }

    /// Same column, opposite direction
    pub fn reversed(&self) -> Self {
        Self {
            column: self.column.clone(),
            descending: !self.descending,
        }
    }
}

/// Case-insensitive comparison that orders digit runs by value,
/// so `item2` sorts before `item10`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = CHUNKS.find_iter(a).map(|m| m.as_str());
    let mut right = CHUNKS.find_iter(b).map(|m| m.as_str());

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = if is_digits(x) && is_digits(y) {
                    digit_cmp(x, y)
                } else {
                    x.to_lowercase().cmp(&y.to_lowercase())
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn is_digits(chunk: &str) -> bool {
    chunk.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two runs of ASCII digits by value without overflowing
fn digit_cmp(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

/// Ascending comparison of two field values.
///
/// Nulls (and nested values) sort after everything else; two numeric values
/// compare by value; two non-numeric texts compare in natural order. A
/// number sorts ahead of non-numeric text, which keeps the order total on
/// columns mixing shapes like `5`, `1e3` and `3x`.
pub fn compare_values(a: &FieldValue, b: &FieldValue) -> Ordering {
    let a_text = a.as_text();
    let b_text = b.as_text();

    match (a_text, b_text) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match (a.as_number(), b.as_number()) {
            (Some(m), Some(n)) => m.partial_cmp(&n).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => natural_cmp(&x, &y),
        },
    }
}

/// Compare two records on `column` (falling back to `fallback` when the
/// column is null), in the requested direction.
pub fn compare_records(
    a: &BookRecord,
    b: &BookRecord,
    column: &str,
    fallback: Option<&str>,
    descending: bool,
) -> Ordering {
    let ord = compare_values(a.get_or(column, fallback), b.get_or(column, fallback));
    if descending {
        ord.reverse()
    } else {
        ord
    }
}

/// Stable sort into a new vector; ties keep their input order
pub fn sort_records<'a>(
    records: &[&'a BookRecord],
    column: &str,
    fallback: Option<&str>,
    descending: bool,
) -> Vec<&'a BookRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_records(a, b, column, fallback, descending));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::demo_books;

    #[test]
    fn test_natural_order() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("Item10", "item2"), Ordering::Greater);
        assert_eq!(natural_cmp("abc", "ABC"), Ordering::Equal);
        assert_eq!(natural_cmp("a", "ab"), Ordering::Less);
        assert_eq!(natural_cmp("v007", "v7"), Ordering::Equal);
        assert_eq!(
            natural_cmp("file99999999999999999999999", "file100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn test_nulls_sort_last_ascending() {
        assert_eq!(
            compare_values(&FieldValue::Null, &FieldValue::from("a")),
            Ordering::Greater
        );
        assert_eq!(compare_values(&FieldValue::Null, &FieldValue::Null), Ordering::Equal);

        let a = BookRecord::new().with("year", 2000);
        let b = BookRecord::new();
        assert_eq!(compare_records(&a, &b, "year", None, false), Ordering::Less);
        assert_eq!(compare_records(&a, &b, "year", None, true), Ordering::Greater);
    }

    #[test]
    fn test_numeric_text_compares_by_value() {
        assert_eq!(
            compare_values(&FieldValue::from("9"), &FieldValue::from(10)),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&FieldValue::from(" 2.5"), &FieldValue::from("10")),
            Ordering::Less
        );
    }

    #[test]
    fn test_numbers_sort_ahead_of_text() {
        let five = FieldValue::from("5");
        let thousand = FieldValue::from("1e3");
        let word = FieldValue::from("3x");
        assert_eq!(compare_values(&five, &thousand), Ordering::Less);
        assert_eq!(compare_values(&thousand, &word), Ordering::Less);
        assert_eq!(compare_values(&five, &word), Ordering::Less);
        assert_eq!(compare_values(&FieldValue::from(40), &word), Ordering::Less);
    }

    #[test]
    fn test_sort_by_year_is_stable() {
        let books = demo_books();
        let refs: Vec<&BookRecord> = books.iter().collect();

        let asc = sort_records(&refs, "year", None, false);
        assert_eq!(asc[0].title(), "Design Patterns");

        let desc = sort_records(&refs, "year", None, true);
        assert_eq!(desc[0].title(), "Refactoring");
        assert_eq!(desc[1].title(), "The Rust Programming Language");
    }

    #[test]
    fn test_input_is_not_mutated() {
        let books = demo_books();
        let refs: Vec<&BookRecord> = books.iter().collect();
        let _ = sort_records(&refs, "title", None, false);
        assert_eq!(refs[0].title(), "Clean Code");
    }

    #[test]
    fn test_fallback_column() {
        let a = BookRecord::new().with("genre", "Poetry");
        let b = BookRecord::new().with("category", "Drama");
        let refs = vec![&a, &b];
        let sorted = sort_records(&refs, "category", Some("genre"), false);
        assert_eq!(sorted[0], &b);
    }
}
