//! Table header and row rendering

use super::escape::escape_html;
use crate::types::{BookRecord, FieldValue};
use crate::view::{Column, SortSpec};
use serde::Serialize;

/// Direction shown on the active sort header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortIndicator {
    Ascending,
    Descending,
}

impl SortIndicator {
    fn arrow(self) -> &'static str {
        match self {
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }

    fn aria(self) -> &'static str {
        match self {
            SortIndicator::Ascending => "ascending",
            SortIndicator::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub column: String,
    pub label: String,
    pub sort: Option<SortIndicator>,
}

impl HeaderCell {
    pub fn to_html(&self) -> String {
        match self.sort {
            Some(indicator) => format!(
                r#"<th data-column="{}" class="sortable sorted" aria-sort="{}">{} {}</th>"#,
                escape_html(&self.column),
                indicator.aria(),
                escape_html(&self.label),
                indicator.arrow()
            ),
            None => format!(
                r#"<th data-column="{}" class="sortable">{}</th>"#,
                escape_html(&self.column),
                escape_html(&self.label)
            ),
        }
    }
}

/// Header cells for `(field, label)` pairs, marking the active sort column
pub fn render_header<'a, I>(columns: I, sort: Option<&SortSpec>) -> Vec<HeaderCell>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    columns
        .into_iter()
        .map(|(field, label)| HeaderCell {
            column: field.to_string(),
            label: label.to_string(),
            sort: sort.filter(|s| s.column == field).map(|s| {
                if s.descending {
                    SortIndicator::Descending
                } else {
                    SortIndicator::Ascending
                }
            }),
        })
        .collect()
}

/// One table row; cell contents are already escaped markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub cells: Vec<String>,
    pub title: String,
    pub cover: Option<String>,
    pub buy: Option<String>,
}

impl RenderedRow {
    /// `<tr>` for the row at `index` within the page
    pub fn to_html(&self, index: usize) -> String {
        let mut attrs = format!(r#" data-row="{}""#, index);
        if let Some(cover) = &self.cover {
            attrs.push_str(&format!(r#" data-cover="{}""#, escape_html(cover)));
        }
        if let Some(buy) = &self.buy {
            attrs.push_str(&format!(r#" data-buy="{}""#, escape_html(buy)));
        }

        let cells: String = self
            .cells
            .iter()
            .map(|cell| format!("<td>{}</td>", cell))
            .collect();
        format!("<tr{}>{}</tr>", attrs, cells)
    }
}

fn cell_html(value: &FieldValue, clamp: bool) -> String {
    let text = escape_html(&value.display_text());
    if clamp {
        format!(r#"<span class="cell clamp-2">{}</span>"#, text)
    } else {
        text
    }
}

/// Rows for the page items, one cell per column. Fields a record lacks render
/// as empty cells so every row lines up with the header.
pub fn render_rows(items: &[&BookRecord], columns: &[Column]) -> Vec<RenderedRow> {
    items
        .iter()
        .map(|record| {
            let cells = columns
                .iter()
                .map(|column| cell_html(column.value(record), column.clamp))
                .collect();

            RenderedRow {
                cells,
                title: record.title(),
                cover: record.cover().map(str::to_string),
                buy: record.buy().map(str::to_string),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{columns::undeclared_columns, default_columns};

    #[test]
    fn test_declared_columns_order_and_escaping() {
        let record = BookRecord::new()
            .with("year", 2001)
            .with("title", "<b>Bold</b> & Co")
            .with("id", 1);
        let rows = render_rows(&[&record], &default_columns());
        assert_eq!(
            rows[0].cells,
            vec![
                "1".to_string(),
                r#"<span class="cell clamp-2">&lt;b&gt;Bold&lt;/b&gt; &amp; Co</span>"#.to_string(),
                r#"<span class="cell clamp-2"></span>"#.to_string(),
                "2001".to_string(),
                r#"<span class="cell clamp-2"></span>"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_discovered_columns_align_mixed_key_sets() {
        let a = BookRecord::new().with("id", 1).with("title", "A");
        let b = BookRecord::new().with("isbn", "X-1").with("id", 2);
        let columns = undeclared_columns([&a, &b]);

        let rows = render_rows(&[&a, &b], &columns);
        assert_eq!(rows[0].cells, vec!["1", "A", ""]);
        assert_eq!(rows[1].cells, vec!["2", "", "X-1"]);
    }

    #[test]
    fn test_row_attributes_are_escaped() {
        let record = BookRecord::new()
            .with("cover", r#"https://c/"onload="x.jpg"#)
            .with("buy", "https://shop/?a=1&b=2");
        let html = render_rows(&[&record], &[])[0].to_html(0);
        assert!(html.contains(r#"data-cover="https://c/&quot;onload=&quot;x.jpg""#));
        assert!(html.contains(r#"data-buy="https://shop/?a=1&amp;b=2""#));
    }

    #[test]
    fn test_header_marks_sort_column() {
        let sort = SortSpec::descending("year");
        let header = render_header([("id", "ID"), ("year", "Year")], Some(&sort));
        assert_eq!(header[0].sort, None);
        assert_eq!(header[1].sort, Some(SortIndicator::Descending));
        assert_eq!(
            header[1].to_html(),
            r#"<th data-column="year" class="sortable sorted" aria-sort="descending">Year ▼</th>"#
        );
    }
}
