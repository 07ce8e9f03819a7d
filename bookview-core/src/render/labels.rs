//! User-facing text
//!
//! Templates use `_NAME_` placeholders, filled with [`fill`].

use crate::view::{catalog_columns, default_columns, Column};
use serde::{Deserialize, Serialize};

/// Language preset for labels, column titles and export names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub fn labels(self) -> Labels {
        match self {
            Locale::En => Labels::default(),
            Locale::Vi => Labels::vietnamese(),
        }
    }

    pub fn columns(self) -> Vec<Column> {
        match self {
            Locale::En => default_columns(),
            Locale::Vi => catalog_columns(["ID", "Tên sách", "Tác giả", "Năm", "Thể loại"]),
        }
    }

    /// Base of export file names
    pub fn export_base(self) -> &'static str {
        match self {
            Locale::En => "library",
            Locale::Vi => "thu-vien",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub page_title: String,
    pub search: String,
    pub search_placeholder: String,
    pub page_size: String,
    pub previous: String,
    pub next: String,
    pub print: String,

    /// `_SHOWN_`, `_TOTAL_`
    pub info: String,
    /// `_MATCHED_`, `_QUERY_`
    pub info_filtered: String,
    /// `_COLUMN_`, `_DIRECTION_`
    pub info_sorted: String,
    /// `_PAGE_`, `_PAGES_`
    pub info_position: String,
    pub separator: String,
    pub ascending: String,
    pub descending: String,

    /// Nothing was loaded at all
    pub empty_table: String,
    /// `_QUERY_`, `_TOTAL_`: the filter removed every record
    pub zero_records: String,
    /// Records exist but the current page holds none
    pub empty_page: String,

    /// `_PAGE_`, `_PAGES_`
    pub indicator: String,

    /// `_TITLE_`
    pub preview_link: String,
    /// `_TITLE_`
    pub preview_alt: String,
    pub preview_hint: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            page_title: "Book catalog".to_string(),
            search: "Search:".to_string(),
            search_placeholder: "Title, author, year…".to_string(),
            page_size: "Rows per page:".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            print: "Print".to_string(),
            info: "Showing _SHOWN_ of _TOTAL_ books".to_string(),
            info_filtered: "_MATCHED_ matching \"_QUERY_\"".to_string(),
            info_sorted: "sorted by _COLUMN_ (_DIRECTION_)".to_string(),
            info_position: "page _PAGE_ of _PAGES_".to_string(),
            separator: " · ".to_string(),
            ascending: "ascending".to_string(),
            descending: "descending".to_string(),
            empty_table: "No data loaded.".to_string(),
            zero_records: "No books match \"_QUERY_\" (_TOTAL_ loaded).".to_string(),
            empty_page: "Nothing to show on this page".to_string(),
            indicator: "_PAGE_ / _PAGES_".to_string(),
            preview_link: "Open purchase link: _TITLE_".to_string(),
            preview_alt: "Cover: _TITLE_".to_string(),
            preview_hint: "Click the cover to open the link".to_string(),
        }
    }
}

impl Labels {
    /// Vietnamese labels
    pub fn vietnamese() -> Self {
        Self {
            page_title: "Thư viện".to_string(),
            search: "Tìm:".to_string(),
            search_placeholder: "Tên sách, tác giả, năm…".to_string(),
            page_size: "Hiển thị:".to_string(),
            previous: "Trước".to_string(),
            next: "Sau".to_string(),
            print: "In ấn".to_string(),
            info: "Hiển thị _SHOWN_ / _TOTAL_ mục".to_string(),
            info_filtered: "lọc được _MATCHED_ mục cho \"_QUERY_\"".to_string(),
            info_sorted: "sắp xếp theo _COLUMN_ (_DIRECTION_)".to_string(),
            info_position: "Trang _PAGE_ / _PAGES_".to_string(),
            separator: " · ".to_string(),
            ascending: "tăng dần".to_string(),
            descending: "giảm dần".to_string(),
            empty_table: "Bảng trống".to_string(),
            zero_records: "Không tìm thấy kết quả phù hợp cho \"_QUERY_\" (tổng _TOTAL_ mục)".to_string(),
            empty_page: "Không có dữ liệu".to_string(),
            indicator: "_PAGE_ / _PAGES_".to_string(),
            preview_link: "Mở liên kết mua: _TITLE_".to_string(),
            preview_alt: "Bìa: _TITLE_".to_string(),
            preview_hint: "Nhấp vào bìa để mở liên kết".to_string(),
        }
    }
}

/// Replace each `(placeholder, value)` pair in `template`
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value))
}
