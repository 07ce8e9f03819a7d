//! View State: what subset of the catalog is on screen

use super::paginate::PageBounds;
use super::sort::SortSpec;
use serde::Serialize;

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Filter text, sort and page selection.
///
/// Mutated only by event handlers; the page index is corrected after every
/// projection so it always lies in `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub filter_text: String,
    pub sort: Option<SortSpec>,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter_text: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the filter text and go back to the first page
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.page = 1;
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(String::new());
    }

    /// Whether the filter text holds a non-blank keyword
    pub fn filter_active(&self) -> bool {
        !self.filter_text.trim().is_empty()
    }

    /// Header click: ascending, then descending, then ascending again.
    /// A different column always starts ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(spec) if spec.column == column => Some(spec.reversed()),
            _ => Some(SortSpec::ascending(column)),
        };
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Change rows per page and go back to the first page
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Request a page; out-of-range requests are clamped on the next projection
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Adopt the page geometry actually used by a projection
    pub fn correct(&mut self, bounds: &PageBounds) {
        self.page = bounds.index;
        self.page_size = bounds.size;
    }
}
