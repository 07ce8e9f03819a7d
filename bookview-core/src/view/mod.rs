//! The data view pipeline: filter → sort → paginate
//!
//! The record set is never modified; every stage produces a derived view of
//! references into it.

pub mod columns;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use columns::{catalog_columns, default_columns, Column};
pub use paginate::{page_bounds, paginate, Page, PageBounds};
pub use sort::SortSpec;
pub use state::{ViewState, DEFAULT_PAGE_SIZE};

use crate::types::BookRecord;

/// The catalog as seen through a View State
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    /// Size of the unfiltered record set
    pub total: usize,
    /// Filtered and sorted records, all pages
    pub ordered: Vec<&'a BookRecord>,
    /// Clamped page geometry
    pub bounds: PageBounds,
}

impl<'a> Projection<'a> {
    /// Number of records passing the filter
    pub fn matched(&self) -> usize {
        self.ordered.len()
    }

    /// Records on the current page
    pub fn page_items(&self) -> &[&'a BookRecord] {
        &self.ordered[self.bounds.range()]
    }
}

/// Run the pipeline for `state` over `records`.
///
/// `columns` supplies fallback fields for the sort column; pass an empty
/// slice for undeclared tables.
pub fn project<'a>(
    records: &'a [BookRecord],
    state: &ViewState,
    columns: &[Column],
) -> Projection<'a> {
    let filtered = filter::filter_records(records, &state.filter_text);

    let ordered = match &state.sort {
        Some(spec) => sort::sort_records(
            &filtered,
            &spec.column,
            columns::fallback_for(columns, &spec.column),
            spec.descending,
        ),
        None => filtered,
    };

    let requested = i64::try_from(state.page).unwrap_or(i64::MAX);
    let bounds = page_bounds(ordered.len(), state.page_size, requested);

    Projection {
        total: records.len(),
        ordered,
        bounds,
    }
}
