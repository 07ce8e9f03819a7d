//! Status line and pager controls

use super::labels::{fill, Labels};
use crate::view::{columns::label_for, Column, Projection, ViewState};
use serde::Serialize;

/// Status text for a projection.
///
/// Reports the unfiltered total, rows on the page, matches when a filter is
/// active, the active sort and the page position. Empty states get their own
/// messages, including a requested page past the last one; `state` must be
/// the state before [`ViewState::correct`] for that case to show.
pub fn status_text(
    projection: &Projection<'_>,
    state: &ViewState,
    labels: &Labels,
    columns: &[Column],
) -> String {
    let bounds = &projection.bounds;
    let total = projection.total.to_string();
    let pages = bounds.total_pages.to_string();
    let page = bounds.index.to_string();
    let position = fill(
        &labels.info_position,
        &[("_PAGES_", pages.as_str()), ("_PAGE_", page.as_str())],
    );

    if projection.total == 0 {
        return labels.empty_table.clone();
    }

    if projection.matched() == 0 {
        return fill(
            &labels.zero_records,
            &[("_TOTAL_", total.as_str()), ("_QUERY_", state.filter_text.trim())],
        );
    }

    if state.page > bounds.total_pages {
        return format!("{}{}{}", labels.empty_page, labels.separator, position);
    }

    let shown = projection.page_items().len().to_string();
    let mut parts = vec![fill(
        &labels.info,
        &[("_TOTAL_", total.as_str()), ("_SHOWN_", shown.as_str())],
    )];

    if state.filter_active() {
        let matched = projection.matched().to_string();
        parts.push(fill(
            &labels.info_filtered,
            &[
                ("_MATCHED_", matched.as_str()),
                ("_QUERY_", state.filter_text.trim()),
            ],
        ));
    }

    if let Some(sort) = &state.sort {
        let direction = if sort.descending {
            &labels.descending
        } else {
            &labels.ascending
        };
        parts.push(fill(
            &labels.info_sorted,
            &[
                ("_DIRECTION_", direction.as_str()),
                ("_COLUMN_", label_for(columns, &sort.column)),
            ],
        ));
    }

    parts.push(position);
    parts.join(&labels.separator)
}

/// State of the previous/next buttons, page indicator and page-size selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerState {
    pub index: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub indicator: String,
    pub page_size_options: Vec<usize>,
}

impl PagerState {
    pub fn new(projection: &Projection<'_>, labels: &Labels, page_size_options: &[usize]) -> Self {
        let bounds = &projection.bounds;
        let mut options = page_size_options.to_vec();
        if !options.contains(&bounds.size) {
            options.push(bounds.size);
            options.sort_unstable();
        }

        let pages = bounds.total_pages.to_string();
        let page = bounds.index.to_string();

        Self {
            index: bounds.index,
            total_pages: bounds.total_pages,
            page_size: bounds.size,
            previous_enabled: bounds.has_previous(),
            next_enabled: bounds.has_next(),
            indicator: fill(
                &labels.indicator,
                &[("_PAGES_", pages.as_str()), ("_PAGE_", page.as_str())],
            ),
            page_size_options: options,
        }
    }
}
