//! Rendering a projection into table markup, status text and pager state

pub mod escape;
pub mod labels;
mod page;
pub mod status;
pub mod table;

pub use escape::escape_html;
pub use labels::{Labels, Locale};
pub use status::{status_text, PagerState};
pub use table::{render_header, render_rows, HeaderCell, RenderedRow, SortIndicator};

use crate::types::BookRecord;
use crate::view::{columns::undeclared_columns, project, Column, ViewState};
use serde::Serialize;
use std::borrow::Cow;

/// Default page-size menu
pub const DEFAULT_PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];

/// Everything needed to draw the current view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFrame {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    pub status: String,
    pub pager: PagerState,
}

impl ViewFrame {
    /// `<thead>` and `<tbody>` of the table
    pub fn table_html(&self) -> String {
        let header: String = self.header.iter().map(HeaderCell::to_html).collect();
        let body: String = if self.rows.is_empty() {
            format!(
                r#"<tr class="empty"><td colspan="{}">{}</td></tr>"#,
                self.header.len().max(1),
                escape_html(&self.status)
            )
        } else {
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| row.to_html(i))
                .collect()
        };
        format!(
            "<thead><tr>{}</tr></thead><tbody>{}</tbody>",
            header, body
        )
    }
}

/// Projects and renders views with a fixed column/label configuration
#[derive(Debug, Clone)]
pub struct Renderer {
    columns: Vec<Column>,
    labels: Labels,
    page_sizes: Vec<usize>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(
            crate::view::default_columns(),
            Labels::default(),
            DEFAULT_PAGE_SIZES.to_vec(),
        )
    }
}

impl Renderer {
    /// An empty `columns` list renders every record field
    pub fn new(columns: Vec<Column>, labels: Labels, page_sizes: Vec<usize>) -> Self {
        Self {
            columns,
            labels,
            page_sizes,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    /// Run the pipeline, correct the page index in `state`, and render
    pub fn frame(&self, records: &[BookRecord], state: &mut ViewState) -> ViewFrame {
        let projection = project(records, state, &self.columns);
        let status = status_text(&projection, state, &self.labels, &self.columns);
        state.correct(&projection.bounds);

        let columns: Cow<'_, [Column]> = if self.columns.is_empty() {
            Cow::Owned(undeclared_columns(records))
        } else {
            Cow::Borrowed(&self.columns)
        };
        let header = render_header(
            columns.iter().map(|c| (c.field.as_str(), c.label.as_str())),
            state.sort.as_ref(),
        );

        ViewFrame {
            header,
            rows: render_rows(projection.page_items(), &columns),
            status,
            pager: PagerState::new(&projection, &self.labels, &self.page_sizes),
        }
    }

    /// Standalone HTML page for a frame
    pub fn page_html(&self, frame: &ViewFrame, state: &ViewState) -> String {
        page::render_page(frame, state, &self.labels)
    }
}
