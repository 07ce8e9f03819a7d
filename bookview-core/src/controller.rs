//! Event wiring: UI events in, view frames out
//!
//! The controller owns the record set, the View State, the search debouncer
//! and the hover preview. Every interaction goes through [`Controller::handle`];
//! time-based work (debounced search, delayed hide) fires from
//! [`Controller::tick`].

use crate::debounce::{Debounced, DEFAULT_SEARCH_DEBOUNCE};
use crate::preview::{Anchor, HoverPreview, Size, DEFAULT_HIDE_DELAY};
use crate::render::{Renderer, ViewFrame};
use crate::types::BookRecord;
use crate::view::{project, ViewState};
use std::time::{Duration, Instant};

/// A user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Keystroke in the search box; carries the whole current text
    SearchInput(String),
    /// Escape in the search box: clear the filter at once
    SearchEscape,
    /// Click on a sortable header
    HeaderClick(String),
    PreviousPage,
    NextPage,
    GoToPage(usize),
    PageSize(usize),
    /// Pointer or focus entered the row at this position on the current page
    RowEnter { row: usize, anchor: Anchor },
    RowLeave,
    PreviewEnter,
    PreviewLeave,
    Scroll,
}

/// What a handled event changed
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Unchanged,
    /// Table, status and pager must be redrawn
    Redraw(ViewFrame),
    /// The preview panel opened, moved or closed
    Preview,
}

/// Timing and geometry used by the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    pub search_debounce: Duration,
    pub hide_delay: Duration,
    /// Size of the preview panel once laid out
    pub panel: Size,
    pub viewport: Size,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            hide_delay: DEFAULT_HIDE_DELAY,
            panel: Size {
                width: 200.0,
                height: 300.0,
            },
            viewport: Size {
                width: 1280.0,
                height: 800.0,
            },
        }
    }
}

pub struct Controller {
    records: Vec<BookRecord>,
    state: ViewState,
    renderer: Renderer,
    search: Debounced<String>,
    preview: HoverPreview,
    options: ControllerOptions,
}

impl Controller {
    pub fn new(
        records: Vec<BookRecord>,
        renderer: Renderer,
        state: ViewState,
        options: ControllerOptions,
    ) -> Self {
        Self {
            records,
            state,
            renderer,
            search: Debounced::new(options.search_debounce),
            preview: HoverPreview::new(options.hide_delay),
            options,
        }
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn preview(&self) -> &HoverPreview {
        &self.preview
    }

    /// Render the current view, correcting the page index if needed
    pub fn frame(&mut self) -> ViewFrame {
        self.renderer.frame(&self.records, &mut self.state)
    }

    /// Earliest pending deadline (debounced search or delayed hide)
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.deadline(), self.preview.hide_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn handle(&mut self, event: UiEvent, now: Instant) -> Update {
        tracing::debug!("UI event: {:?}", event);

        match event {
            UiEvent::SearchInput(text) => {
                self.search.push(text, now);
                Update::Unchanged
            }
            UiEvent::SearchEscape => {
                self.search.cancel();
                self.state.clear_filter();
                self.redraw()
            }
            UiEvent::HeaderClick(column) => {
                self.state.toggle_sort(&column);
                self.redraw()
            }
            UiEvent::PreviousPage => {
                self.state.previous_page();
                self.redraw()
            }
            UiEvent::NextPage => {
                self.state.next_page();
                self.redraw()
            }
            UiEvent::GoToPage(page) => {
                self.state.go_to(page);
                self.redraw()
            }
            UiEvent::PageSize(size) => {
                self.state.set_page_size(size);
                self.redraw()
            }
            UiEvent::RowEnter { row, anchor } => self.row_enter(row, anchor),
            UiEvent::RowLeave => {
                self.preview.row_leave(now);
                Update::Unchanged
            }
            UiEvent::PreviewEnter => {
                self.preview.panel_enter();
                Update::Unchanged
            }
            UiEvent::PreviewLeave => {
                self.preview.panel_leave(now);
                Update::Unchanged
            }
            UiEvent::Scroll => {
                if self.preview.scroll() {
                    Update::Preview
                } else {
                    Update::Unchanged
                }
            }
        }
    }

    /// Fire due deadlines
    pub fn tick(&mut self, now: Instant) -> Vec<Update> {
        let mut updates = Vec::new();

        if let Some(text) = self.search.poll(now) {
            self.state.set_filter(text);
            updates.push(self.redraw());
        }

        if self.preview.tick(now) {
            updates.push(Update::Preview);
        }

        updates
    }

    fn redraw(&mut self) -> Update {
        // Rows under the pointer are replaced; a stale cover must not linger
        self.preview.hide();
        Update::Redraw(self.frame())
    }

    fn row_enter(&mut self, row: usize, anchor: Anchor) -> Update {
        let was_visible = self.preview.is_visible();
        let projection = project(&self.records, &self.state, self.renderer.columns());

        let Some(record) = projection.page_items().get(row).copied() else {
            tracing::debug!("Row {} is not on the current page", row);
            return Update::Unchanged;
        };

        let shown = self.preview.row_enter(
            record,
            anchor,
            self.options.panel,
            self.options.viewport,
        );
        if shown || was_visible != self.preview.is_visible() {
            Update::Preview
        } else {
            Update::Unchanged
        }
    }
}
