//! Page slicing with index clamping

use serde::Serialize;
use std::ops::Range;

/// Effective page geometry after clamping a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageBounds {
    /// 1-based page index actually used
    pub index: usize,
    /// Page size actually used (never 0)
    pub size: usize,
    pub total_pages: usize,
    /// Offset of the first item on the page
    pub start: usize,
    /// Offset one past the last item on the page
    pub end: usize,
}

impl PageBounds {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn has_previous(&self) -> bool {
        self.index > 1
    }

    pub fn has_next(&self) -> bool {
        self.index < self.total_pages
    }
}

/// `max(1, ceil(len / size))`, with a size of 0 read as 1
pub fn total_pages(len: usize, size: usize) -> usize {
    len.div_ceil(size.max(1)).max(1)
}

/// Clamp a requested page (1-based, possibly zero or negative) against `len` items
pub fn page_bounds(len: usize, size: usize, requested: i64) -> PageBounds {
    let size = size.max(1);
    let total_pages = total_pages(len, size);
    let index = usize::try_from(requested.max(1))
        .unwrap_or(usize::MAX)
        .min(total_pages);
    let start = ((index - 1) * size).min(len);
    let end = (index * size).min(len);

    PageBounds {
        index,
        size,
        total_pages,
        start,
        end,
    }
}

/// One page of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub bounds: PageBounds,
}

/// Slice out the requested page, clamping the index into range
pub fn paginate<T>(items: &[T], size: usize, requested: i64) -> Page<'_, T> {
    let bounds = page_bounds(items.len(), size, requested);
    Page {
        items: &items[bounds.range()],
        bounds,
    }
}
