//! Plain-text rendering of a view for the terminal

use bookview_core::preview::HoverPreview;
use bookview_core::view::columns::undeclared_columns;
use bookview_core::{project, BookRecord, Column, Renderer, ViewFrame, ViewState};
use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a cell may be, in terminal columns
const MAX_CELL: usize = 36;

fn truncate(text: &str) -> String {
    let flat = text.replace(['\n', '\r', '\t'], " ");
    if flat.width() <= MAX_CELL {
        return flat;
    }

    let target = MAX_CELL - 1;
    let mut cut = String::new();
    let mut width = 0;
    for ch in flat.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        cut.push(ch);
        width += w;
    }
    cut.push('…');
    cut
}

fn pad(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

/// The current page as an aligned text table, followed by the status line
/// and page indicator from `frame`
pub fn page_text(
    records: &[BookRecord],
    state: &ViewState,
    renderer: &Renderer,
    frame: &ViewFrame,
) -> String {
    let projection = project(records, state, renderer.columns());
    let columns: Cow<'_, [Column]> = if renderer.columns().is_empty() {
        Cow::Owned(undeclared_columns(records))
    } else {
        Cow::Borrowed(renderer.columns())
    };

    let header: Vec<String> = frame.header.iter().map(|h| truncate(&h.label)).collect();
    let rows: Vec<Vec<String>> = projection
        .page_items()
        .iter()
        .map(|r| {
            columns
                .iter()
                .map(|c| truncate(&c.value(r).display_text()))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad(c, *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    if !rows.is_empty() {
        out.push_str(&line(header.as_slice()));
        out.push('\n');
        for row in &rows {
            out.push_str(&line(row.as_slice()));
            out.push('\n');
        }
    }
    out.push_str(&frame.status);
    out.push('\n');
    out.push_str(&format!("[{}]\n", frame.pager.indicator));
    out
}

/// One-line description of the preview panel
pub fn preview_text(preview: &HoverPreview) -> String {
    match (preview.content(), preview.position()) {
        (Some(content), Some(at)) => format!(
            "[preview] {} | cover: {} | link: {} | at ({:.0}, {:.0})",
            content.title,
            content.cover,
            content.buy.as_deref().unwrap_or("-"),
            at.x,
            at.y
        ),
        _ => "[preview hidden]".to_string(),
    }
}
