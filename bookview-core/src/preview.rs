//! Cover preview shown while hovering a row
//!
//! A floating panel with the cover image, linked to the purchase URL. It
//! follows the pointer (mouse) or sits beside the row (keyboard focus), and
//! stays inside the viewport. Leaving a row hides it after a short delay
//! unless the pointer has moved onto the panel itself.

use crate::render::labels::{fill, Labels};
use crate::render::escape_html;
use crate::types::BookRecord;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Default delay between leaving a row (or the panel) and hiding
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(120);

const POINTER_OFFSET: f64 = 16.0;
const POINTER_MARGIN: f64 = 14.0;
const ROW_MARGIN: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// What triggered the preview
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Mouse pointer position
    Pointer(Point),
    /// Bounding box of the row (keyboard or programmatic focus)
    Row(Rect),
}

/// Panel position next to the pointer, flipped and clamped to the viewport
pub fn place_at_pointer(pointer: Point, panel: Size, viewport: Size) -> Point {
    let pad = POINTER_MARGIN;
    let mut x = pointer.x + POINTER_OFFSET;
    let mut y = pointer.y + POINTER_OFFSET;

    if x + panel.width > viewport.width - pad {
        x = pointer.x - panel.width - POINTER_OFFSET;
    }
    if y + panel.height > viewport.height - pad {
        y = pad.max(viewport.height - panel.height - pad);
    }

    Point {
        x: x.max(pad),
        y: y.max(pad),
    }
}

/// Panel position beside a row, flipped to its left side on overflow
pub fn place_near_row(row: Rect, panel: Size, viewport: Size) -> Point {
    let pad = ROW_MARGIN;
    let mut x = row.right() + pad;
    let mut y = row.top;

    if x + panel.width > viewport.width - pad {
        x = row.left - panel.width - pad;
    }
    if y + panel.height > viewport.height - pad {
        y = pad.max(viewport.height - panel.height - pad);
    }

    Point {
        x: x.max(pad),
        y: y.max(pad),
    }
}

pub fn place(anchor: Anchor, panel: Size, viewport: Size) -> Point {
    match anchor {
        Anchor::Pointer(p) => place_at_pointer(p, panel, viewport),
        Anchor::Row(r) => place_near_row(r, panel, viewport),
    }
}

/// What the panel shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewContent {
    pub cover: String,
    pub buy: Option<String>,
    pub title: String,
}

impl PreviewContent {
    /// Content for a record; `None` when it has no cover
    pub fn for_record(record: &BookRecord) -> Option<Self> {
        record.cover().map(|cover| Self {
            cover: cover.to_string(),
            buy: record.buy().map(str::to_string),
            title: record.title(),
        })
    }

    pub fn to_html(&self, labels: &Labels) -> String {
        let title = escape_html(&self.title);
        let href = self.buy.as_deref().map(escape_html).unwrap_or_else(|| "#".to_string());
        format!(
            r#"<a href="{}" target="_blank" rel="noopener" aria-label="{}"><img src="{}" alt="{}"></a><div class="hint">{}</div>"#,
            href,
            fill(&labels.preview_link, &[("_TITLE_", title.as_str())]),
            escape_html(&self.cover),
            fill(&labels.preview_alt, &[("_TITLE_", title.as_str())]),
            escape_html(&labels.preview_hint)
        )
    }
}

/// Hover preview state machine.
///
/// Time is supplied by the caller; pending hides fire from [`HoverPreview::tick`].
#[derive(Debug, Clone)]
pub struct HoverPreview {
    hide_delay: Duration,
    content: Option<PreviewContent>,
    position: Option<Point>,
    locked: bool,
    hide_at: Option<Instant>,
}

impl Default for HoverPreview {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY)
    }
}

impl HoverPreview {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            hide_delay,
            content: None,
            position: None,
            locked: false,
            hide_at: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.content.is_some()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn content(&self) -> Option<&PreviewContent> {
        self.content.as_ref()
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// When the pending hide fires, if one is scheduled
    pub fn hide_deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    /// Pointer or focus entered a row. Returns whether the panel is shown.
    pub fn row_enter(&mut self, record: &BookRecord, anchor: Anchor, panel: Size, viewport: Size) -> bool {
        match PreviewContent::for_record(record) {
            Some(content) => {
                self.hide_at = None;
                self.position = Some(place(anchor, panel, viewport));
                self.content = Some(content);
                true
            }
            None => {
                self.hide();
                false
            }
        }
    }

    pub fn row_leave(&mut self, now: Instant) {
        self.schedule_hide(now);
    }

    /// Pointer moved onto the panel: keep it open
    pub fn panel_enter(&mut self) {
        self.locked = true;
        self.hide_at = None;
    }

    pub fn panel_leave(&mut self, now: Instant) {
        self.locked = false;
        self.schedule_hide(now);
    }

    /// Any scroll hides the panel at once, unless locked
    pub fn scroll(&mut self) -> bool {
        self.hide()
    }

    /// Fire a due hide. Returns whether the panel was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if deadline <= now => {
                self.hide_at = None;
                self.hide()
            }
            _ => false,
        }
    }

    /// Hide now. A no-op while locked. Returns whether the panel was hidden.
    pub fn hide(&mut self) -> bool {
        if self.locked || self.content.is_none() {
            return false;
        }
        self.content = None;
        self.position = None;
        self.hide_at = None;
        true
    }

    fn schedule_hide(&mut self, now: Instant) {
        if self.content.is_some() {
            self.hide_at = Some(now + self.hide_delay);
        }
    }
}
