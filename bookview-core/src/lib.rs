//! Bookview Core Library
//!
//! Loads a book catalog from candidate JSON sources and presents it through a
//! filter → sort → paginate pipeline. Views are rendered to escaped HTML
//! table markup with a status line, pager state and a hover cover preview.

pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod export;
pub mod preview;
pub mod render;
pub mod source;
pub mod types;
pub mod view;

pub use config::ViewerConfig;
pub use controller::{Controller, ControllerOptions, UiEvent, Update};
pub use error::{BookviewError, ConfigError, ExportError, LoadError, Result};
pub use render::{Labels, Locale, Renderer, ViewFrame};
pub use source::{Fallback, LoadOrigin, LoadOutcome, Loader, Source};
pub use types::{demo_books, BookRecord, FieldValue};
pub use view::{project, Column, Projection, SortSpec, ViewState};
