//! CLI command implementations

mod browse;
mod export;
mod render;
mod text;
mod view;

pub use browse::browse;
pub use export::export;
pub use render::render;
pub use view::view;

use anyhow::{Context, Result};
use bookview_core::source::{Fallback, LoadOrigin};
use bookview_core::types::BookRecord;
use bookview_core::view::{SortSpec, ViewState};
use bookview_core::ViewerConfig;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Parse and validate a page size (must be at least 1)
fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("page size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

/// Data sources and initial view state shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Candidate data source (path or URL); repeat to try several in order
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Initial search keyword
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to show (clamped to the available pages)
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page
    #[arg(long, value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Show an empty table instead of demo data when no source loads
    #[arg(long)]
    pub no_demo: bool,
}

/// A loaded catalog with its configuration and initial view state
pub struct Session {
    pub config: ViewerConfig,
    pub records: Vec<BookRecord>,
    pub origin: LoadOrigin,
    pub state: ViewState,
}

/// Load configuration, apply flag overrides, and load the catalog
pub async fn open(config_path: Option<&Path>, args: &ViewArgs) -> Result<Session> {
    let mut config = match config_path {
        Some(path) => ViewerConfig::load(path)
            .await
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };

    if !args.sources.is_empty() {
        config.sources = args.sources.clone();
    }
    if args.no_demo {
        config.fallback = Fallback::Empty;
    }
    if let Some(size) = args.page_size {
        config.page_size = size;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Loading catalog ({} candidates)", config.sources.len()));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = config.loader().load().await;
    spinner.finish_and_clear();

    match &outcome.origin {
        LoadOrigin::Source(location) => {
            tracing::debug!("Catalog loaded from {}", location)
        }
        LoadOrigin::Demo => tracing::info!("Showing demo data"),
        LoadOrigin::Empty => tracing::info!("No catalog loaded"),
    }

    let mut state = config.initial_state();
    if let Some(search) = &args.search {
        state.set_filter(search.as_str());
    }
    if let Some(column) = &args.sort {
        state.set_sort(Some(if args.desc {
            SortSpec::descending(column.as_str())
        } else {
            SortSpec::ascending(column.as_str())
        }));
    }
    if let Some(page) = args.page {
        state.go_to(page);
    }

    Ok(Session {
        config,
        records: outcome.records,
        origin: outcome.origin,
        state,
    })
}
