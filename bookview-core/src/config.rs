//! Viewer configuration

use crate::controller::ControllerOptions;
use crate::error::{ConfigError, Result};
use crate::render::{Labels, Locale, Renderer, DEFAULT_PAGE_SIZES};
use crate::source::{Fallback, Loader, DEFAULT_SOURCES};
use crate::view::{Column, ViewState, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Tunables for loading, viewing and exporting the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Candidate sources, tried in order
    pub sources: Vec<String>,
    pub fallback: Fallback,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u64,
    pub preview_hide_delay_ms: u64,
    pub locale: Locale,

    /// `None` uses the locale's catalog columns; an empty list shows every field
    pub columns: Option<Vec<Column>>,

    /// Overrides the locale's labels
    pub labels: Option<Labels>,

    /// File-name stem for exports
    pub export_base: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            fallback: Fallback::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZES.to_vec(),
            search_debounce_ms: 180,
            preview_hide_delay_ms: 120,
            locale: Locale::default(),
            columns: None,
            labels: None,
            export_base: None,
        }
    }
}

impl ViewerConfig {
    /// Load from a JSON file; a missing file yields the defaults
    pub async fn load(path: &Path) -> Result<Self> {
        let data = match tokio::fs::read_to_string(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Unreadable {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
                .into())
            }
        };

        let config: Self = serde_json::from_str(&data).map_err(|e| ConfigError::Malformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "page_size_options".to_string(),
                message: "sizes must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn effective_columns(&self) -> Vec<Column> {
        self.columns
            .clone()
            .unwrap_or_else(|| self.locale.columns())
    }

    pub fn effective_labels(&self) -> Labels {
        self.labels.clone().unwrap_or_else(|| self.locale.labels())
    }

    pub fn export_base(&self) -> &str {
        self.export_base
            .as_deref()
            .unwrap_or_else(|| self.locale.export_base())
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(
            self.effective_columns(),
            self.effective_labels(),
            self.page_size_options.clone(),
        )
    }

    pub fn initial_state(&self) -> ViewState {
        ViewState::new(self.page_size)
    }

    pub fn loader(&self) -> Loader {
        Loader::from_locations(&self.sources, self.fallback)
    }

    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            hide_delay: Duration::from_millis(self.preview_hide_delay_ms),
            ..ControllerOptions::default()
        }
    }
}
