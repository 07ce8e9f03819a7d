//! Candidate sources and the catalog loader
//!
//! The loader walks an ordered list of candidate locations and accepts the
//! first one that yields a usable payload. Failures are never surfaced: they
//! are logged and the next candidate is tried.

mod http;
mod local;

pub use http::HttpSource;
pub use local::LocalSource;

use crate::error::LoadError;
use crate::types::{demo_books, BookRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default candidate locations, tried in order
pub const DEFAULT_SOURCES: [&str; 2] = ["./books.json", "./data/books.json"];

/// A location the catalog may be fetched from
#[async_trait]
pub trait Source: Send + Sync {
    /// Fetch the raw payload
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, used in logs and load outcomes
    fn location(&self) -> &str;
}

/// Get the appropriate source for a location string
pub fn source_for_location(location: &str) -> Box<dyn Source> {
    let lower = location.trim().to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpSource::new(location.trim()))
    } else {
        Box::new(LocalSource::new(location))
    }
}

/// Parse a payload: either a top-level array of records or an object with a
/// `books` array. Array elements that are not objects are skipped.
pub fn parse_payload(bytes: &[u8]) -> Result<Vec<BookRecord>, LoadError> {
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| LoadError::InvalidJson(e.to_string()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => match map.remove("books") {
            Some(serde_json::Value::Array(items)) => items,
            Some(_) => {
                return Err(LoadError::UnexpectedShape(
                    "`books` is not an array".to_string(),
                ))
            }
            None => {
                return Err(LoadError::UnexpectedShape(
                    "object without a `books` field".to_string(),
                ))
            }
        },
        other => {
            return Err(LoadError::UnexpectedShape(format!(
                "expected an array or an object, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = items.len();
    let records: Vec<BookRecord> = items.into_iter().filter_map(BookRecord::from_json).collect();
    if records.len() < total {
        tracing::debug!("Skipped {} non-object entries", total - records.len());
    }
    Ok(records)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// What to do when every candidate fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Start with an empty catalog
    Empty,
    /// Start with the fixed demo catalog and log a warning
    #[default]
    Demo,
}

/// Where the loaded records came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum LoadOrigin {
    Source(String),
    Demo,
    Empty,
}

/// Result of a load: always a record set, never an error
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub records: Vec<BookRecord>,
    pub origin: LoadOrigin,
}

/// Sequential loader over an ordered list of candidate sources
pub struct Loader {
    sources: Vec<Box<dyn Source>>,
    fallback: Fallback,
}

impl Loader {
    /// Create a loader over explicit sources
    pub fn new(sources: Vec<Box<dyn Source>>, fallback: Fallback) -> Self {
        Self { sources, fallback }
    }

    /// Create a loader from location strings
    pub fn from_locations<I, S>(locations: I, fallback: Fallback) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sources = locations
            .into_iter()
            .map(|l| source_for_location(l.as_ref()))
            .collect();
        Self::new(sources, fallback)
    }

    /// Try each candidate in order; the first usable payload wins
    pub async fn load(&self) -> LoadOutcome {
        for source in &self.sources {
            let attempt = match source.fetch().await {
                Ok(bytes) => parse_payload(&bytes),
                Err(e) => Err(e),
            };

            match attempt {
                Ok(records) => {
                    tracing::info!(
                        "Loaded {} records from {}",
                        records.len(),
                        source.location()
                    );
                    return LoadOutcome {
                        records,
                        origin: LoadOrigin::Source(source.location().to_string()),
                    };
                }
                Err(e) => {
                    tracing::debug!("Source {} unavailable: {}", source.location(), e);
                }
            }
        }

        match self.fallback {
            Fallback::Demo => {
                tracing::warn!(
                    "No data source reachable ({} tried), using demo data",
                    self.sources.len()
                );
                LoadOutcome {
                    records: demo_books(),
                    origin: LoadOrigin::Demo,
                }
            }
            Fallback::Empty => LoadOutcome {
                records: Vec::new(),
                origin: LoadOrigin::Empty,
            },
        }
    }
}
