//! Error types for Bookview Core

use thiserror::Error;

/// Result type alias using BookviewError
pub type Result<T> = std::result::Result<T, BookviewError>;

/// Top-level error type for all Bookview operations
#[derive(Debug, Error)]
pub enum BookviewError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while fetching or parsing a single candidate source.
///
/// The loader never surfaces these to callers; they are logged and the next
/// candidate is tried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read {location}: {message}")]
    Unreadable { location: String, message: String },

    #[error("HTTP request to {location} failed: {message}")]
    Http { location: String, message: String },

    #[error("{location} answered with status {status}")]
    Status { location: String, status: u16 },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unexpected payload shape: {0}")]
    UnexpectedShape(String),
}

/// Errors that occur while exporting a view
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Write failed: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors that occur while loading the viewer configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Malformed config file {path}: {message}")]
    Malformed { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
