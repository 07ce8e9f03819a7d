//! Exporters for the filtered and sorted record set

mod copy;
mod csv;
mod json;
mod print;

pub use copy::CopyExporter;
pub use csv::CsvExporter;
pub use json::JsonExporter;
pub use print::PrintExporter;

use crate::error::Result;
use crate::render::Labels;
use crate::types::BookRecord;
use crate::view::{columns::undeclared_columns, Column};
use chrono::NaiveDate;
use std::io::Write;

/// What an export is made of
pub struct ExportInput<'a> {
    /// Records in display order
    pub records: &'a [&'a BookRecord],
    /// Declared columns; empty exports every field
    pub columns: &'a [Column],
    pub labels: &'a Labels,
    /// Document title, also the file-name stem
    pub title: &'a str,
}

impl ExportInput<'_> {
    /// Declared columns, or one column per field seen in the exported records
    pub fn effective_columns(&self) -> Vec<Column> {
        if !self.columns.is_empty() {
            return self.columns.to_vec();
        }
        undeclared_columns(self.records.iter().copied())
    }
}

/// Trait for writing a record set in an export format
pub trait Exporter: Send + Sync {
    /// Write `input` to `writer`; failures come back as [`crate::BookviewError::Export`]
    fn export(&self, input: &ExportInput<'_>, writer: &mut dyn Write) -> Result<()>;

    /// Format name (e.g., "CSV")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;
}

/// Get an exporter by format name
pub fn exporter_for_format(format: &str) -> Option<Box<dyn Exporter>> {
    match format.to_lowercase().as_str() {
        "csv" => Some(Box::new(CsvExporter)),
        "json" => Some(Box::new(JsonExporter)),
        "copy" | "tsv" | "clipboard" => Some(Box::new(CopyExporter)),
        "print" | "html" => Some(Box::new(PrintExporter)),
        _ => None,
    }
}

/// `<base>_<YYYY-MM-DD>`
pub fn export_stem(base: &str, date: NaiveDate) -> String {
    format!("{}_{}", base, date.format("%Y-%m-%d"))
}

/// Export stem for today's local date
pub fn today_stem(base: &str) -> String {
    export_stem(base, chrono::Local::now().date_naive())
}
