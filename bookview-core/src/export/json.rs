//! JSON export of the full records

use super::{ExportInput, Exporter};
use crate::error::{ExportError, Result};
use std::io::Write;

pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, input: &ExportInput<'_>, writer: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, input.records)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;
        writeln!(writer).map_err(ExportError::from)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }
}
