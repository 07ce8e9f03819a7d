//! Tab-separated text for the clipboard

use super::csv::write_rows;
use super::{ExportInput, Exporter};
use crate::error::Result;
use std::io::Write;

pub struct CopyExporter;

/// Pasted rows must stay on one line per record
fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

impl Exporter for CopyExporter {
    fn export(&self, input: &ExportInput<'_>, writer: &mut dyn Write) -> Result<()> {
        let columns = input.effective_columns();
        let mut wtr = ::csv::WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(::csv::QuoteStyle::Never)
            .from_writer(writer);
        write_rows(&mut wtr, input, &columns, tsv_field)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Copy"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }

    fn mime_type(&self) -> &str {
        "text/tab-separated-values"
    }
}
