//! CSV export

use super::{ExportInput, Exporter};
use crate::error::{ExportError, Result};
use crate::view::Column;
use std::io::Write;

pub struct CsvExporter;

/// Header row of labels, then one row per record with `cell` applied to
/// every field
pub(super) fn write_rows<W: Write>(
    wtr: &mut ::csv::Writer<W>,
    input: &ExportInput<'_>,
    columns: &[Column],
    cell: impl Fn(&str) -> String,
) -> std::result::Result<(), ExportError> {
    if columns.is_empty() {
        return Ok(());
    }

    wtr.write_record(columns.iter().map(|c| cell(&c.label)))?;
    for record in input.records {
        wtr.write_record(columns.iter().map(|c| cell(&c.value(record).display_text())))?;
    }
    wtr.flush()?;
    Ok(())
}

impl Exporter for CsvExporter {
    fn export(&self, input: &ExportInput<'_>, writer: &mut dyn Write) -> Result<()> {
        let columns = input.effective_columns();
        let mut wtr = ::csv::Writer::from_writer(writer);
        write_rows(&mut wtr, input, &columns, str::to_string)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "CSV"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }

    fn mime_type(&self) -> &str {
        "text/csv"
    }
}
