//! Export command implementation

use super::{open, ViewArgs};
use anyhow::{Context, Result};
use bookview_core::export::{exporter_for_format, today_stem, ExportInput};
use bookview_core::{project, ExportError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export every record passing the filter, in sort order
pub async fn export(
    config: Option<&Path>,
    args: &ViewArgs,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let exporter = exporter_for_format(format)
        .ok_or_else(|| ExportError::UnknownFormat(format.to_string()))?;

    let session = open(config, args).await?;
    let renderer = session.config.renderer();
    let projection = project(&session.records, &session.state, renderer.columns());
    let stem = today_stem(session.config.export_base());

    let input = ExportInput {
        records: &projection.ordered,
        columns: renderer.columns(),
        labels: renderer.labels(),
        title: &stem,
    };

    match output {
        Some(path) => {
            let target: PathBuf = if path.is_dir() {
                path.join(format!("{}.{}", stem, exporter.file_extension()))
            } else {
                path.to_path_buf()
            };

            let file = File::create(&target)
                .with_context(|| format!("Failed to create output file: {}", target.display()))?;
            let mut writer = BufWriter::new(file);
            exporter
                .export(&input, &mut writer)
                .with_context(|| format!("Failed to export {}", exporter.format_name()))?;
            writer.flush()?;

            tracing::info!(
                "Exported {} records as {} to {}",
                projection.matched(),
                exporter.format_name(),
                target.display()
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            exporter
                .export(&input, &mut writer)
                .with_context(|| format!("Failed to export {}", exporter.format_name()))?;
            writer.flush()?;
        }
    }

    Ok(())
}
