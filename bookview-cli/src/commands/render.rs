//! Render command implementation

use super::{open, ViewArgs};
use anyhow::{Context, Result};
use std::path::Path;

/// Render the current view as a standalone HTML page
pub async fn render(config: Option<&Path>, args: &ViewArgs, output: Option<&Path>) -> Result<()> {
    let mut session = open(config, args).await?;
    let renderer = session.config.renderer();
    let frame = renderer.frame(&session.records, &mut session.state);
    let html = renderer.page_html(&frame, &session.state);

    match output {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Rendered {} rows to {}", frame.rows.len(), path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}
