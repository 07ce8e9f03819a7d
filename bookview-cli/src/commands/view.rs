//! View command implementation

use super::{open, text, ViewArgs};
use anyhow::Result;
use bookview_core::source::LoadOrigin;
use bookview_core::{ViewFrame, ViewState};
use serde::Serialize;
use std::path::Path;

/// View output for `--json`
#[derive(Serialize)]
struct ViewOutput<'a> {
    origin: &'a LoadOrigin,
    state: &'a ViewState,
    frame: &'a ViewFrame,
}

/// Show one page of the catalog
pub async fn view(config: Option<&Path>, args: &ViewArgs, json: bool) -> Result<()> {
    let mut session = open(config, args).await?;
    let renderer = session.config.renderer();
    let frame = renderer.frame(&session.records, &mut session.state);

    if json {
        let output = ViewOutput {
            origin: &session.origin,
            state: &session.state,
            frame: &frame,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!(
            "{}",
            text::page_text(&session.records, &session.state, &renderer, &frame)
        );
    }

    Ok(())
}
