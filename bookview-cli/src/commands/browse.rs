//! Browse command implementation
//!
//! Reads one command per line from stdin and feeds it to the controller.
//! Debounced searches and delayed preview hides fire from the same loop.

use super::{open, text, ViewArgs};
use anyhow::Result;
use bookview_core::preview::{Anchor, Rect};
use bookview_core::{Controller, UiEvent, Update};
use std::path::Path;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Terminal rows are laid out as if in a fixed-height table
const ROW_TOP: f64 = 120.0;
const ROW_HEIGHT: f64 = 28.0;
const ROW_WIDTH: f64 = 860.0;
const ROW_LEFT: f64 = 24.0;

const HELP: &str = "\
/<text>     search (debounced); '/' alone clears
esc         clear the search at once
sort <col>  sort by column; repeat to reverse
n, next     next page
p, prev     previous page
page <n>    go to page
size <n>    rows per page
hover <r>   hover row r of the current page (1-based)
leave       leave the hovered row
lock        move onto the preview panel
unlock      leave the preview panel
scroll      scroll the page
q, quit     exit";

#[derive(Debug, PartialEq)]
enum Command {
    Event(UiEvent),
    Help,
    Quit,
}

fn row_anchor(row: usize) -> Anchor {
    Anchor::Row(Rect {
        left: ROW_LEFT,
        top: ROW_TOP + row as f64 * ROW_HEIGHT,
        width: ROW_WIDTH,
        height: ROW_HEIGHT,
    })
}

fn number(arg: Option<&str>, what: &str) -> Result<usize, String> {
    let arg = arg.ok_or_else(|| format!("{} requires a number", what))?;
    arg.parse()
        .map_err(|_| format!("'{}' is not a valid number", arg))
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(text) = line.strip_prefix('/') {
        return Ok(Command::Event(UiEvent::SearchInput(text.to_string())));
    }

    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.next();

    let event = match word {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "help" | "?" => return Ok(Command::Help),
        "esc" => UiEvent::SearchEscape,
        "sort" => UiEvent::HeaderClick(
            arg.ok_or_else(|| "sort requires a column".to_string())?
                .to_string(),
        ),
        "n" | "next" => UiEvent::NextPage,
        "p" | "prev" => UiEvent::PreviousPage,
        "page" => UiEvent::GoToPage(number(arg, "page")?),
        "size" => {
            let size = number(arg, "size")?;
            if size == 0 {
                return Err("page size must be at least 1".to_string());
            }
            UiEvent::PageSize(size)
        }
        "hover" => {
            let row = number(arg, "hover")?;
            if row == 0 {
                return Err("rows are numbered from 1".to_string());
            }
            UiEvent::RowEnter {
                row: row - 1,
                anchor: row_anchor(row - 1),
            }
        }
        "leave" => UiEvent::RowLeave,
        "lock" => UiEvent::PreviewEnter,
        "unlock" => UiEvent::PreviewLeave,
        "scroll" => UiEvent::Scroll,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };
    Ok(Command::Event(event))
}

fn show(controller: &Controller, update: Update) {
    match update {
        Update::Unchanged => {}
        Update::Redraw(frame) => print!(
            "{}",
            text::page_text(
                controller.records(),
                controller.state(),
                controller.renderer(),
                &frame
            )
        ),
        Update::Preview => println!("{}", text::preview_text(controller.preview())),
    }
}

async fn wait_until(deadline: Instant) {
    tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await
}

/// Browse the catalog interactively
pub async fn browse(config: Option<&Path>, args: &ViewArgs) -> Result<()> {
    let session = open(config, args).await?;
    let renderer = session.config.renderer();
    let options = session.config.controller_options();
    let mut controller = Controller::new(session.records, renderer, session.state, options);

    let frame = controller.frame();
    show(&controller, Update::Redraw(frame));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut quit = false;

    loop {
        let deadline = controller.next_deadline();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Command::Quit) => {
                        quit = true;
                        break;
                    }
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Event(event)) => {
                        let update = controller.handle(event, Instant::now());
                        show(&controller, update);
                    }
                    Err(message) => println!("{}", message),
                }
            }
            _ = wait_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                for update in controller.tick(Instant::now()) {
                    show(&controller, update);
                }
            }
        }
    }

    // Input ended: let pending timers fire so piped input sees its results
    if !quit {
        while let Some(deadline) = controller.next_deadline() {
            wait_until(deadline).await;
            for update in controller.tick(Instant::now()) {
                show(&controller, update);
            }
        }
    }

    Ok(())
}
