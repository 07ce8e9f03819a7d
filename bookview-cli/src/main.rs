//! Bookview CLI - browse, render and export a book catalog

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::ViewArgs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookview")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewer configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of the catalog
    View {
        #[command(flatten)]
        view: ViewArgs,

        /// Output the rendered frame as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the current view as a standalone HTML page
    Render {
        #[command(flatten)]
        view: ViewArgs,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the filtered and sorted records
    Export {
        #[command(flatten)]
        view: ViewArgs,

        /// Export format (csv, json, copy, print)
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file or directory (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Browse the catalog interactively
    Browse {
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose {
        "bookview_cli=debug,bookview_core=debug"
    } else {
        "bookview_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::View { view, json } => commands::view(config, &view, json).await,

        Commands::Render { view, output } => {
            commands::render(config, &view, output.as_deref()).await
        }

        Commands::Export {
            view,
            format,
            output,
        } => commands::export(config, &view, &format, output.as_deref()).await,

        Commands::Browse { view } => commands::browse(config, &view).await,
    }
}
