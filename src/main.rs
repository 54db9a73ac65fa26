//! Insight Map - Main Entry Point
//!
//! This is the main entry point for the insight-map command line tool.
//! The actual implementation is in the `insight_map` library.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use insight_map::{Config, InsightMapHandler};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Insight Map - turn interview transcripts into signals, insights, opportunities and ideas
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (default: insight-map.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding stored insights (overrides the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract insights from a transcript file ("-" reads stdin) and replace the board
    Extract {
        /// Transcript file, or "-" for stdin
        transcript: String,
    },
    /// Show the board
    Show {
        /// Only show this category (signals, insights, opportunities, ideas)
        #[arg(long)]
        category: Option<String>,
    },
    /// Change the text of an item
    Edit {
        category: String,
        id: String,
        text: String,
    },
    /// Delete an item
    Delete { category: String, id: String },
    /// Set the OKRs an insight or opportunity impacts (none = unlink all)
    Link {
        category: String,
        id: String,
        okr_ids: Vec<String>,
    },
    /// Set the tags of an item (none = cleared)
    Tag {
        category: String,
        id: String,
        tags: Vec<String>,
        /// Forget the item's tags entirely instead of clearing them
        #[arg(long, conflicts_with = "tags")]
        untag: bool,
    },
    /// List OKRs and the items mapped to them
    Okrs,
    /// Write the board as a Markdown report
    Export {
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Discard the board and start over
    Clear,
}

fn read_transcript(source: &str) -> Result<String> {
    if source == "-" {
        let mut transcript = String::new();
        std::io::stdin()
            .read_to_string(&mut transcript)
            .context("Failed to read transcript from stdin")?;
        Ok(transcript)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read transcript file '{}'", source))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("insight_map=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    let handler = InsightMapHandler::from_config(&config)?;

    let output = match args.command {
        Command::Extract { transcript } => {
            let transcript = read_transcript(&transcript)?;
            handler.handle_extract(&transcript).await?
        }
        Command::Show { category } => handler.handle_show(category).await?,
        Command::Edit { category, id, text } => handler.handle_edit(&category, &id, &text).await?,
        Command::Delete { category, id } => handler.handle_delete(&category, &id).await?,
        Command::Link {
            category,
            id,
            okr_ids,
        } => handler.handle_link(&category, &id, &okr_ids).await?,
        Command::Tag {
            category,
            id,
            tags,
            untag,
        } => handler.handle_tag(&category, &id, &tags, untag).await?,
        Command::Okrs => handler.handle_okrs().await?,
        Command::Export { output } => {
            let report = handler.handle_export().await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, report)
                        .with_context(|| format!("Failed to write report to '{}'", path.display()))?;
                    format!("Report written to {}", path.display())
                }
                None => report,
            }
        }
        Command::Clear => handler.handle_clear().await?,
    };

    println!("{}", output);
    Ok(())
}
