pub mod commands;
pub mod output;

use crate::config::{DEFAULT_CANCEL_TTL, DEFAULT_FLUSH_BATCH_SIZE};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "formula-styler",
    version,
    about = "Find formula cells in a workbook and apply batch formatting to them"
)]
pub struct Cli {
    #[arg(long, global = true)]
    pub compact: bool,

    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply a style delta to every formula cell of one sheet and save.
    Format {
        file: PathBuf,

        /// Target sheet; defaults to the first sheet in the workbook.
        #[arg(long)]
        sheet: Option<String>,

        /// Style changes as JSON, e.g. '{"bold": true, "bg_color": "#FFFF00"}'.
        #[arg(long)]
        styles: String,

        /// Host flush cadence in mutated cells.
        #[arg(long, default_value_t = DEFAULT_FLUSH_BATCH_SIZE)]
        flush_batch_size: usize,

        /// How long a Ctrl-C cancel request stays armed, in seconds.
        #[arg(long, default_value_t = DEFAULT_CANCEL_TTL.as_secs())]
        cancel_ttl_secs: u64,
    },
    /// List formula cells of one sheet as compressed A1 ranges.
    Scan {
        file: PathBuf,

        #[arg(long)]
        sheet: Option<String>,

        /// Cap on reported ranges.
        #[arg(long)]
        max_ranges: Option<usize>,
    },
}

pub async fn run_command(command: Commands) -> Result<Value> {
    match command {
        Commands::Format {
            file,
            sheet,
            styles,
            flush_batch_size,
            cancel_ttl_secs,
        } => commands::format::run(file, sheet, styles, flush_batch_size, cancel_ttl_secs).await,
        Commands::Scan {
            file,
            sheet,
            max_ranges,
        } => commands::scan::run(file, sheet, max_ranges).await,
    }
}
