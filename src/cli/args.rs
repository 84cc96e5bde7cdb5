//! CLI argument parsing using clap

use crate::config::{ColorOption, OutputFormat};
use crate::types::View;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// jsreview CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "jsreview")]
#[command(about = "Review JavaScript source for common issues and modernization hints")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Output coloring (overrides jsreview.toml)
    #[arg(long, global = true)]
    pub color: Option<ColorOption>,

    /// Configuration file (defaults to ./jsreview.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available jsreview subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze JavaScript source and print a report
    Analyze(AnalyzeArgs),

    /// Print the built-in sample program
    Sample,

    /// List all enabled rules
    List {
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Write a default jsreview.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Arguments of `jsreview analyze`
#[derive(Args, Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalyzeArgs {
    /// File to analyze ("-" or omitted reads stdin)
    #[arg(conflicts_with = "sample")]
    pub file: Option<PathBuf>,

    /// Analyze the built-in sample program
    #[arg(long)]
    pub sample: bool,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Report sections to show
    #[arg(long)]
    pub view: Option<View>,

    /// Simulated latency before the report, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Print only the example text of suggestion N (1-indexed)
    #[arg(long, value_name = "N")]
    pub example: Option<usize>,
}
