//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{AlignArgs, HoldingsArgs, ScoreArgs};

/// Fundlens - Mutual fund performance and portfolio scoring
#[derive(Parser)]
#[command(name = "fundlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// TOML configuration file with [align] and [scoring] tables
    #[arg(short, long, global = true, env = "FUNDLENS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Align NAV histories and show percentage returns from a common start
    Align(AlignArgs),

    /// Score a portfolio's fundamentals weighted by allocation
    Score(ScoreArgs),

    /// Summarize a fund's holdings
    Holdings(HoldingsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}
