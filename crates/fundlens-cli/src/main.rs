//! Fundlens CLI - Command-line interface for fund analytics.
//!
//! Reads already-fetched JSON records from files and prints the results.
//!
//! # Usage
//!
//! ```bash
//! # Compare NAV histories over the last year
//! fundlens align --input navs.json --range 1Y
//!
//! # Score a portfolio against its holdings' fundamentals
//! fundlens score --metrics fundamentals.json --holdings holdings.json
//!
//! # Summarize holdings as JSON
//! fundlens --format json holdings --input holdings.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::FileConfig;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,fundlens=debug"
    } else {
        "warn,fundlens=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = FileConfig::load(cli.config.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Align(args) => commands::align::execute(args, &config, format)?,
        Commands::Score(args) => commands::score::execute(args, &config, format)?,
        Commands::Holdings(args) => commands::holdings::execute(args, format)?,
    }

    Ok(())
}
