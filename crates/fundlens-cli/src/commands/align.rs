//! Align command implementation.
//!
//! Puts several NAV histories on one date index, each expressed as
//! percentage return from its first observation in the window.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use fundlens_core::{Date, RangeToken};
use fundlens_performance::{series_from_records, AlignedTable, SeriesAligner, SeriesRecord};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, parse_range, read_json};
use crate::config::FileConfig;
use crate::output::{
    format_csv_value, format_value, print_grid, print_header, print_json, print_records,
};

/// Arguments for the align command.
#[derive(Args, Debug)]
pub struct AlignArgs {
    /// JSON file with series records ({"name", "points": [{"date", "value"}]})
    #[arg(short, long)]
    pub input: PathBuf,

    /// Lookback range: 1M, 6M, 1Y, 3Y, 5Y or ALL
    #[arg(short, long, default_value = "1Y", value_parser = parse_range)]
    pub range: RangeToken,

    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub as_of: Option<Date>,

    /// Show each series' return over the window instead of the full table
    #[arg(long)]
    pub returns: bool,
}

/// Period return row for display.
#[derive(Debug, Serialize, Tabled)]
pub struct ReturnRow {
    #[tabled(rename = "Series")]
    pub series: String,
    #[tabled(rename = "Start")]
    pub start: String,
    #[tabled(rename = "End")]
    pub end: String,
    #[tabled(rename = "Return %")]
    pub return_pct: String,
}

/// Execute the align command.
pub fn execute(args: AlignArgs, config: &FileConfig, format: OutputFormat) -> Result<()> {
    let records: Vec<SeriesRecord> = read_json(&args.input)?;
    let series = series_from_records(records)?;
    let now = args.as_of.unwrap_or_else(Date::today);
    info!(series = series.len(), range = %args.range, %now, "aligning series");

    let table = SeriesAligner::new(config.align.clone()).align(&series, args.range, now);

    if format == OutputFormat::Table {
        print_header(&format!(
            "Returns since {} ({}, as of {})",
            args.range.cutoff(now),
            args.range,
            now
        ));
    }

    if args.returns {
        print_returns(&table, format)
    } else {
        print_table(&table, config.align.decimal_places as usize, format)
    }
}

fn print_table(table: &AlignedTable, decimals: usize, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(table);
    }

    let header: Vec<String> = std::iter::once("date".to_string())
        .chain(table.series().iter().cloned())
        .collect();
    let rows: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            std::iter::once(row.date_key())
                .chain(row.values.iter().map(|v| match format {
                    OutputFormat::Csv => format_csv_value(*v),
                    _ => format_value(*v, decimals),
                }))
                .collect()
        })
        .collect();

    print_grid(&header, &rows, format)
}

fn print_returns(table: &AlignedTable, format: OutputFormat) -> Result<()> {
    let returns = table.period_returns();
    if format == OutputFormat::Json {
        return print_json(&returns);
    }

    let rows: Vec<ReturnRow> = returns
        .into_iter()
        .map(|r| ReturnRow {
            series: r.series,
            start: r.start.map(|d| d.to_string()).unwrap_or_default(),
            end: r.end.map(|d| d.to_string()).unwrap_or_default(),
            return_pct: match format {
                OutputFormat::Csv => format_csv_value(r.return_pct),
                _ => format_value(r.return_pct, 2),
            },
        })
        .collect();

    print_records(&rows, format)
}
