//! Holdings command implementation.
//!
//! Lists holdings largest first with the top sector and asset count.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use fundlens_portfolio::{
    holdings_from_records, sector_allocation, summarize_holdings, HoldingRecord,
};

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::output::{print_header, print_json, print_records, KeyValue};

/// Arguments for the holdings command.
#[derive(Args, Debug)]
pub struct HoldingsArgs {
    /// JSON file with the fund's holdings
    #[arg(short, long)]
    pub input: PathBuf,

    /// Show allocation by sector instead of individual holdings
    #[arg(long)]
    pub sectors: bool,
}

/// Holding row for display.
#[derive(Debug, Serialize, Tabled)]
pub struct HoldingRow {
    #[tabled(rename = "Identifier")]
    pub identifier: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Allocation %")]
    pub allocation_pct: f64,
}

/// Sector row for display.
#[derive(Debug, Serialize, Tabled)]
pub struct SectorRow {
    #[tabled(rename = "Sector")]
    pub sector: String,
    #[tabled(rename = "Holdings")]
    pub count: usize,
    #[tabled(rename = "Allocation %")]
    pub allocation_pct: f64,
}

/// Execute the holdings command.
pub fn execute(args: HoldingsArgs, format: OutputFormat) -> Result<()> {
    let holdings = holdings_from_records(read_json::<Vec<HoldingRecord>>(&args.input)?)?;
    info!(holdings = holdings.len(), "summarizing holdings");

    if args.sectors {
        let distribution = sector_allocation(&holdings);
        if format == OutputFormat::Json {
            return print_json(&distribution);
        }
        let rows: Vec<SectorRow> = distribution
            .sorted_by_weight()
            .into_iter()
            .map(|b| SectorRow {
                sector: b.sector.clone(),
                count: b.count,
                allocation_pct: b.allocation_pct,
            })
            .collect();
        return print_records(&rows, format);
    }

    let summary = summarize_holdings(&holdings);
    if format == OutputFormat::Json {
        return print_json(&summary);
    }

    if format == OutputFormat::Table {
        print_header("Holdings");
        print_records(
            &[
                KeyValue::new("Top sector", summary.top_sector.as_deref().unwrap_or("-")),
                KeyValue::new("Assets", summary.asset_count.to_string()),
            ],
            format,
        )?;
    }

    let rows: Vec<HoldingRow> = summary
        .holdings
        .into_iter()
        .map(|h| HoldingRow {
            sector: h.sector_name().unwrap_or_default().to_string(),
            name: h.name.unwrap_or_default(),
            identifier: h.identifier,
            allocation_pct: h.allocation_pct,
        })
        .collect();
    print_records(&rows, format)
}
