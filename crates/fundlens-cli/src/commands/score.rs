//! Score command implementation.
//!
//! Weights each holding's normalized fundamentals by its allocation.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use fundlens_portfolio::{
    holdings_from_records, metric_rows_from_records, HoldingRecord, Metric, MetricRecord,
    MetricRow, MetricScorer, PortfolioScore, ScoreBand, ScoringConfig,
};

use crate::cli::OutputFormat;
use crate::commands::read_json;
use crate::config::FileConfig;
use crate::output::{
    format_band, format_csv_value, format_value, print_grid, print_header, print_json,
    print_records,
};

/// Arguments for the score command.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON file with per-security metric rows
    #[arg(short, long)]
    pub metrics: PathBuf,

    /// JSON file with the fund's holdings
    #[arg(long, required_unless_present = "matrix")]
    pub holdings: Option<PathBuf>,

    /// Show the per-holding score matrix instead of the portfolio score
    #[arg(long)]
    pub matrix: bool,
}

/// One line of the portfolio score table.
#[derive(Debug, Serialize, Tabled)]
pub struct ScoreRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Description")]
    pub description: String,
    #[tabled(rename = "Score")]
    pub score: String,
    #[tabled(rename = "Band")]
    pub band: String,
}

/// Execute the score command.
pub fn execute(args: ScoreArgs, config: &FileConfig, format: OutputFormat) -> Result<()> {
    let rows = metric_rows_from_records(read_json::<Vec<MetricRecord>>(&args.metrics)?)?;
    let scorer = MetricScorer::new(config.scoring.clone());

    if args.matrix {
        info!(rows = rows.len(), "scoring metric matrix");
        return print_matrix(&scorer, &rows, format);
    }

    let path = args
        .holdings
        .ok_or_else(|| anyhow!("--holdings is required to score a portfolio"))?;
    let holdings = holdings_from_records(read_json::<Vec<HoldingRecord>>(&path)?)?;
    info!(rows = rows.len(), holdings = holdings.len(), "scoring portfolio");
    let score = scorer.score(&rows, &holdings);

    match format {
        OutputFormat::Json => print_json(&score),
        OutputFormat::Csv => {
            let header: Vec<String> = Metric::ALL
                .iter()
                .map(|m| m.name().to_string())
                .chain(std::iter::once("overall".to_string()))
                .collect();
            let values: Vec<String> = Metric::ALL
                .iter()
                .map(|&m| format_csv_value(score.get(m)))
                .chain(std::iter::once(format_csv_value(score.overall)))
                .collect();
            print_grid(&header, &[values], format)
        }
        OutputFormat::Table => {
            print_header("Portfolio fundamentals");
            print_records(&score_rows(&score, &config.scoring), format)
        }
    }
}

fn score_rows(score: &PortfolioScore, config: &ScoringConfig) -> Vec<ScoreRow> {
    let thresholds = &config.band_thresholds;
    Metric::ALL
        .iter()
        .map(|&metric| {
            let value = score.get(metric);
            ScoreRow {
                metric: metric.name().to_string(),
                description: metric.label().to_string(),
                score: format_value(value, 2),
                band: format_band(value.map(|v| ScoreBand::classify(v, thresholds))),
            }
        })
        .chain(std::iter::once(ScoreRow {
            metric: "overall".to_string(),
            description: "Mean of metric scores".to_string(),
            score: format_value(score.overall, 2),
            band: format_band(score.band(thresholds)),
        }))
        .collect()
}

fn print_matrix(scorer: &MetricScorer<'_>, rows: &[MetricRow], format: OutputFormat) -> Result<()> {
    let matrix = scorer.score_matrix(rows);
    if format == OutputFormat::Json {
        return print_json(&matrix);
    }

    let header: Vec<String> = ["identifier", "symbol"]
        .into_iter()
        .map(str::to_string)
        .chain(Metric::ALL.iter().map(|m| m.name().to_string()))
        .collect();
    let grid: Vec<Vec<String>> = matrix
        .iter()
        .map(|row| {
            [row.identifier.clone(), row.label.clone()]
                .into_iter()
                .chain(row.cells.iter().map(|cell| match format {
                    OutputFormat::Csv => format_csv_value(Some(cell.score)),
                    _ => format!("{} ({:.2})", format_value(cell.raw, 1), cell.score),
                }))
                .collect()
        })
        .collect();

    print_grid(&header, &grid, format)
}
