//! Output formatting utilities.

use colored::Colorize;
use fundlens_portfolio::ScoreBand;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints typed rows as a table or CSV, or the rows themselves as JSON.
pub fn print_records<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("No results.");
                return Ok(());
            }
            let table = Table::new(data)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{table}");
        }
        OutputFormat::Json => print_json(data)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for item in data {
                wtr.serialize(item)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Prints a grid whose columns are only known at runtime.
///
/// JSON is not handled here; callers serialize their domain types instead.
pub fn print_grid(header: &[String], rows: &[Vec<String>], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.write_record(header)?;
            for row in rows {
                wtr.write_record(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Table | OutputFormat::Json => {
            if rows.is_empty() {
                println!("No results.");
                return Ok(());
            }
            let mut builder = Builder::default();
            builder.push_record(header.iter().cloned());
            for row in rows {
                builder.push_record(row.iter().cloned());
            }
            let table = builder
                .build()
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            println!("{table}");
        }
    }
    Ok(())
}

/// Formats an optional number; `-` when absent or NaN.
pub fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) if !v.is_nan() => format!("{v:.decimals$}"),
        _ => "-".to_string(),
    }
}

/// Formats an optional number for CSV; empty when absent.
pub fn format_csv_value(value: Option<f64>) -> String {
    value.filter(|v| !v.is_nan()).map(|v| v.to_string()).unwrap_or_default()
}

/// Band name, coloured for terminals.
pub fn format_band(band: Option<ScoreBand>) -> String {
    match band {
        Some(ScoreBand::Strong) => ScoreBand::Strong.name().green().to_string(),
        Some(ScoreBand::Moderate) => ScoreBand::Moderate.name().yellow().to_string(),
        Some(ScoreBand::Weak) => ScoreBand::Weak.name().red().to_string(),
        None => "-".to_string(),
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
