//! Integration tests for fundlens-portfolio.
//!
//! These tests run the record -> holdings/rows -> score pipeline on a
//! realistic fund portfolio.

use approx::assert_relative_eq;
use fundlens_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn holdings_payload() -> &'static str {
    r#"[
        {"isin": "INE002A01018", "name": "Reliance Industries", "perc": 9.0, "sector": "Energy"},
        {"isin": "INE040A01034", "name": "HDFC Bank", "perc": "8.0", "sector": "Financials"},
        {"isin": "INE009A01021", "name": "Infosys", "perc": 6.0, "sector": "IT"},
        {"isin": "INE467B01029", "name": "TCS", "perc": 4.0, "sector": "IT"},
        {"isin": "INE090A01021", "name": "ICICI Bank", "perc": 3.0, "sector": "Financials"},
        {"isin": "CASH", "name": "Net Current Assets", "perc": -0.5}
    ]"#
}

fn metrics_payload() -> &'static str {
    r#"[
        {"ISIN": "INE002A01018", "Symbol": "RELIANCE", "PE": 30, "ROCE": 12, "ROE": 12,
         "PromHold": 50, "Salesvar": 8, "ProfitVar": 8, "OPM": 12, "CROIC": 12},
        {"ISIN": "INE040A01034", "Symbol": "HDFCBANK", "PE": 15, "ROCE": "-", "ROE": 50,
         "PromHold": 0, "Salesvar": 50, "ProfitVar": 29, "OPM": 50, "CROIC": null},
        {"ISIN": "INE009A01021", "Symbol": "INFY", "PE": 100, "ROCE": 50, "ROE": 31,
         "PromHold": 100, "Salesvar": 4, "ProfitVar": 0, "OPM": 31, "CROIC": 50},
        {"ISIN": "INE467B01029", "Symbol": "TCS", "PE": 65, "ROCE": 50, "ROE": 50,
         "PromHold": 75, "Salesvar": 29, "ProfitVar": 50, "OPM": 31, "CROIC": 50},
        {"ISIN": "INE090A01021", "PE": 0, "ROCE": 6, "ROE": 6,
         "PromHold": 25, "Salesvar": 0, "ProfitVar": 0, "OPM": 6, "CROIC": 6},
        {"ISIN": "INE000UNHELD", "Symbol": "UNHELD", "PE": 0, "ROCE": 50}
    ]"#
}

fn load() -> (Vec<MetricRow>, Vec<Holding>) {
    let rows: Vec<MetricRecord> = serde_json::from_str(metrics_payload()).unwrap();
    let holdings: Vec<HoldingRecord> = serde_json::from_str(holdings_payload()).unwrap();
    (
        metric_rows_from_records(rows).unwrap(),
        holdings_from_records(holdings).unwrap(),
    )
}

// =============================================================================
// CONCRETE SCENARIOS
// =============================================================================

#[test]
fn test_single_holding_at_curve_knot() {
    let rows = vec![MetricRow::new("A").with_value(Metric::PriceEarnings, 30.0)];
    let holdings = vec![Holding::new("A", 10.0)];

    let score = MetricScorer::default().score(&rows, &holdings);
    assert_relative_eq!(score.get(Metric::PriceEarnings).unwrap(), 0.5);
}

#[test]
fn test_two_holdings_weighted() {
    let rows = vec![
        MetricRow::new("A").with_value(Metric::ReturnOnCapitalEmployed, 50.0),
        MetricRow::new("B").with_value(Metric::ReturnOnCapitalEmployed, 12.0),
    ];
    let holdings = vec![Holding::new("A", 60.0), Holding::new("B", 40.0)];

    let score = MetricScorer::default().score(&rows, &holdings);
    assert_relative_eq!(score.get(Metric::ReturnOnCapitalEmployed).unwrap(), 0.8);
}

#[test]
fn test_zero_total_allocation() {
    let rows = vec![MetricRow::new("A").with_value(Metric::ReturnOnEquity, 40.0)];
    let holdings = vec![Holding::new("A", 0.0), Holding::new("B", 0.0)];

    let score = MetricScorer::default().score(&rows, &holdings);
    for metric in Metric::ALL {
        assert_eq!(score.get(metric), None);
    }
    assert_eq!(score.overall, None);

    let json = serde_json::to_value(&score).unwrap();
    assert!(json["PE"].is_null());
    assert!(json["overall"].is_null());
}

// =============================================================================
// RECORD PIPELINE
// =============================================================================

#[test]
fn test_fund_portfolio_scores() {
    let (rows, holdings) = load();
    let score = MetricScorer::default().score(&rows, &holdings);

    // Weights: RELIANCE 9, HDFCBANK 8, INFY 6, TCS 4, ICICI 3; cash counts as 0.
    let total = 30.0;

    // PE scores: 0.5, 0.75, 0.0, 0.25, 1.0
    let pe = (9.0 * 0.5 + 8.0 * 0.75 + 6.0 * 0.0 + 4.0 * 0.25 + 3.0 * 1.0) / total;
    assert_relative_eq!(score.get(Metric::PriceEarnings).unwrap(), pe, epsilon = 1e-12);

    // HDFCBANK's ROCE is "-": present but not numeric, so neutral.
    let roce = (9.0 * 0.5 + 8.0 * 0.5 + 6.0 * 1.0 + 4.0 * 1.0 + 3.0 * 0.25) / total;
    assert_relative_eq!(
        score.get(Metric::ReturnOnCapitalEmployed).unwrap(),
        roce,
        epsilon = 1e-12
    );

    // HDFCBANK's CROIC is null: no contribution at all.
    let croic = (9.0 * 0.5 + 6.0 * 1.0 + 4.0 * 1.0 + 3.0 * 0.25) / total;
    assert_relative_eq!(
        score.get(Metric::CashReturnOnInvestedCapital).unwrap(),
        croic,
        epsilon = 1e-12
    );

    let mean = score.per_metric.values().flatten().sum::<f64>() / Metric::ALL.len() as f64;
    assert_relative_eq!(score.overall.unwrap(), mean, epsilon = 1e-12);
    assert!(score.band(&BandThresholds::default()).is_some());
}

#[test]
fn test_fund_portfolio_heatmap() {
    let (rows, _) = load();
    let matrix = score_matrix(&rows, ScoreTable::standard());

    assert_eq!(matrix.len(), 6);
    assert_eq!(matrix[0].label, "RELIANCE");
    assert_eq!(matrix[4].label, "N/A");

    let hdfc = &matrix[1];
    let roce = hdfc.cell(Metric::ReturnOnCapitalEmployed).unwrap();
    assert!(roce.raw.unwrap().is_nan());
    assert_eq!(roce.score, 0.5);
    let croic = hdfc.cell(Metric::CashReturnOnInvestedCapital).unwrap();
    assert_eq!(croic.raw, None);
    assert_eq!(croic.score, 0.0);
}

#[test]
fn test_fund_portfolio_summary() {
    let (_, holdings) = load();
    let summary = summarize_holdings(&holdings);

    // Financials (8 + 3) beats IT (6 + 4) and Energy (9).
    assert_eq!(summary.top_sector.as_deref(), Some("Financials"));
    assert_eq!(summary.asset_count, 5);
    assert_eq!(summary.holdings[0].identifier, "INE002A01018");
    assert_eq!(summary.holdings[4].identifier, "INE090A01021");

    let sectors = sector_allocation(&holdings);
    assert_relative_eq!(sectors.get("IT").unwrap().allocation_pct, 10.0);
    assert_relative_eq!(sectors.unclassified_pct, 0.0);
}

// =============================================================================
// MISSING METRIC POLICY
// =============================================================================

#[test]
fn test_metrics_without_contributors_count_as_zero_by_default() {
    let rows = vec![
        MetricRow::new("A")
            .with_value(Metric::PriceEarnings, 30.0)
            .with_value(Metric::ReturnOnEquity, 50.0),
    ];
    let holdings = vec![Holding::new("A", 5.0)];

    let score = MetricScorer::default().score(&rows, &holdings);

    assert_eq!(score.get(Metric::PromoterHolding), Some(0.0));
    assert_relative_eq!(score.overall.unwrap(), (0.5 + 1.0) / 8.0);
}

#[test]
fn test_metrics_without_contributors_excluded_when_configured() {
    let rows = vec![
        MetricRow::new("A")
            .with_value(Metric::PriceEarnings, 30.0)
            .with_value(Metric::ReturnOnEquity, 50.0),
    ];
    let holdings = vec![Holding::new("A", 5.0)];
    let config = ScoringConfig::new().with_missing_metric_policy(MissingMetricPolicy::Exclude);

    let score = MetricScorer::new(config).score(&rows, &holdings);

    assert_eq!(score.get(Metric::PromoterHolding), None);
    assert_relative_eq!(score.overall.unwrap(), 0.75);
    assert_eq!(score.band(&BandThresholds::default()), Some(ScoreBand::Strong));
}

#[test]
fn test_parallel_config_matches_sequential() {
    let rows: Vec<MetricRow> = (0..500)
        .map(|i| {
            MetricRow::new(format!("ID{i}"))
                .with_value(Metric::PriceEarnings, f64::from(i % 120))
                .with_value(Metric::OperatingMargin, f64::from(i % 60))
        })
        .collect();
    let holdings: Vec<Holding> = (0..500)
        .map(|i| Holding::new(format!("ID{i}"), f64::from(i % 7) + 0.5))
        .collect();

    let sequential = MetricScorer::new(ScoringConfig::sequential()).score(&rows, &holdings);
    let parallel =
        MetricScorer::new(ScoringConfig::new().with_threshold(10)).score(&rows, &holdings);

    for metric in Metric::ALL {
        match (sequential.get(metric), parallel.get(metric)) {
            (Some(a), Some(b)) => assert_relative_eq!(a, b, epsilon = 1e-12),
            (a, b) => assert_eq!(a, b),
        }
    }
}
