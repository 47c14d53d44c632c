//! Property-based tests for scoring invariants.
//!
//! These tests verify properties that must hold for any input:
//! - Normalized scores are always within [0, 1]
//! - Normalization never decreases along a higher-is-better curve
//! - Per-metric portfolio scores stay within [0, 1] when allocation is positive
//! - Scaling every allocation by a constant leaves scores unchanged

use fundlens_portfolio::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn metric_strategy() -> impl Strategy<Value = Metric> {
    prop::sample::select(Metric::ALL.to_vec())
}

fn raw_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -500.0f64..500.0,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

fn portfolio_strategy() -> impl Strategy<Value = (Vec<MetricRow>, Vec<Holding>)> {
    let row = (0usize..12, prop::collection::vec((metric_strategy(), raw_strategy()), 0..8))
        .prop_map(|(id, values)| {
            values
                .into_iter()
                .fold(MetricRow::new(format!("ID{id}")), |row, (m, v)| row.with_value(m, v))
        });
    let holding =
        (0usize..12, -5.0f64..20.0).prop_map(|(id, pct)| Holding::new(format!("ID{id}"), pct));

    (
        prop::collection::vec(row, 0..20),
        prop::collection::vec(holding, 0..20),
    )
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn property_normalized_scores_in_unit_interval(metric in metric_strategy(), raw in raw_strategy()) {
        let score = normalize(metric, raw);
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn property_normalization_monotonic(metric in metric_strategy(), a in -200.0f64..200.0, b in -200.0f64..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (s_lo, s_hi) = (normalize(metric, lo), normalize(metric, hi));

        if metric == Metric::PriceEarnings {
            prop_assert!(s_lo >= s_hi);
        } else {
            prop_assert!(s_lo <= s_hi);
        }
    }

    #[test]
    fn property_portfolio_scores_in_unit_interval((rows, holdings) in portfolio_strategy()) {
        let score = MetricScorer::default().score(&rows, &holdings);
        let total: f64 = holdings.iter().map(Holding::effective_allocation).sum();

        if total > 0.0 {
            for metric in Metric::ALL {
                let value = score.get(metric);
                prop_assert!(value.is_some());
                prop_assert!((0.0..=1.0).contains(&value.unwrap()));
            }
            prop_assert!(score.overall.is_some());
        } else {
            prop_assert!(score.is_empty());
        }
    }

    #[test]
    fn property_scaling_allocations_is_invariant((rows, holdings) in portfolio_strategy(), factor in 0.1f64..10.0) {
        let scaled: Vec<Holding> = holdings
            .iter()
            .map(|h| Holding::new(h.identifier.clone(), h.allocation_pct * factor))
            .collect();

        let a = MetricScorer::default().score(&rows, &holdings);
        let b = MetricScorer::default().score(&rows, &scaled);

        for metric in Metric::ALL {
            match (a.get(metric), b.get(metric)) {
                (Some(x), Some(y)) => prop_assert!((x - y).abs() < 1e-9),
                (x, y) => prop_assert_eq!(x, y),
            }
        }
    }
}
