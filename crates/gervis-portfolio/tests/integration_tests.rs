//! Integration tests for gervis-portfolio.
//!
//! These tests verify end-to-end metrics on realistic advisory portfolios.

use approx::assert_relative_eq;
use gervis_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// A balanced client portfolio: funds, an ETF, a bond and a policy.
fn create_balanced_portfolio() -> Vec<AssetMetrics> {
    vec![
        AssetMetrics::new(101, dec!(40_000))
            .with_category("Equity fund")
            .with_isin("LU0171310443")
            .with_product_name("Global Equity Fund A")
            .with_entry_fee(3.0)
            .with_ongoing_charge(1.8)
            .with_transaction_cost(0.15)
            .with_recommended_holding_period(7.0)
            .with_sri(5),
        AssetMetrics::new(102, dec!(30_000))
            .with_category("ETF")
            .with_isin("IE00B4L5Y983")
            .with_product_name("Core MSCI World UCITS ETF")
            .with_ongoing_charge(0.2)
            .with_transaction_cost(0.02)
            .with_recommended_holding_period(5.0)
            .with_sri(4),
        AssetMetrics::new(103, dec!(20_000))
            .with_category("Bond")
            .with_isin("IT0005436693")
            .with_product_name("BTP 2031")
            .with_recommended_holding_period(6.0)
            .with_sri(2),
        AssetMetrics::new(104, dec!(10_000))
            .with_category("Insurance policy")
            .with_product_name("Unit-linked Multi Asset")
            .with_entry_fee(1.0)
            .with_exit_fee(2.0)
            .with_ongoing_charge(2.1)
            .with_recommended_holding_period(10.0)
            .with_sri(3),
    ]
}

/// A portfolio with incomplete KID data.
fn create_sparse_portfolio() -> Vec<AssetMetrics> {
    vec![
        AssetMetrics::new(1, dec!(15_000)).with_ongoing_charge(1.0),
        AssetMetrics::new(2, dec!(5_000)).with_sri(0),
        AssetMetrics::new(3, Decimal::ZERO)
            .with_entry_fee(5.0)
            .with_recommended_holding_period(1.0)
            .with_sri(7),
    ]
}

// =============================================================================
// FULL PORTFOLIO
// =============================================================================

#[test]
fn test_balanced_portfolio_metrics() {
    let assets = create_balanced_portfolio();
    let metrics = calculate_all_portfolio_metrics(&assets);

    assert!(metrics.is_complete());

    // SRI: (5×40k + 4×30k + 2×20k + 3×10k) / 100k = 3.9 → 4
    assert_eq!(metrics.sri, Some(4));

    // Horizon: (7×40k + 5×30k + 6×20k + 10×10k) / 100k = 6.5
    assert_relative_eq!(metrics.horizon.unwrap(), 6.5, epsilon = 1e-12);

    // TER
    let holding_period = 100_000.0 / (40_000.0 / 7.0 + 30_000.0 / 5.0 + 20_000.0 / 6.0 + 1_000.0);
    let avg_entry = (3.0 * 40_000.0 + 1.0 * 10_000.0) / 100_000.0;
    let avg_exit = 2.0 * 10_000.0 / 100_000.0;
    let avg_ongoing = (1.8 * 40_000.0 + 0.2 * 30_000.0 + 2.1 * 10_000.0) / 100_000.0;
    let avg_transaction = (0.15 * 40_000.0 + 0.02 * 30_000.0) / 100_000.0;
    let expected = (avg_entry + avg_exit) / holding_period + avg_ongoing + avg_transaction;

    assert_relative_eq!(metrics.ter.unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn test_breakdown_reconciles_with_ter() {
    let assets = create_balanced_portfolio();
    let config = AnalyticsConfig::default();

    let breakdown = calculate_ter_breakdown(&assets, &config).unwrap();
    let ter = calculate_portfolio_ter(&assets).unwrap();

    assert_relative_eq!(breakdown.ter(), ter);
    assert_relative_eq!(
        breakdown.amortized_one_off_costs() + breakdown.recurring_costs(),
        ter
    );
    assert_relative_eq!(breakdown.total_value, 100_000.0);
}

#[test]
fn test_ter_and_horizon_use_different_means() {
    let assets = create_balanced_portfolio();
    let breakdown = calculate_ter_breakdown(&assets, &AnalyticsConfig::default()).unwrap();
    let horizon = calculate_portfolio_horizon(&assets).unwrap();

    // Harmonic mean is strictly below the arithmetic mean for unequal periods
    assert!(breakdown.avg_holding_period < horizon);
}

// =============================================================================
// SPARSE DATA
// =============================================================================

#[test]
fn test_sparse_portfolio() {
    let assets = create_sparse_portfolio();
    let metrics = calculate_all_portfolio_metrics(&assets);

    // Only ongoing charge on 15k of 20k; no periods → 5 year fallback (unused, no one-off fees)
    assert_relative_eq!(metrics.ter.unwrap(), 0.75, epsilon = 1e-12);
    // SRI 0 is treated as missing and the SRI 7 asset has no value
    assert_eq!(metrics.sri, None);
    assert_eq!(metrics.horizon, None);

    let coverage = calculate_metrics_coverage(&assets, &AnalyticsConfig::default());
    assert_eq!(coverage.total_assets, 3);
    assert_eq!(coverage.weighted_assets, 2);
    assert_eq!(coverage.sri_coverage, 0);
    assert_eq!(coverage.horizon_coverage, 0);
}

#[test]
fn test_empty_portfolio() {
    let metrics = calculate_all_portfolio_metrics(&[]);
    assert_eq!(metrics.ter, None);
    assert_eq!(metrics.sri, None);
    assert_eq!(metrics.horizon, None);
}

// =============================================================================
// JSON INTERCHANGE
// =============================================================================

#[test]
fn test_metrics_from_client_payload() {
    let payload = r#"[
        {"id": 1, "value": 1000, "category": "Fund", "entryFee": 2, "exitFee": 1,
         "ongoingCharge": 0.5, "recommendedHoldingPeriod": 5, "sri": 3},
        {"id": 2, "value": 0, "entryFee": 50, "sri": 7}
    ]"#;

    let assets: Vec<AssetMetrics> = serde_json::from_str(payload).unwrap();
    let metrics = calculate_all_portfolio_metrics(&assets);

    assert_relative_eq!(metrics.ter.unwrap(), 1.1, epsilon = 1e-12);
    assert_eq!(metrics.sri, Some(3));
    assert_eq!(metrics.horizon, Some(5.0));

    let json = serde_json::to_value(metrics).unwrap();
    assert_eq!(json["sri"], 3);
    assert_eq!(json["horizon"], 5.0);
}

// =============================================================================
// PARALLEL CONSISTENCY
// =============================================================================

#[test]
fn test_parallel_matches_sequential() {
    let assets: Vec<AssetMetrics> = (0..2_000)
        .map(|i| {
            AssetMetrics::new(i, Decimal::from(1_000 + (i * 37) % 5_000))
                .with_entry_fee((i % 4) as f64)
                .with_ongoing_charge(0.1 + (i % 20) as f64 / 10.0)
                .with_recommended_holding_period(1.0 + (i % 9) as f64)
                .with_sri(1 + (i % 7) as i32)
        })
        .collect();

    let sequential = AnalyticsConfig::sequential();
    let parallel = AnalyticsConfig::default().with_threshold(10);

    let a = calculate_all_portfolio_metrics_with_config(&assets, &sequential);
    let b = calculate_all_portfolio_metrics_with_config(&assets, &parallel);

    assert_relative_eq!(a.ter.unwrap(), b.ter.unwrap(), max_relative = 1e-9);
    assert_relative_eq!(a.horizon.unwrap(), b.horizon.unwrap(), max_relative = 1e-9);
    assert_eq!(a.sri, b.sri);
}

#[test]
fn test_default_entry_points_match_sequential() {
    // Fractional values on a large portfolio, well above the parallel threshold.
    let assets: Vec<AssetMetrics> = (0..1_000)
        .map(|i| {
            AssetMetrics::new(i, Decimal::new(10_007 + i * 131, 2))
                .with_entry_fee(0.1 * (i % 5) as f64)
                .with_ongoing_charge(0.37)
                .with_recommended_holding_period(0.5 + (i % 11) as f64)
                .with_sri(1 + (i % 7) as i32)
        })
        .collect();

    let sequential =
        calculate_all_portfolio_metrics_with_config(&assets, &AnalyticsConfig::sequential());

    assert_eq!(calculate_all_portfolio_metrics(&assets), sequential);
    assert_eq!(calculate_portfolio_ter(&assets), sequential.ter);
    assert_eq!(calculate_portfolio_sri(&assets), sequential.sri);
    assert_eq!(calculate_portfolio_horizon(&assets), sequential.horizon);
}

// =============================================================================
// LOGGING
// =============================================================================

mod logging {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use gervis_portfolio::prelude::*;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_exclusions_are_traced() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        let assets = vec![
            AssetMetrics::new(1, dec!(1000))
                .with_recommended_holding_period(5.0)
                .with_sri(4),
            AssetMetrics::new(2, Decimal::ZERO).with_sri(7),
            AssetMetrics::new(3, dec!(500)),
        ];

        // Subscriber is thread-local, so stay on this thread.
        let config = AnalyticsConfig::sequential();
        tracing::subscriber::with_default(subscriber, || {
            calculate_all_portfolio_metrics_with_config(&assets, &config);
        });

        let output = logs.contents();
        assert!(output.contains("excluded from TER"), "{output}");
        assert!(output.contains("excluded from SRI"), "{output}");
        assert!(output.contains("excluded from horizon"), "{output}");
        assert!(output.contains("id=2"), "{output}");
        assert!(output.contains("id=3"), "{output}");
        assert!(output.contains("calculated portfolio metrics"), "{output}");
    }
}
