//! Portfolio metrics summary.
//!
//! Runs the TER, SRI and horizon calculators over one asset list and reports
//! how much of the portfolio fed each figure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    calculate_portfolio_horizon_with_config, calculate_portfolio_sri_with_config,
    calculate_portfolio_ter_with_config,
};
use crate::analytics::parallel::maybe_parallel_fold;
use crate::types::{AnalyticsConfig, AssetMetrics};

/// The three summary figures for a portfolio.
///
/// `None` means "not computable" and must be shown as unavailable, never as
/// zero. Serializes absent metrics as explicit `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetricsResult {
    /// Total expense ratio, percent per year.
    pub ter: Option<f64>,

    /// Synthetic risk indicator, 1-7.
    pub sri: Option<u8>,

    /// Value-weighted recommended holding period, years.
    pub horizon: Option<f64>,
}

impl PortfolioMetricsResult {
    /// Returns true if every metric is available.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.ter.is_some() && self.sri.is_some() && self.horizon.is_some()
    }

    /// Returns true if no metric is available.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ter.is_none() && self.sri.is_none() && self.horizon.is_none()
    }
}

/// Calculates TER, SRI and horizon sequentially with default settings.
///
/// Equivalent to calling the three calculators independently.
#[must_use]
pub fn calculate_all_portfolio_metrics(assets: &[AssetMetrics]) -> PortfolioMetricsResult {
    calculate_all_portfolio_metrics_with_config(assets, &AnalyticsConfig::sequential())
}

/// Calculates TER, SRI and horizon.
///
/// # Example
///
/// ```ignore
/// let metrics = calculate_all_portfolio_metrics_with_config(&assets, &config);
/// println!("TER: {:?}", metrics.ter);
/// ```
#[must_use]
pub fn calculate_all_portfolio_metrics_with_config(
    assets: &[AssetMetrics],
    config: &AnalyticsConfig,
) -> PortfolioMetricsResult {
    let result = PortfolioMetricsResult {
        ter: calculate_portfolio_ter_with_config(assets, config),
        sri: calculate_portfolio_sri_with_config(assets, config),
        horizon: calculate_portfolio_horizon_with_config(assets, config),
    };

    debug!(
        assets = assets.len(),
        ter = ?result.ter,
        sri = ?result.sri,
        horizon = ?result.horizon,
        "calculated portfolio metrics"
    );

    result
}

/// How many assets fed each metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsCoverage {
    /// Total number of assets.
    pub total_assets: usize,

    /// Assets with positive value (these feed the TER).
    pub weighted_assets: usize,

    /// Weighted assets with a non-zero SRI.
    pub sri_coverage: usize,

    /// Weighted assets with a non-zero holding period.
    pub horizon_coverage: usize,
}

impl MetricsCoverage {
    /// Returns the SRI coverage as a percentage of all assets.
    #[must_use]
    pub fn sri_coverage_pct(&self) -> f64 {
        pct(self.sri_coverage, self.total_assets)
    }

    /// Returns the horizon coverage as a percentage of all assets.
    #[must_use]
    pub fn horizon_coverage_pct(&self) -> f64 {
        pct(self.horizon_coverage, self.total_assets)
    }

    /// Returns the count of assets ignored for having no positive value.
    #[must_use]
    pub fn unweighted_assets(&self) -> usize {
        self.total_assets - self.weighted_assets
    }
}

fn pct(part: usize, whole: usize) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}

/// Counts the assets that feed each metric.
#[must_use]
pub fn calculate_metrics_coverage(
    assets: &[AssetMetrics],
    config: &AnalyticsConfig,
) -> MetricsCoverage {
    let (weighted_assets, sri_coverage, horizon_coverage) = maybe_parallel_fold(
        assets,
        config,
        (0_usize, 0_usize, 0_usize),
        |(w, s, h), a| {
            if !a.has_weight() {
                return (w, s, h);
            }
            (
                w + 1,
                s + usize::from(a.risk_indicator().is_some()),
                h + usize::from(a.holding_period().is_some()),
            )
        },
        |(a, b, c), (d, e, f)| (a + d, b + e, c + f),
    );

    MetricsCoverage {
        total_assets: assets.len(),
        weighted_assets,
        sri_coverage,
        horizon_coverage,
    }
}
