//! # Gervis Portfolio
//!
//! Cost, risk and horizon metrics for advisory client portfolios.
//!
//! Every figure is a value-weighted average over the portfolio's assets.
//! Assets with a non-positive value carry no weight anywhere. A metric that
//! cannot be computed is `None`, which callers render as "N/A" rather than
//! as zero.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All calculations are stateless with explicit inputs
//! - **Caller-supplied disclosures**: Fees, SRI and holding periods come from
//!   the product's KID via [`AssetMetrics`]
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Quick Start
//!
//! ```rust
//! use gervis_portfolio::prelude::*;
//!
//! let assets = vec![
//!     AssetMetrics::new(1, dec!(1000))
//!         .with_entry_fee(2.0)
//!         .with_exit_fee(1.0)
//!         .with_ongoing_charge(0.5)
//!         .with_recommended_holding_period(5.0)
//!         .with_sri(3),
//! ];
//!
//! let metrics = calculate_all_portfolio_metrics(&assets);
//! assert!((metrics.ter.unwrap() - 1.1).abs() < 1e-9);
//! assert_eq!(metrics.sri, Some(3));
//! assert_eq!(metrics.horizon, Some(5.0));
//! ```
//!
//! ## Module Overview
//!
//! - [`analytics`] - TER, SRI, horizon, the combined summary and coverage
//! - [`types`] - Core types (AssetMetrics, AnalyticsConfig)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large portfolios

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod error;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

pub use types::{AnalyticsConfig, AssetMetrics, DEFAULT_HOLDING_PERIOD_YEARS};

pub use analytics::{
    calculate_all_portfolio_metrics, calculate_all_portfolio_metrics_with_config,
    calculate_metrics_coverage, calculate_portfolio_horizon,
    calculate_portfolio_horizon_with_config, calculate_portfolio_sri,
    calculate_portfolio_sri_with_config, calculate_portfolio_ter,
    calculate_portfolio_ter_with_config, calculate_ter_breakdown, maybe_parallel_fold,
    MetricsCoverage, PortfolioMetricsResult, TerBreakdown, SRI_MAX, SRI_MIN,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use gervis_portfolio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{PortfolioError, PortfolioResult};

    pub use crate::types::{AnalyticsConfig, AssetMetrics};

    pub use crate::analytics::{
        calculate_all_portfolio_metrics, calculate_all_portfolio_metrics_with_config,
        calculate_metrics_coverage, calculate_portfolio_horizon, calculate_portfolio_sri,
        calculate_portfolio_ter, calculate_ter_breakdown, MetricsCoverage,
        PortfolioMetricsResult, TerBreakdown,
    };

    pub use rust_decimal::Decimal;
    pub use rust_decimal_macros::dec;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        let metrics = calculate_all_portfolio_metrics(&[]);
        assert!(metrics.is_empty());
    }
}
