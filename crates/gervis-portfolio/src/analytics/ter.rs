//! Total expense ratio (TER) for portfolios.
//!
//! One-off costs (entry and exit fees) are amortized over the portfolio's
//! holding period; recurring costs (ongoing charges and transaction costs)
//! are already annual and are added as-is.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::analytics::parallel::maybe_parallel_fold;
use crate::types::{AnalyticsConfig, AssetMetrics};

/// Value-weighted cost components behind a portfolio TER.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerBreakdown {
    /// Sum of value over the assets with positive value.
    pub total_value: f64,

    /// Weighted average entry fee (percent).
    pub avg_entry_fee: f64,

    /// Weighted average exit fee (percent).
    pub avg_exit_fee: f64,

    /// Weighted average ongoing charge (percent per year).
    pub avg_ongoing_charge: f64,

    /// Weighted average transaction cost (percent per year).
    pub avg_transaction_cost: f64,

    /// Holding period (years) the one-off fees are spread over.
    ///
    /// Value-weighted harmonic mean of the positive recommended holding
    /// periods, or the configured fallback if there are none.
    pub avg_holding_period: f64,
}

impl TerBreakdown {
    /// Entry plus exit fees spread over the holding period (percent per year).
    #[must_use]
    pub fn amortized_one_off_costs(&self) -> f64 {
        (self.avg_entry_fee + self.avg_exit_fee) / self.avg_holding_period
    }

    /// Recurring costs (percent per year).
    #[must_use]
    pub fn recurring_costs(&self) -> f64 {
        self.avg_ongoing_charge + self.avg_transaction_cost
    }

    /// Total expense ratio (percent per year).
    ///
    /// ```text
    /// TER = (entry + exit) / holding_period + ongoing + transaction
    /// ```
    #[must_use]
    pub fn ter(&self) -> f64 {
        self.amortized_one_off_costs() + self.recurring_costs()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct TerAccumulator {
    total_value: f64,
    weighted_entry_fee: f64,
    weighted_exit_fee: f64,
    weighted_ongoing_charge: f64,
    weighted_transaction_cost: f64,
    // Σ value / period, for the harmonic mean
    inverse_holding_period: f64,
}

impl TerAccumulator {
    fn add(mut self, asset: &AssetMetrics) -> Self {
        if !asset.has_weight() {
            trace!(id = asset.id, "asset has no positive value, excluded from TER");
            return self;
        }

        let value = asset.weight();
        self.total_value += value;
        self.weighted_entry_fee += asset.entry_fee.unwrap_or(0.0) * value;
        self.weighted_exit_fee += asset.exit_fee.unwrap_or(0.0) * value;
        self.weighted_ongoing_charge += asset.ongoing_charge.unwrap_or(0.0) * value;
        self.weighted_transaction_cost += asset.transaction_cost.unwrap_or(0.0) * value;

        if let Some(period) = asset.recommended_holding_period {
            if period > 0.0 {
                self.inverse_holding_period += value / period;
            } else {
                trace!(id = asset.id, period, "non-positive holding period, not amortized over");
            }
        }

        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            total_value: self.total_value + other.total_value,
            weighted_entry_fee: self.weighted_entry_fee + other.weighted_entry_fee,
            weighted_exit_fee: self.weighted_exit_fee + other.weighted_exit_fee,
            weighted_ongoing_charge: self.weighted_ongoing_charge + other.weighted_ongoing_charge,
            weighted_transaction_cost: self.weighted_transaction_cost
                + other.weighted_transaction_cost,
            inverse_holding_period: self.inverse_holding_period + other.inverse_holding_period,
        }
    }
}

/// Calculates the value-weighted TER components.
///
/// ## Formula
///
/// ```text
/// avg_fee_k       = Σ(v_i × fee_k_i) / Σ(v_i)
/// holding_period  = Σ(v_i) / Σ(v_i / hp_i)      (hp_i > 0 only)
/// ```
///
/// Only assets with `value > 0` take part. Missing fees count as zero.
/// Assets without a positive holding period still contribute their fees but
/// are left out of the harmonic mean; if none has one, the config's
/// `fallback_holding_period` is used (the 5-year default when that setting
/// is not a positive number of years).
///
/// # Returns
///
/// Returns `None` if the list is empty or no asset has positive value.
#[must_use]
pub fn calculate_ter_breakdown(
    assets: &[AssetMetrics],
    config: &AnalyticsConfig,
) -> Option<TerBreakdown> {
    if assets.is_empty() {
        return None;
    }

    let acc = maybe_parallel_fold(
        assets,
        config,
        TerAccumulator::default(),
        TerAccumulator::add,
        TerAccumulator::merge,
    );

    if acc.total_value <= 0.0 {
        debug!(assets = assets.len(), "no positively valued assets, TER unavailable");
        return None;
    }

    let avg_holding_period = if acc.inverse_holding_period > 0.0 {
        acc.total_value / acc.inverse_holding_period
    } else {
        config.effective_fallback_holding_period()
    };

    Some(TerBreakdown {
        total_value: acc.total_value,
        avg_entry_fee: acc.weighted_entry_fee / acc.total_value,
        avg_exit_fee: acc.weighted_exit_fee / acc.total_value,
        avg_ongoing_charge: acc.weighted_ongoing_charge / acc.total_value,
        avg_transaction_cost: acc.weighted_transaction_cost / acc.total_value,
        avg_holding_period,
    })
}

/// Calculates the portfolio TER sequentially with default settings.
///
/// # Returns
///
/// Returns `None` if the list is empty or no asset has positive value.
#[must_use]
pub fn calculate_portfolio_ter(assets: &[AssetMetrics]) -> Option<f64> {
    calculate_portfolio_ter_with_config(assets, &AnalyticsConfig::sequential())
}

/// Calculates the portfolio TER.
#[must_use]
pub fn calculate_portfolio_ter_with_config(
    assets: &[AssetMetrics],
    config: &AnalyticsConfig,
) -> Option<f64> {
    calculate_ter_breakdown(assets, config).map(|b| b.ter())
}
