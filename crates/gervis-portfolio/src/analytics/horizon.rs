//! Recommended holding horizon for portfolios.

use tracing::{debug, trace};

use crate::analytics::parallel::maybe_parallel_fold;
use crate::types::{AnalyticsConfig, AssetMetrics};

/// Calculates the portfolio horizon sequentially with default settings.
///
/// # Returns
///
/// Returns `None` if no asset has both positive value and a holding period.
#[must_use]
pub fn calculate_portfolio_horizon(assets: &[AssetMetrics]) -> Option<f64> {
    calculate_portfolio_horizon_with_config(assets, &AnalyticsConfig::sequential())
}

/// Calculates the value-weighted average recommended holding period, in years.
///
/// ## Formula
///
/// ```text
/// horizon = Σ(v_i × hp_i) / Σ(v_i)
/// ```
///
/// A plain arithmetic mean over assets with `value > 0` and a present,
/// non-zero period. This is a display figure and is unrelated to the
/// harmonic mean the TER calculator amortizes fees over.
#[must_use]
pub fn calculate_portfolio_horizon_with_config(
    assets: &[AssetMetrics],
    config: &AnalyticsConfig,
) -> Option<f64> {
    if assets.is_empty() {
        return None;
    }

    let (weighted_period, total_value, count) = maybe_parallel_fold(
        assets,
        config,
        (0.0_f64, 0.0_f64, 0_usize),
        |(sum_w, sum_v, n), a| match a.holding_period() {
            Some(years) if a.has_weight() => {
                let value = a.weight();
                (sum_w + years * value, sum_v + value, n + 1)
            }
            _ => {
                trace!(
                    id = a.id,
                    "asset has no positive value or no holding period, excluded from horizon"
                );
                (sum_w, sum_v, n)
            }
        },
        |(a, b, c), (d, e, f)| (a + d, b + e, c + f),
    );

    if count == 0 || total_value <= 0.0 {
        debug!(assets = assets.len(), "no weighted asset with a holding period, horizon unavailable");
        return None;
    }

    let horizon = weighted_period / total_value;
    debug!(assets = assets.len(), contributing = count, horizon, "calculated portfolio horizon");
    Some(horizon)
}
