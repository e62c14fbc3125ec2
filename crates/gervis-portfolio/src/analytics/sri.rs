//! Synthetic risk indicator (SRI) for portfolios.

use tracing::{debug, trace};

use crate::analytics::parallel::maybe_parallel_fold;
use crate::types::{AnalyticsConfig, AssetMetrics};

/// Lowest SRI on the PRIIPs scale.
pub const SRI_MIN: u8 = 1;

/// Highest SRI on the PRIIPs scale.
pub const SRI_MAX: u8 = 7;

/// Calculates the portfolio SRI sequentially with default settings.
///
/// Parallel summation may differ from the sequential sum in the last bits,
/// which can flip the rounding of a weighted mean sitting on an x.5
/// boundary. This entry point always gives the sequential result.
///
/// # Returns
///
/// Returns `None` if no asset has both positive value and a non-zero SRI.
#[must_use]
pub fn calculate_portfolio_sri(assets: &[AssetMetrics]) -> Option<u8> {
    calculate_portfolio_sri_with_config(assets, &AnalyticsConfig::sequential())
}

/// Calculates the portfolio SRI.
///
/// ## Formula
///
/// ```text
/// SRI_portfolio = clamp(round(Σ(v_i × SRI_i) / Σ(v_i)), 1, 7)
/// ```
///
/// Only assets with `value > 0` and a non-zero SRI take part; the
/// denominator sums their values alone. Rounding is half away from zero.
#[must_use]
pub fn calculate_portfolio_sri_with_config(
    assets: &[AssetMetrics],
    config: &AnalyticsConfig,
) -> Option<u8> {
    if assets.is_empty() {
        return None;
    }

    let (weighted_sri, total_value, count) = maybe_parallel_fold(
        assets,
        config,
        (0.0_f64, 0.0_f64, 0_usize),
        |(sum_w, sum_v, n), a| match a.risk_indicator() {
            Some(sri) if a.has_weight() => {
                let value = a.weight();
                (sum_w + f64::from(sri) * value, sum_v + value, n + 1)
            }
            _ => {
                trace!(id = a.id, "asset has no positive value or no SRI, excluded from SRI");
                (sum_w, sum_v, n)
            }
        },
        |(a, b, c), (d, e, f)| (a + d, b + e, c + f),
    );

    if count == 0 || total_value <= 0.0 {
        debug!(assets = assets.len(), "no weighted asset with an SRI, SRI unavailable");
        return None;
    }

    let avg = (weighted_sri / total_value).round();
    // Clamped into 1..=7, so the cast is lossless.
    let sri = avg.clamp(f64::from(SRI_MIN), f64::from(SRI_MAX)) as u8;
    debug!(assets = assets.len(), contributing = count, sri, "calculated portfolio SRI");
    Some(sri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn asset(id: i64, value: Decimal, sri: i32) -> AssetMetrics {
        AssetMetrics::new(id, value).with_sri(sri)
    }

    #[test]
    fn test_weighted_sri() {
        let assets = vec![asset(1, dec!(1000), 2), asset(2, dec!(3000), 6)];

        // (2×1000 + 6×3000) / 4000 = 5
        assert_eq!(calculate_portfolio_sri(&assets), Some(5));
    }

    #[test]
    fn test_rounds_half_up() {
        // 3.5 rounds to 4
        let assets = vec![asset(1, dec!(100), 3), asset(2, dec!(100), 4)];
        assert_eq!(calculate_portfolio_sri(&assets), Some(4));

        // 3.25 rounds to 3
        let assets = vec![asset(1, dec!(300), 3), asset(2, dec!(100), 4)];
        assert_eq!(calculate_portfolio_sri(&assets), Some(3));
    }

    #[test]
    fn test_clamped_to_scale() {
        assert_eq!(calculate_portfolio_sri(&[asset(1, dec!(10), 12)]), Some(7));
        assert_eq!(calculate_portfolio_sri(&[asset(1, dec!(10), -4)]), Some(1));
    }

    #[test]
    fn test_missing_sri_excluded_from_denominator() {
        let assets = vec![
            asset(1, dec!(1000), 6),
            AssetMetrics::new(2, dec!(1_000_000)),
        ];
        assert_eq!(calculate_portfolio_sri(&assets), Some(6));
    }

    #[test]
    fn test_zero_sri_treated_as_missing() {
        let with_zero = vec![asset(1, dec!(1000), 6), asset(2, dec!(1_000_000), 0)];
        let without = vec![asset(1, dec!(1000), 6), AssetMetrics::new(2, dec!(1_000_000))];
        assert_eq!(
            calculate_portfolio_sri(&with_zero),
            calculate_portfolio_sri(&without)
        );
        assert_eq!(calculate_portfolio_sri(&with_zero), Some(6));
    }

    #[test]
    fn test_empty_and_unweighted() {
        assert_eq!(calculate_portfolio_sri(&[]), None);
        assert_eq!(
            calculate_portfolio_sri(&[asset(1, Decimal::ZERO, 5), asset(2, dec!(-1), 7)]),
            None
        );
        assert_eq!(calculate_portfolio_sri(&[AssetMetrics::new(1, dec!(100))]), None);
    }
}
