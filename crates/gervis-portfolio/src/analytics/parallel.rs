//! Parallel processing utilities for portfolio metrics.
//!
//! Provides conditional parallel iteration based on configuration
//! and collection size. Uses rayon when the `parallel` feature is enabled.

use crate::types::AnalyticsConfig;

/// Folds over items with a reduce step, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// # Arguments
///
/// * `items` - The collection to process
/// * `config` - Analytics configuration
/// * `identity` - The identity value for the fold
/// * `fold` - The fold function: `(accumulator, item) -> accumulator`
/// * `reduce` - The reduce function: `(acc1, acc2) -> combined`
///
/// # Example
///
/// ```ignore
/// let (sum_weighted, sum_weights) = maybe_parallel_fold(
///     &assets,
///     &config,
///     (0.0, 0.0),
///     |(sum_w, sum_wt), a| (sum_w + a.weight() * 2.0, sum_wt + a.weight()),
///     |(a, b), (c, d)| (a + c, b + d),
/// );
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_fold<T, U, F, R>(
    items: &[T],
    config: &AnalyticsConfig,
    identity: U,
    fold: F,
    reduce: R,
) -> U
where
    T: Sync,
    U: Send + Sync + Clone,
    F: Fn(U, &T) -> U + Sync + Send,
    R: Fn(U, U) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items
                .par_iter()
                .fold(|| identity.clone(), &fold)
                .reduce(|| identity.clone(), reduce);
        }
    }

    items.iter().fold(identity, fold)
}
