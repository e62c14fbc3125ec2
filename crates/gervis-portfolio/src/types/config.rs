//! Configuration for portfolio metrics computation.

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};

/// Holding period (years) used to amortize entry and exit fees when no asset
/// carries a positive recommended holding period.
pub const DEFAULT_HOLDING_PERIOD_YEARS: f64 = 5.0;

/// Configuration for portfolio metrics computation.
///
/// Controls parallelism and the TER amortization fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum asset count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,

    /// Holding period used by the TER calculator when no asset has one.
    /// Must be finite and positive; see [`AnalyticsConfig::validate`].
    pub fallback_holding_period: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 100,
            fallback_holding_period: DEFAULT_HOLDING_PERIOD_YEARS,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Sets the fallback holding period for TER amortization.
    #[must_use]
    pub fn with_fallback_holding_period(mut self, years: f64) -> Self {
        self.fallback_holding_period = years;
        self
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidConfig`] if `fallback_holding_period`
    /// is not a finite number of years greater than zero.
    pub fn validate(&self) -> PortfolioResult<()> {
        let years = self.fallback_holding_period;
        if !(years.is_finite() && years > 0.0) {
            return Err(PortfolioError::invalid_config(format!(
                "fallback_holding_period must be a positive number of years, got {years}"
            )));
        }
        Ok(())
    }

    /// The fallback holding period, or the default one if the configured
    /// value would not give a finite, non-negative TER.
    pub(crate) fn effective_fallback_holding_period(&self) -> f64 {
        if self.validate().is_ok() {
            self.fallback_holding_period
        } else {
            DEFAULT_HOLDING_PERIOD_YEARS
        }
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
