//! Domain types for portfolio metrics.
//!
//! - [`AssetMetrics`]: A single holding with its cost and risk disclosures
//! - [`AnalyticsConfig`]: Configuration for metrics computation

mod asset;
mod config;

pub use asset::AssetMetrics;
pub use config::{AnalyticsConfig, DEFAULT_HOLDING_PERIOD_YEARS};
