//! Portfolio-level metrics.
//!
//! This module aggregates asset disclosures into portfolio figures:
//! - Total expense ratio with amortized one-off fees
//! - Synthetic risk indicator on the 1-7 scale
//! - Recommended holding horizon
//! - Per-metric coverage
//!
//! All functions are pure - they take assets and configuration as input
//! and return computed results. No caching, no I/O, no side effects.

mod horizon;
mod parallel;
mod sri;
mod summary;
mod ter;

pub use horizon::*;
pub use parallel::*;
pub use sri::*;
pub use summary::*;
pub use ter::*;
