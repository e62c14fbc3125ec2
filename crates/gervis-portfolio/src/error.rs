//! Error types for portfolio metrics.
//!
//! The calculators themselves never fail: a metric that cannot be computed is
//! reported as `None`. These errors come from asset validation and from
//! callers that load asset lists.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Invalid asset data.
    #[error("Invalid asset '{id}': {reason}")]
    InvalidAsset {
        /// The asset ID.
        id: i64,
        /// The reason the asset is invalid.
        reason: String,
    },

    /// Missing required field while reading an asset.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Unusable analytics setting.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the setting.
        reason: String,
    },
}

impl PortfolioError {
    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(id: i64, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            id,
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
