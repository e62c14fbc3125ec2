//! CLI error types.

use gervis_portfolio::PortfolioError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file format could not be inferred.
    #[error("Cannot infer input format for {0}. Use --input-format json|csv.")]
    UnknownInputFormat(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An asset record that could not be read.
    #[error("Invalid asset record at {location}: {reason}")]
    InvalidRecord {
        /// Path to the offending record or field, e.g. `assets[3].sri`.
        location: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid asset data.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// JSON parse or write error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parse or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
