//! CLI command implementations.

pub mod assets;
pub mod config;
pub mod metrics;

pub use assets::AssetsArgs;
pub use config::ConfigArgs;
pub use metrics::MetricsArgs;

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config::CliConfig;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration.
    pub config: CliConfig,
    /// Explicit configuration path, if one was given.
    pub config_path: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and notices.
    pub quiet: bool,
}
