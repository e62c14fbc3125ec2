//! CLI configuration file.
//!
//! Settings live in a TOML file, by default `<config dir>/gervis/config.toml`.
//! Every key is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use gervis_portfolio::AnalyticsConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Label shown for metrics that cannot be computed.
    pub na_label: String,

    /// Decimal places for TER.
    pub ter_decimals: usize,

    /// Decimal places for SRI.
    pub sri_decimals: usize,

    /// Decimal places for horizon.
    pub horizon_decimals: usize,

    /// Output format when `--format` is not given.
    pub default_format: OutputFormat,

    /// Metrics computation settings.
    pub analytics: AnalyticsConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            na_label: "N/A".to_string(),
            ter_decimals: 2,
            sri_decimals: 1,
            horizon_decimals: 1,
            default_format: OutputFormat::Table,
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`, or from the default location.
    ///
    /// A file that does not exist yields the defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading configuration");
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml(&content).map_err(|e| match e {
            CliError::Config(msg) => CliError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Parses a configuration from TOML text and checks its settings.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        config
            .analytics
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Returns the default configuration file path, if a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("gervis").join("config.toml"))
}

/// Returns the path a command should use: the explicit one, else the default.
pub fn resolve_config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(default_config_path)
        .ok_or_else(|| CliError::Config("could not determine config directory".to_string()))
}
