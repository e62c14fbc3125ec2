//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AssetsArgs, ConfigArgs, MetricsArgs};

/// Gervis - Portfolio cost, risk and horizon metrics
#[derive(Parser)]
#[command(name = "gervis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(long, env = "GERVIS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate TER, SRI and horizon for a portfolio file
    Metrics(MetricsArgs),

    /// List the assets in a portfolio file
    Assets(AssetsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (one line)
    Minimal,
}
