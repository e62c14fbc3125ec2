//! Gervis CLI - Portfolio metrics from the command line.
//!
//! # Usage
//!
//! ```bash
//! # TER, SRI and horizon for a portfolio
//! gervis metrics portfolio.json
//!
//! # Include the TER components and data coverage, as JSON
//! gervis metrics portfolio.csv --breakdown --coverage --format json
//!
//! # List the assets in a file
//! gervis assets portfolio.csv
//!
//! # Write a default configuration file
//! gervis config init
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod input;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use config::CliConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    debug!("Gervis CLI v{}", env!("CARGO_PKG_VERSION"));

    let config = CliConfig::load(cli.config.as_deref())?;
    let ctx = Context {
        format: cli.format.unwrap_or(config.default_format),
        config,
        config_path: cli.config,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Metrics(args) => commands::metrics::execute(args, &ctx)?,
        Commands::Assets(args) => commands::assets::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
