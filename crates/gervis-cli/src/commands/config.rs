//! Config command implementation.
//!
//! Shows and initializes the CLI configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::config::{resolve_config_path, CliConfig};
use crate::output::{print_header, print_info, print_json, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default settings
    Init(InitArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Init(init_args) => execute_init(init_args, ctx),
        ConfigCommand::Path => execute_path(ctx),
    }
}

/// Show the effective configuration.
fn execute_show(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    match ctx.format {
        OutputFormat::Json => print_json(config)?,
        OutputFormat::Minimal => print!("{}", config.to_toml()?),
        OutputFormat::Table | OutputFormat::Csv => {
            let results = vec![
                KeyValue::new("na_label", config.na_label.clone()),
                KeyValue::new("ter_decimals", config.ter_decimals.to_string()),
                KeyValue::new("sri_decimals", config.sri_decimals.to_string()),
                KeyValue::new("horizon_decimals", config.horizon_decimals.to_string()),
                KeyValue::new("default_format", format!("{:?}", config.default_format).to_lowercase()),
                KeyValue::new("analytics.parallel", config.analytics.parallel.to_string()),
                KeyValue::new(
                    "analytics.parallel_threshold",
                    config.analytics.parallel_threshold.to_string(),
                ),
                KeyValue::new(
                    "analytics.fallback_holding_period",
                    config.analytics.fallback_holding_period.to_string(),
                ),
            ];
            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Current Configuration");
            }
            print_output(&results, ctx.format)?;
        }
    }

    Ok(())
}

/// Write a default configuration file.
fn execute_init(args: InitArgs, ctx: &Context) -> Result<()> {
    let path = resolve_config_path(ctx.config_path.as_deref())?;

    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, CliConfig::default().to_toml()?)?;

    if !ctx.quiet {
        print_success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = resolve_config_path(ctx.config_path.as_deref())?;

    if ctx.quiet || ctx.format == OutputFormat::Minimal {
        println!("{}", path.display());
        return Ok(());
    }

    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
