//! Metrics command implementation.
//!
//! Calculates TER, SRI and horizon for a portfolio file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use gervis_portfolio::{
    calculate_all_portfolio_metrics_with_config, calculate_metrics_coverage,
    calculate_ter_breakdown, AnalyticsConfig, MetricsCoverage, PortfolioMetricsResult,
    TerBreakdown,
};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::input::{load_assets, InputFormat};
use crate::output::{
    format_horizon, format_sri, format_ter, print_header, print_json, print_output,
    print_warning, KeyValue,
};

/// Arguments for the metrics command.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Asset file (.json or .csv)
    pub file: PathBuf,

    /// Input format, overriding the file extension
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Reject assets with non-finite fees or holding periods
    #[arg(long)]
    pub strict: bool,

    /// Disable parallel processing
    #[arg(long)]
    pub sequential: bool,

    /// Show the TER cost components
    #[arg(long)]
    pub breakdown: bool,

    /// Show how many assets fed each metric
    #[arg(long)]
    pub coverage: bool,
}

/// Machine-readable metrics report.
#[derive(Debug, Serialize)]
struct MetricsReport {
    #[serde(flatten)]
    metrics: PortfolioMetricsResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<TerBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coverage: Option<MetricsCoverage>,
}

/// Execute the metrics command.
pub fn execute(args: MetricsArgs, ctx: &Context) -> Result<()> {
    let assets = load_assets(&args.file, args.input_format, args.strict)?;

    let analytics: AnalyticsConfig = if args.sequential {
        ctx.config.analytics.clone().with_parallel(false)
    } else {
        ctx.config.analytics.clone()
    };

    let metrics = calculate_all_portfolio_metrics_with_config(&assets, &analytics);
    let coverage = calculate_metrics_coverage(&assets, &analytics);
    let breakdown = if args.breakdown {
        calculate_ter_breakdown(&assets, &analytics)
    } else {
        None
    };

    if !ctx.quiet && coverage.unweighted_assets() > 0 && ctx.format == OutputFormat::Table {
        print_warning(&format!(
            "{} asset(s) without positive value ignored",
            coverage.unweighted_assets()
        ));
    }

    let config = &ctx.config;
    let na = config.na_label.as_str();

    match ctx.format {
        OutputFormat::Json => {
            let report = MetricsReport {
                metrics,
                breakdown,
                coverage: args.coverage.then_some(coverage),
            };
            print_json(&report)?;
        }
        OutputFormat::Minimal => {
            println!(
                "TER: {} | SRI: {} | Horizon: {}",
                format_ter(metrics.ter, config.ter_decimals, na),
                format_sri(metrics.sri, config.sri_decimals, na),
                format_horizon(metrics.horizon, config.horizon_decimals, na),
            );
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let mut results = vec![
                KeyValue::new("TER", format_ter(metrics.ter, config.ter_decimals, na)),
                KeyValue::new("SRI", format_sri(metrics.sri, config.sri_decimals, na)),
                KeyValue::new(
                    "Horizon",
                    format_horizon(metrics.horizon, config.horizon_decimals, na),
                ),
            ];

            if args.breakdown {
                results.extend(breakdown_rows(breakdown.as_ref(), config.ter_decimals, na));
            }
            if args.coverage {
                results.extend(coverage_rows(&coverage));
            }

            if ctx.format == OutputFormat::Table && !ctx.quiet {
                print_header("Portfolio Metrics");
            }
            print_output(&results, ctx.format)?;
        }
    }

    Ok(())
}

/// Rows describing the TER components.
fn breakdown_rows(breakdown: Option<&TerBreakdown>, decimals: usize, na: &str) -> Vec<KeyValue> {
    let Some(b) = breakdown else {
        return vec![KeyValue::new("TER breakdown", na)];
    };

    vec![
        KeyValue::from_f64("Total value", b.total_value, 2),
        KeyValue::new("Entry fee (avg)", format_ter(Some(b.avg_entry_fee), decimals, na)),
        KeyValue::new("Exit fee (avg)", format_ter(Some(b.avg_exit_fee), decimals, na)),
        KeyValue::new(
            "Ongoing charge (avg)",
            format_ter(Some(b.avg_ongoing_charge), decimals, na),
        ),
        KeyValue::new(
            "Transaction cost (avg)",
            format_ter(Some(b.avg_transaction_cost), decimals, na),
        ),
        KeyValue::new(
            "Amortization period",
            format_horizon(Some(b.avg_holding_period), 2, na),
        ),
        KeyValue::new(
            "Amortized one-off costs",
            format_ter(Some(b.amortized_one_off_costs()), decimals, na),
        ),
    ]
}

/// Rows describing metric coverage.
fn coverage_rows(coverage: &MetricsCoverage) -> Vec<KeyValue> {
    vec![
        KeyValue::new("Assets", coverage.total_assets.to_string()),
        KeyValue::new("Weighted assets", coverage.weighted_assets.to_string()),
        KeyValue::new(
            "SRI coverage",
            format!(
                "{} ({:.1}%)",
                coverage.sri_coverage,
                coverage.sri_coverage_pct()
            ),
        ),
        KeyValue::new(
            "Horizon coverage",
            format!(
                "{} ({:.1}%)",
                coverage.horizon_coverage,
                coverage.horizon_coverage_pct()
            ),
        ),
    ]
}
