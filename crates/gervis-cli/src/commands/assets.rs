//! Assets command implementation.
//!
//! Lists the assets loaded from a portfolio file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use gervis_portfolio::AssetMetrics;

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::input::{load_assets, InputFormat};
use crate::output::{format_cell, print_csv, print_header, print_json, print_output};

/// Arguments for the assets command.
#[derive(Args, Debug)]
pub struct AssetsArgs {
    /// Asset file (.json or .csv)
    pub file: PathBuf,

    /// Input format, overriding the file extension
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Reject assets with non-finite fees or holding periods
    #[arg(long)]
    pub strict: bool,
}

/// One table row per asset.
#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "ISIN")]
    isin: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Entry %")]
    entry_fee: String,
    #[tabled(rename = "Exit %")]
    exit_fee: String,
    #[tabled(rename = "Ongoing %")]
    ongoing_charge: String,
    #[tabled(rename = "Transaction %")]
    transaction_cost: String,
    #[tabled(rename = "RHP (y)")]
    holding_period: String,
    #[tabled(rename = "SRI")]
    sri: String,
}

impl From<&AssetMetrics> for AssetRow {
    fn from(a: &AssetMetrics) -> Self {
        Self {
            id: a.id,
            product: format_cell(a.product_name.as_deref().or(a.description.as_deref())),
            isin: format_cell(a.isin.as_deref()),
            value: format!("{:.2}", a.value),
            entry_fee: format_cell(a.entry_fee),
            exit_fee: format_cell(a.exit_fee),
            ongoing_charge: format_cell(a.ongoing_charge),
            transaction_cost: format_cell(a.transaction_cost),
            holding_period: format_cell(a.recommended_holding_period),
            sri: format_cell(a.sri),
        }
    }
}

/// Execute the assets command.
pub fn execute(args: AssetsArgs, ctx: &Context) -> Result<()> {
    let assets = load_assets(&args.file, args.input_format, args.strict)?;

    match ctx.format {
        OutputFormat::Json => print_json(&assets)?,
        OutputFormat::Csv => print_csv(&assets)?,
        OutputFormat::Minimal => {
            let total: Decimal = assets
                .iter()
                .filter(|a| a.has_weight())
                .map(|a| a.value)
                .sum();
            println!("{} assets, total value {:.2}", assets.len(), total);
        }
        OutputFormat::Table => {
            let rows: Vec<AssetRow> = assets.iter().map(AssetRow::from).collect();
            if !ctx.quiet {
                print_header("Portfolio Assets");
            }
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
