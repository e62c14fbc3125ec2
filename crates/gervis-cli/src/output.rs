//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Formats and prints rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv => print_csv(data),
        OutputFormat::Minimal => print_minimal(data),
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
    Ok(())
}

/// Prints data as JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints data as CSV.
pub fn print_csv<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for item in data {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Prints minimal output (first value only).
fn print_minimal<T: Serialize>(data: &[T]) -> anyhow::Result<()> {
    if let Some(first) = data.first() {
        println!("{}", serde_json::to_string(first)?);
    }
    Ok(())
}

/// Formats a TER (already in percent) as `1.10%`.
pub fn format_ter(value: Option<f64>, decimals: usize, na: &str) -> String {
    value.map_or_else(|| na.to_string(), |v| format!("{:.prec$}%", v, prec = decimals))
}

/// Formats an SRI as `4.0 / 7`.
pub fn format_sri(value: Option<u8>, decimals: usize, na: &str) -> String {
    value.map_or_else(
        || na.to_string(),
        |v| format!("{:.prec$} / 7", f64::from(v), prec = decimals),
    )
}

/// Formats a horizon as `6.5 years`.
pub fn format_horizon(value: Option<f64>, decimals: usize, na: &str) -> String {
    value.map_or_else(
        || na.to_string(),
        |v| format!("{:.prec$} years", v, prec = decimals),
    )
}

/// Formats an optional cell value, `-` when absent.
pub fn format_cell<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints an info message.
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair with a fixed number of decimals.
    pub fn from_f64(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.prec$}", value, prec = precision),
        }
    }
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}
