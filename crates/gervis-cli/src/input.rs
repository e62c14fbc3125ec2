//! Asset file loading.
//!
//! JSON files hold either a bare array of assets or an object with an
//! `assets` array. CSV files have one asset per row with camelCase headers
//! (`id,value,productName,entryFee,...`); empty cells are absent values.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use gervis_portfolio::{AssetMetrics, PortfolioError};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

/// Asset file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON array or `{ "assets": [...] }`
    Json,
    /// CSV with a header row
    Csv,
}

impl InputFormat {
    /// Infers the format from the file extension.
    pub fn from_path(path: &Path) -> CliResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(CliError::UnknownInputFormat(path.display().to_string())),
        }
    }
}

/// Fields every asset record must carry.
const REQUIRED_FIELDS: [&str; 2] = ["id", "value"];

/// Loads assets from a file.
///
/// When `strict` is set, every asset is validated and the first invalid one
/// aborts the load.
pub fn load_assets(
    path: &Path,
    format: Option<InputFormat>,
    strict: bool,
) -> CliResult<Vec<AssetMetrics>> {
    let format = match format {
        Some(f) => f,
        None => InputFormat::from_path(path)?,
    };

    let file = std::fs::File::open(path)?;
    let assets = match format {
        InputFormat::Json => parse_json(file)?,
        InputFormat::Csv => parse_csv(file)?,
    };

    debug!(path = %path.display(), count = assets.len(), ?format, "loaded assets");
    if assets.is_empty() {
        warn!(path = %path.display(), "asset file contains no assets");
    }

    if strict {
        for asset in &assets {
            asset.validate()?;
        }
    }

    Ok(assets)
}

/// Parses assets from JSON.
///
/// Records are read one by one so that a bad record is reported by its
/// position and field, e.g. `assets[3].sri`.
pub fn parse_json<R: Read>(reader: R) -> CliResult<Vec<AssetMetrics>> {
    let (prefix, records) = match serde_json::from_reader::<_, Value>(reader)? {
        Value::Array(records) => ("", records),
        Value::Object(mut root) => match root.remove("assets") {
            Some(Value::Array(records)) => ("assets", records),
            Some(_) => {
                return Err(CliError::InvalidRecord {
                    location: "assets".to_string(),
                    reason: "expected an array of assets".to_string(),
                })
            }
            None => return Err(PortfolioError::missing_field("assets").into()),
        },
        _ => {
            return Err(CliError::InvalidRecord {
                location: "top level".to_string(),
                reason: "expected an array of assets or an object with an `assets` array"
                    .to_string(),
            })
        }
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| parse_record(prefix, index, record))
        .collect()
}

fn parse_record(prefix: &str, index: usize, record: &Value) -> CliResult<AssetMetrics> {
    let location = |field: Option<&str>| match field {
        Some(field) => format!("{prefix}[{index}].{field}"),
        None => format!("{prefix}[{index}]"),
    };

    let Value::Object(fields) = record else {
        return Err(CliError::InvalidRecord {
            location: location(None),
            reason: "expected an object".to_string(),
        });
    };

    if let Some(field) = REQUIRED_FIELDS.iter().find(|f| !fields.contains_key(**f)) {
        return Err(PortfolioError::missing_field(location(Some(*field))).into());
    }

    AssetMetrics::deserialize(record).map_err(|e| CliError::InvalidRecord {
        location: location(rejected_field(fields)),
        reason: e.to_string(),
    })
}

/// Finds the first field that fails to deserialize on its own, next to
/// placeholder values for the required fields.
fn rejected_field(fields: &Map<String, Value>) -> Option<&str> {
    fields.iter().find_map(|(key, value)| {
        let mut single = Map::new();
        single.insert("id".to_string(), Value::from(0));
        single.insert("value".to_string(), Value::from(0));
        single.insert(key.clone(), value.clone());
        AssetMetrics::deserialize(&Value::Object(single))
            .is_err()
            .then_some(key.as_str())
    })
}

/// Parses assets from CSV with a header row.
pub fn parse_csv<R: Read>(reader: R) -> CliResult<Vec<AssetMetrics>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?;
    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .find(|f| !headers.iter().any(|h| h == **f))
    {
        return Err(PortfolioError::missing_field(*field).into());
    }

    let mut assets = Vec::new();
    for record in rdr.deserialize() {
        assets.push(record?);
    }
    Ok(assets)
}
