//! Argument parsing shared by the command handlers

use chrono::NaiveDate;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{FinboardError, FinboardResult};

/// Parse a `YYYY-MM-DD` argument
pub fn parse_date(value: &str, what: &str) -> FinboardResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        FinboardError::Validation(format!(
            "Invalid {} date format: {}. Use YYYY-MM-DD",
            what, value
        ))
    })
}

/// Parse an optional `YYYY-MM-DD` argument
pub fn parse_optional_date(value: Option<String>, what: &str) -> FinboardResult<Option<NaiveDate>> {
    value.map(|s| parse_date(&s, what)).transpose()
}

/// The `--as-of` date, defaulting to today in local time
pub fn reference_date(as_of: Option<String>) -> FinboardResult<NaiveDate> {
    match as_of {
        Some(s) => parse_date(&s, "as-of"),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a numeric API id, with or without its display prefix
pub fn parse_id<T>(value: &str, entity: &str) -> FinboardResult<T>
where
    T: std::str::FromStr,
{
    value.trim().parse().map_err(|_| {
        FinboardError::Validation(format!("Invalid {} id: '{}'", entity, value))
    })
}

/// Create an output file for an export
pub fn create_output(path: &Path) -> FinboardResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).map_err(|e| {
        FinboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
