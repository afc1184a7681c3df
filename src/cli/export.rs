//! CLI commands for data export
//!
//! Writes the dashboard as JSON, YAML or CSV, to a file or stdout.

use clap::ValueEnum;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::args::{create_output, reference_date};
use crate::config::paths::FinboardPaths;
use crate::config::settings::Settings;
use crate::error::FinboardResult;
use crate::export::{export_dashboard_csv, export_dashboard_json, export_dashboard_yaml};
use crate::reports::DashboardReport;
use crate::storage::Snapshot;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full dashboard)
    Json,
    /// YAML format (full dashboard, human-readable)
    Yaml,
    /// CSV format (monthly series only)
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

fn write_export<W: Write>(
    report: &DashboardReport,
    format: ExportFormat,
    pretty: bool,
    mut writer: W,
) -> FinboardResult<()> {
    match format {
        ExportFormat::Json => export_dashboard_json(report, &mut writer, pretty)?,
        ExportFormat::Yaml => export_dashboard_yaml(report, &mut writer)?,
        ExportFormat::Csv => export_dashboard_csv(report, &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Default file for `--save`: `exports/dashboard-<date>.<ext>`
pub fn default_export_path(paths: &FinboardPaths, format: ExportFormat, date: chrono::NaiveDate) -> PathBuf {
    paths
        .export_dir()
        .join(format!("dashboard-{}.{}", date.format("%Y-%m-%d"), format.extension()))
}

/// Handle the export command
///
/// Writes to `output` if given, to the export directory with `save`, and to
/// stdout otherwise.
#[allow(clippy::too_many_arguments)]
pub fn handle_export_command(
    paths: &FinboardPaths,
    snapshot: &Snapshot,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
    save: bool,
    as_of: Option<String>,
    pretty: bool,
) -> FinboardResult<()> {
    let reference = reference_date(as_of)?;
    let report = DashboardReport::generate(snapshot, reference, settings);

    let output = match output {
        Some(path) => Some(path),
        None if save => Some(default_export_path(paths, format, reference)),
        None => None,
    };

    match output {
        Some(path) => {
            write_export(&report, format, pretty, create_output(&path)?)?;
            println!("Dashboard exported to: {}", path.display());
        }
        None => write_export(&report, format, pretty, std::io::stdout().lock())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_default_export_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        assert_eq!(
            default_export_path(&paths, ExportFormat::Yaml, date),
            temp_dir.path().join("exports").join("dashboard-2024-01-15.yaml")
        );
    }

    #[test]
    fn test_save_writes_into_export_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinboardPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_export_command(
            &paths,
            &Snapshot::default(),
            &Settings::default(),
            ExportFormat::Csv,
            None,
            true,
            Some("2024-01-15".into()),
            false,
        )
        .unwrap();

        let written = std::fs::read_to_string(temp_dir.path().join("exports/dashboard-2024-01-15.csv")).unwrap();
        assert!(written.starts_with("Month,Label,Income,Expense,Net\n2023-08,Ago,0.00,0.00,0.00\n"));
        assert_eq!(written.lines().count(), 7);
    }
}
