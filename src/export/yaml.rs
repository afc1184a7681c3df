//! YAML Export functionality
//!
//! Exports the computed dashboard to YAML for human-readable snapshots.

use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::export::json::DashboardExport;
use crate::reports::DashboardReport;

/// Export the dashboard to YAML format
pub fn export_dashboard_yaml<W: Write>(report: &DashboardReport, writer: &mut W) -> FinboardResult<()> {
    let export = DashboardExport::new(report);

    writeln!(writer, "# finboard dashboard export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# Reference date: {}", report.reference_date)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinboardError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{Account, AccountType, Money};
    use crate::storage::Snapshot;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let snapshot = Snapshot::new(
            vec![Account::new(1, "Ahorros", AccountType::Liquid, Money::from_cents(250000))],
            Vec::new(),
            Vec::new(),
        );
        let report = DashboardReport::generate(
            &snapshot,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            &Settings::default(),
        );

        let mut yaml_output = Vec::new();
        export_dashboard_yaml(&report, &mut yaml_output).unwrap();

        let yaml_string = String::from_utf8(yaml_output).unwrap();
        assert!(yaml_string.starts_with("# finboard dashboard export"));
        assert!(yaml_string.contains("# Reference date: 2024-03-01"));

        let body: String = yaml_string
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let value: serde_yaml::Value = serde_yaml::from_str(&body).unwrap();
        assert_eq!(value["dashboard"]["total_balance"].as_str(), Some("2500.00"));
        assert_eq!(value["dashboard"]["accounts_count"].as_u64(), Some(1));
    }
}
