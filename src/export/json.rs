//! JSON Export functionality
//!
//! Exports the computed dashboard to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{FinboardError, FinboardResult};
use crate::reports::DashboardReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export envelope
#[derive(Debug, Clone, Serialize)]
pub struct DashboardExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub dashboard: &'a DashboardReport,
}

impl<'a> DashboardExport<'a> {
    pub fn new(dashboard: &'a DashboardReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            dashboard,
        }
    }
}

/// Export the dashboard to JSON
pub fn export_dashboard_json<W: Write>(
    report: &DashboardReport,
    writer: &mut W,
    pretty: bool,
) -> FinboardResult<()> {
    let export = DashboardExport::new(report);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| FinboardError::Export(e.to_string()))?;

    writeln!(writer)?;
    Ok(())
}
