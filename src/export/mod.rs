//! Export module for finboard
//!
//! Writes the computed dashboard in three formats:
//! - JSON: machine-readable, with a schema version
//! - YAML: the same document for human reading
//! - CSV: the monthly series, or a transaction listing

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_dashboard_csv, export_transactions_csv};
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
