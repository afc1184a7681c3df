//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with reports and storage.

pub mod account;
pub mod args;
pub mod dashboard;
pub mod export;
pub mod import;
pub mod report;
pub mod transaction;
pub mod validate;

pub use account::handle_accounts_command;
pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportFormat};
pub use import::handle_import_command;
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transactions_command, TransactionListArgs};
pub use validate::handle_validate_command;
