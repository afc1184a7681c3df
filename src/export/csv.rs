//! CSV Export functionality
//!
//! Exports the dashboard's cash-flow series and transaction listings to CSV.

use std::collections::HashMap;
use std::io::Write;

use crate::display::category_label;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Account, CategoryNames, RawAmount, Transaction};
use crate::reports::DashboardReport;

fn export_err(e: csv::Error) -> FinboardError {
    FinboardError::Export(e.to_string())
}

/// Export the dashboard's monthly series to CSV
pub fn export_dashboard_csv<W: Write>(report: &DashboardReport, writer: W) -> FinboardResult<()> {
    report.cash_flow.export_csv(writer)
}

/// Export transactions to CSV, in the order given
///
/// Records the engine would skip are still written, with their raw date and
/// amount as sent (empty when absent).
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    accounts: &[Account],
    categories: &CategoryNames,
    writer: W,
) -> FinboardResult<()> {
    let account_names: HashMap<_, _> = accounts.iter().map(|a| (a.id, a.display_name())).collect();

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Account", "Type", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    for txn in transactions {
        let account_name = account_names
            .get(&txn.account_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        csv.write_record([
            txn.id.value().to_string(),
            txn.date.clone(),
            account_name,
            txn.transaction_type.as_str().to_string(),
            category_label(txn, categories),
            txn.description.clone(),
            match &txn.amount {
                Some(RawAmount::Valid(amount)) => amount.to_decimal_string(),
                Some(RawAmount::Invalid(raw)) => raw.clone(),
                None => String::new(),
            },
        ])
        .map_err(export_err)?;
    }

    csv.flush()?;
    Ok(())
}
