//! Snapshot validation command

use crate::aggregation::validate;
use crate::config::settings::Settings;
use crate::error::{FinboardError, FinboardResult};
use crate::storage::Snapshot;

/// Handle the validate command
///
/// With `strict`, any problem is returned as a validation error so the
/// process exits non-zero.
pub fn handle_validate_command(
    snapshot: &Snapshot,
    settings: &Settings,
    strict: bool,
) -> FinboardResult<()> {
    let report = validate(snapshot, settings.credit_balance_sign);

    println!("Snapshot Validation");
    println!("{}", "=".repeat(40));
    println!("  Accounts checked:     {}", report.accounts_checked);
    println!("  Transactions checked: {}", report.transactions_checked);
    println!("  Credit sign convention: {:?}", settings.credit_balance_sign);
    println!();

    if report.is_clean() {
        println!("No problems found.");
        return Ok(());
    }

    println!("{} problem(s) found:", report.issue_count());
    for line in report.lines() {
        println!("  - {}", line);
    }

    if strict {
        return Err(FinboardError::Validation(format!(
            "snapshot has {} problem(s)",
            report.issue_count()
        )));
    }

    Ok(())
}
