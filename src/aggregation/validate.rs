//! Snapshot validation and boundary normalization
//!
//! Contract problems in a snapshot (duplicate ids, transactions pointing at
//! unknown accounts, unknown classifications, unreadable records, credit
//! balances with the wrong sign) are collected into a `ValidationReport`.
//! None of them stops the dashboard from rendering.

use std::collections::HashSet;

use serde::Serialize;

use super::records::{Posting, RecordIssue};
use crate::models::{Account, AccountId, CreditBalanceSign, TransactionId};
use crate::storage::Snapshot;

/// Rewrite credit balances so that debt is signed negative
pub fn normalize_accounts(accounts: &[Account], convention: CreditBalanceSign) -> Vec<Account> {
    accounts
        .iter()
        .map(|account| Account {
            current_balance: account.normalized_balance(convention),
            ..account.clone()
        })
        .collect()
}

/// Copy of the snapshot with credit balances normalized
pub fn normalize(snapshot: &Snapshot, convention: CreditBalanceSign) -> Snapshot {
    Snapshot {
        accounts: normalize_accounts(&snapshot.accounts, convention),
        ..snapshot.clone()
    }
}

/// Contract problems found in a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub accounts_checked: usize,
    pub transactions_checked: usize,
    /// Account ids appearing more than once
    pub duplicate_account_ids: Vec<AccountId>,
    /// Transaction ids appearing more than once
    pub duplicate_transaction_ids: Vec<TransactionId>,
    /// Accounts whose type is neither liquid nor credit
    pub unclassified_accounts: Vec<AccountId>,
    /// Credit accounts holding a positive balance after normalization
    pub credit_sign_anomalies: Vec<AccountId>,
    /// Transactions referencing an account missing from the snapshot
    pub orphaned_transactions: Vec<TransactionId>,
    /// Transactions whose type is not income, expense or transfer
    pub unclassified_transactions: Vec<TransactionId>,
    /// Transactions referencing a category missing from the snapshot
    pub unknown_categories: Vec<TransactionId>,
    pub unparseable_dates: Vec<TransactionId>,
    pub missing_amounts: Vec<TransactionId>,
    /// Transactions whose amount is present but unreadable
    pub invalid_amounts: Vec<TransactionId>,
}

impl ValidationReport {
    /// Total number of problems found
    pub fn issue_count(&self) -> usize {
        self.duplicate_account_ids.len()
            + self.duplicate_transaction_ids.len()
            + self.unclassified_accounts.len()
            + self.credit_sign_anomalies.len()
            + self.orphaned_transactions.len()
            + self.unclassified_transactions.len()
            + self.unknown_categories.len()
            + self.unparseable_dates.len()
            + self.missing_amounts.len()
            + self.invalid_amounts.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    /// One line per non-empty problem class, for terminal output
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        push_line(&mut lines, "duplicate account id(s)", &self.duplicate_account_ids);
        push_line(&mut lines, "duplicate transaction id(s)", &self.duplicate_transaction_ids);
        push_line(&mut lines, "account(s) with unrecognized type", &self.unclassified_accounts);
        push_line(&mut lines, "credit account(s) with positive balance", &self.credit_sign_anomalies);
        push_line(&mut lines, "transaction(s) for unknown accounts", &self.orphaned_transactions);
        push_line(&mut lines, "transaction(s) with unrecognized type", &self.unclassified_transactions);
        push_line(&mut lines, "transaction(s) with unknown category", &self.unknown_categories);
        push_line(&mut lines, "transaction(s) with unparseable date", &self.unparseable_dates);
        push_line(&mut lines, "transaction(s) without amount", &self.missing_amounts);
        push_line(&mut lines, "transaction(s) with unreadable amount", &self.invalid_amounts);
        lines
    }
}

fn push_line<T: std::fmt::Display>(lines: &mut Vec<String>, label: &str, ids: &[T]) {
    if ids.is_empty() {
        return;
    }
    let shown: Vec<String> = ids.iter().take(5).map(|id| id.to_string()).collect();
    let more = if ids.len() > 5 {
        format!(", +{} more", ids.len() - 5)
    } else {
        String::new()
    };
    lines.push(format!("{} {}: {}{}", ids.len(), label, shown.join(", "), more));
}

/// Check a snapshot against the API's data contract
///
/// `convention` is the sign convention the raw (unnormalized) snapshot uses.
/// The unknown-category check only runs when the snapshot has categories.
pub fn validate(snapshot: &Snapshot, convention: CreditBalanceSign) -> ValidationReport {
    let mut report = ValidationReport {
        accounts_checked: snapshot.accounts.len(),
        transactions_checked: snapshot.transactions.len(),
        ..ValidationReport::default()
    };

    let mut account_ids = HashSet::new();
    for account in &snapshot.accounts {
        if !account_ids.insert(account.id) && !report.duplicate_account_ids.contains(&account.id) {
            report.duplicate_account_ids.push(account.id);
        }
        if !account.account_type.is_recognized() {
            report.unclassified_accounts.push(account.id);
        }
        if account.account_type.is_liability() && account.normalized_balance(convention).is_positive() {
            report.credit_sign_anomalies.push(account.id);
        }
    }

    let category_ids: HashSet<_> = snapshot.categories.iter().map(|c| c.id).collect();
    let mut transaction_ids = HashSet::new();

    for txn in &snapshot.transactions {
        if !transaction_ids.insert(txn.id) && !report.duplicate_transaction_ids.contains(&txn.id) {
            report.duplicate_transaction_ids.push(txn.id);
        }
        if !account_ids.contains(&txn.account_id) {
            report.orphaned_transactions.push(txn.id);
        }
        if !txn.transaction_type.is_recognized() {
            report.unclassified_transactions.push(txn.id);
        }
        if !category_ids.is_empty() {
            if let Some(category_id) = txn.effective_category_id() {
                if !category_ids.contains(&category_id) {
                    report.unknown_categories.push(txn.id);
                }
            }
        }
        match Posting::try_from_transaction(txn) {
            Ok(_) => {}
            Err(RecordIssue::UnparseableDate) => report.unparseable_dates.push(txn.id),
            Err(RecordIssue::MissingAmount) => report.missing_amounts.push(txn.id),
            Err(RecordIssue::InvalidAmount) => report.invalid_amounts.push(txn.id),
        }
    }

    if report.is_clean() {
        log::debug!(
            "Snapshot valid: {} accounts, {} transactions",
            report.accounts_checked,
            report.transactions_checked
        );
    } else {
        log::warn!("Snapshot has {} data contract issue(s)", report.issue_count());
    }

    report
}
