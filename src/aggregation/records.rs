//! Per-record checks shared by every aggregation
//!
//! Each transaction is turned into a `Posting` (a parsed date plus a readable
//! amount)
//! on its own. A record that cannot be posted is tallied in `RecordIssues`
//! and left out of every sum, without affecting the others.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Money, RawAmount, Transaction, TransactionType};

/// Why a transaction could not take part in an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordIssue {
    UnparseableDate,
    MissingAmount,
    /// An amount that is present but not a decimal with at most two places
    InvalidAmount,
}

/// Tally of quarantined transactions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordIssues {
    pub unparseable_dates: usize,
    pub missing_amounts: usize,
    pub invalid_amounts: usize,
}

impl RecordIssues {
    pub fn record(&mut self, issue: RecordIssue) {
        match issue {
            RecordIssue::UnparseableDate => self.unparseable_dates += 1,
            RecordIssue::MissingAmount => self.missing_amounts += 1,
            RecordIssue::InvalidAmount => self.invalid_amounts += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.unparseable_dates + self.missing_amounts + self.invalid_amounts
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// A transaction with a usable date and amount
#[derive(Debug, Clone, Copy)]
pub struct Posting<'a> {
    pub transaction: &'a Transaction,
    pub date: NaiveDate,
    pub amount: Money,
}

impl<'a> Posting<'a> {
    /// Check one transaction; the date is checked before the amount
    pub fn try_from_transaction(transaction: &'a Transaction) -> Result<Self, RecordIssue> {
        let date = transaction
            .parsed_date()
            .map_err(|_| RecordIssue::UnparseableDate)?;
        let amount = match &transaction.amount {
            Some(RawAmount::Valid(amount)) => *amount,
            Some(RawAmount::Invalid(_)) => return Err(RecordIssue::InvalidAmount),
            None => return Err(RecordIssue::MissingAmount),
        };
        Ok(Self {
            transaction,
            date,
            amount,
        })
    }

    /// Contribution to income: the amount as given, for income records only
    pub fn income(&self) -> Option<Money> {
        (self.transaction.transaction_type == TransactionType::Income).then_some(self.amount)
    }

    /// Contribution to expense: the absolute amount, for expense records only
    ///
    /// Upstream stores expenses both signed and unsigned.
    pub fn expense(&self) -> Option<Money> {
        (self.transaction.transaction_type == TransactionType::Expense).then(|| self.amount.abs())
    }
}

/// Split transactions into postings and a tally of the ones left out
pub fn partition(transactions: &[Transaction]) -> (Vec<Posting<'_>>, RecordIssues) {
    let mut issues = RecordIssues::default();
    let mut postings = Vec::with_capacity(transactions.len());

    for txn in transactions {
        match Posting::try_from_transaction(txn) {
            Ok(posting) => postings.push(posting),
            Err(issue) => {
                log::debug!("Quarantined transaction {}: {:?}", txn.id, issue);
                issues.record(issue);
            }
        }
    }

    (postings, issues)
}
