//! Financial summary over a date range
//!
//! Mirrors the shape of the API's `/finances/summary` endpoint so the same
//! figures can be produced offline from a snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use super::balances::total_balance;
use super::records::{partition, RecordIssues};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Account, Money, Transaction};

/// Inclusive date range; open on either side when a bound is `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> FinboardResult<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                return Err(FinboardError::Validation(format!(
                    "Range start {} is after its end {}",
                    f, t
                )));
            }
        }
        Ok(Self { from, to })
    }

    /// The unbounded range
    pub fn all() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.map_or(true, |f| date >= f) && self.to.map_or(true, |t| date <= t)
    }
}

/// Totals matching the API's summary endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    pub total_balance: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Income minus expenses
    pub net_balance: Money,
    pub accounts_count: usize,
    /// Transactions dated within the range
    pub transactions_count: usize,
    pub range: DateRange,
    pub issues: RecordIssues,
}

/// Summarize balances and the transactions dated inside `range`
pub fn financial_summary(
    accounts: &[Account],
    transactions: &[Transaction],
    range: DateRange,
) -> FinancialSummary {
    let (postings, issues) = partition(transactions);

    let mut total_income = Money::zero();
    let mut total_expenses = Money::zero();
    let mut transactions_count = 0;

    for posting in postings.iter().filter(|p| range.contains(p.date)) {
        transactions_count += 1;
        if let Some(amount) = posting.income() {
            total_income += amount;
        }
        if let Some(amount) = posting.expense() {
            total_expenses += amount;
        }
    }

    FinancialSummary {
        total_balance: total_balance(accounts),
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
        accounts_count: accounts.len(),
        transactions_count,
        range,
        issues,
    }
}
