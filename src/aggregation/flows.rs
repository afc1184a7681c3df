//! Current-month income and expense

use chrono::NaiveDate;
use serde::Serialize;

use super::records::{partition, RecordIssues};
use crate::models::{Money, MonthKey, Transaction};

/// Income and expense for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFlows {
    pub month: MonthKey,
    /// Sum of income amounts
    pub income: Money,
    /// Sum of absolute expense amounts
    pub expense: Money,
    /// Income minus expense
    pub net: Money,
    /// Postings dated in the month, of any type
    pub transaction_count: usize,
    /// Transactions left out because they could not be read
    pub issues: RecordIssues,
}

/// Income and expense for the month containing `reference_date`
///
/// Both month and year must match; transfers count toward neither sum.
pub fn current_month_flows(transactions: &[Transaction], reference_date: NaiveDate) -> MonthlyFlows {
    let month = MonthKey::from_date(reference_date);
    let (postings, issues) = partition(transactions);

    let mut income = Money::zero();
    let mut expense = Money::zero();
    let mut transaction_count = 0;

    for posting in postings.iter().filter(|p| month.contains(p.date)) {
        transaction_count += 1;
        if let Some(amount) = posting.income() {
            income += amount;
        }
        if let Some(amount) = posting.expense() {
            expense += amount;
        }
    }

    if !issues.is_clean() {
        log::warn!(
            "{} transaction(s) skipped while computing flows for {}",
            issues.total(),
            month
        );
    }

    MonthlyFlows {
        month,
        income,
        expense,
        net: income - expense,
        transaction_count,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(id: u64, kind: TransactionType, cents: i64, date: &str) -> Transaction {
        Transaction::new(id, 1, kind, Money::from_cents(cents), date)
    }

    #[test]
    fn test_income_and_absolute_expense() {
        let transactions = vec![
            txn(1, TransactionType::Income, 50000, "2024-05-03"),
            txn(2, TransactionType::Expense, -20000, "2024-05-10"),
        ];

        let flows = current_month_flows(&transactions, date(2024, 5, 20));
        assert_eq!(flows.income.cents(), 50000);
        assert_eq!(flows.expense.cents(), 20000);
        assert_eq!(flows.net.cents(), 30000);
        assert_eq!(flows.transaction_count, 2);
        assert!(flows.issues.is_clean());
    }

    #[test]
    fn test_same_month_previous_year_is_excluded() {
        let transactions = vec![
            txn(1, TransactionType::Income, 10000, "2024-03-15"),
            txn(2, TransactionType::Income, 99999, "2023-03-15"),
            txn(3, TransactionType::Expense, -5000, "2023-03-01"),
        ];

        let flows = current_month_flows(&transactions, date(2024, 3, 1));
        assert_eq!(flows.income.cents(), 10000);
        assert_eq!(flows.expense, Money::zero());
        assert_eq!(flows.transaction_count, 1);
    }

    #[test]
    fn test_transfers_are_excluded() {
        let transactions = vec![
            txn(1, TransactionType::Transfer, 70000, "2024-03-02"),
            txn(2, TransactionType::Transfer, -70000, "2024-03-02"),
            txn(3, TransactionType::parse("REFUND"), 100, "2024-03-02"),
        ];

        let flows = current_month_flows(&transactions, date(2024, 3, 31));
        assert_eq!(flows.income, Money::zero());
        assert_eq!(flows.expense, Money::zero());
        assert_eq!(flows.transaction_count, 3);
    }

    #[test]
    fn test_month_boundaries() {
        let transactions = vec![
            txn(1, TransactionType::Income, 100, "2024-02-29"),
            txn(2, TransactionType::Income, 200, "2024-03-01"),
            txn(3, TransactionType::Income, 400, "2024-03-31T23:59:59.000000Z"),
            txn(4, TransactionType::Income, 800, "2024-04-01"),
        ];

        let flows = current_month_flows(&transactions, date(2024, 3, 15));
        assert_eq!(flows.income.cents(), 600);
    }

    #[test]
    fn test_unparseable_records_are_counted() {
        let mut no_amount = txn(3, TransactionType::Expense, 0, "2024-03-02");
        no_amount.amount = None;

        let transactions = vec![
            txn(1, TransactionType::Income, 100, "2024-03-02"),
            txn(2, TransactionType::Income, 100, "03/02/2024"),
            no_amount,
        ];

        let flows = current_month_flows(&transactions, date(2024, 3, 2));
        assert_eq!(flows.income.cents(), 100);
        assert_eq!(flows.issues.unparseable_dates, 1);
        assert_eq!(flows.issues.missing_amounts, 1);
    }

    #[test]
    fn test_empty_input_is_zero() {
        let flows = current_month_flows(&[], date(2024, 1, 1));
        assert_eq!(flows.income, Money::zero());
        assert_eq!(flows.expense, Money::zero());
        assert_eq!(flows.month, MonthKey::new(2024, 0).unwrap());
    }

    #[test]
    fn test_idempotent() {
        let transactions = vec![
            txn(1, TransactionType::Income, 12345, "2024-06-01"),
            txn(2, TransactionType::Expense, 678, "2024-06-02"),
        ];
        let first = current_month_flows(&transactions, date(2024, 6, 30));
        let second = current_month_flows(&transactions, date(2024, 6, 30));
        assert_eq!(first, second);
    }
}
