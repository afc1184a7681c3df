//! Monthly cash-flow series
//!
//! Buckets income and expense by calendar month over a window that ends at
//! the reference month. Every month in the window gets a bucket, empty or not.

use chrono::NaiveDate;
use serde::Serialize;

use super::records::{partition, RecordIssues};
use crate::models::{Money, MonthKey, Transaction};

/// Months covered by the dashboard chart
pub const DASHBOARD_MONTHS: u32 = 6;

/// Income and expense summed over one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    #[serde(flatten)]
    pub month: MonthKey,
    pub income: Money,
    /// Sum of absolute expense amounts
    pub expense: Money,
}

impl MonthlyBucket {
    pub fn empty(month: MonthKey) -> Self {
        Self {
            month,
            income: Money::zero(),
            expense: Money::zero(),
        }
    }

    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// An ordered run of monthly buckets, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CashFlowSeries {
    pub buckets: Vec<MonthlyBucket>,
    /// Transactions left out because they could not be read
    pub issues: RecordIssues,
}

impl CashFlowSeries {
    pub fn total_income(&self) -> Money {
        self.buckets.iter().map(|b| b.income).sum()
    }

    pub fn total_expense(&self) -> Money {
        self.buckets.iter().map(|b| b.expense).sum()
    }

    /// Largest income or expense in any bucket, for chart scaling
    pub fn peak(&self) -> Money {
        self.buckets
            .iter()
            .flat_map(|b| [b.income, b.expense])
            .max()
            .unwrap_or_default()
    }
}

/// Six buckets ending at the month of `reference_date`
pub fn six_month_series(transactions: &[Transaction], reference_date: NaiveDate) -> CashFlowSeries {
    monthly_series(transactions, reference_date, DASHBOARD_MONTHS)
}

/// `months` buckets ending at the month of `reference_date`
///
/// A window of zero months yields no buckets.
pub fn monthly_series(
    transactions: &[Transaction],
    reference_date: NaiveDate,
    months: u32,
) -> CashFlowSeries {
    let last = MonthKey::from_date(reference_date);
    let mut buckets: Vec<MonthlyBucket> = last
        .trailing(months)
        .into_iter()
        .map(MonthlyBucket::empty)
        .collect();

    let (postings, issues) = partition(transactions);

    if let Some(first) = buckets.first().map(|b| b.month) {
        for posting in &postings {
            let offset = MonthKey::from_date(posting.date).ordinal() - first.ordinal();
            let Some(bucket) = usize::try_from(offset).ok().and_then(|i| buckets.get_mut(i)) else {
                continue;
            };
            if let Some(amount) = posting.income() {
                bucket.income += amount;
            }
            if let Some(amount) = posting.expense() {
                bucket.expense += amount;
            }
        }
    }

    log::debug!(
        "Bucketed {} postings into {} months ending {}",
        postings.len(),
        buckets.len(),
        last
    );

    CashFlowSeries { buckets, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month - 1).unwrap()
    }

    fn txn(id: u64, kind: TransactionType, cents: i64, date: &str) -> Transaction {
        Transaction::new(id, 1, kind, Money::from_cents(cents), date)
    }

    #[test]
    fn test_january_reference_spans_previous_year() {
        let series = six_month_series(&[], date(2024, 1, 15));
        let months: Vec<MonthKey> = series.buckets.iter().map(|b| b.month).collect();
        assert_eq!(
            months,
            vec![
                key(2023, 8),
                key(2023, 9),
                key(2023, 10),
                key(2023, 11),
                key(2023, 12),
                key(2024, 1),
            ]
        );
    }

    #[test]
    fn test_empty_months_report_zero() {
        let series = six_month_series(&[], date(2024, 6, 1));
        assert_eq!(series.buckets.len(), 6);
        for bucket in &series.buckets {
            assert_eq!(bucket.income, Money::zero());
            assert_eq!(bucket.expense, Money::zero());
        }
        assert_eq!(series.peak(), Money::zero());
    }

    #[test]
    fn test_always_six_buckets_for_large_input() {
        let transactions: Vec<Transaction> = (0..10_000u64)
            .map(|i| {
                let month = (i % 12) as u32 + 1;
                let day = (i % 28) as u32 + 1;
                let year = 2020 + (i % 5) as i32;
                txn(
                    i,
                    if i % 2 == 0 {
                        TransactionType::Income
                    } else {
                        TransactionType::Expense
                    },
                    100,
                    &format!("{:04}-{:02}-{:02}", year, month, day),
                )
            })
            .collect();

        let series = six_month_series(&transactions, date(2023, 3, 10));
        assert_eq!(series.buckets.len(), 6);
        assert!(series
            .buckets
            .windows(2)
            .all(|pair| pair[0].month < pair[1].month));
    }

    #[test]
    fn test_bucketing_matches_month_and_year() {
        let transactions = vec![
            txn(1, TransactionType::Income, 1000, "2023-12-31"),
            txn(2, TransactionType::Expense, -250, "2023-12-01"),
            txn(3, TransactionType::Income, 500, "2024-01-01"),
            txn(4, TransactionType::Expense, 300, "2024-01-20"),
            // Same month number, one year earlier: outside the window
            txn(5, TransactionType::Income, 7777, "2023-01-20"),
            // Before the window
            txn(6, TransactionType::Income, 4242, "2023-07-31"),
            // After the reference month
            txn(7, TransactionType::Income, 9999, "2024-02-01"),
            txn(8, TransactionType::Transfer, 100000, "2024-01-05"),
        ];

        let series = six_month_series(&transactions, date(2024, 1, 15));
        let dec = series.buckets[4];
        let jan = series.buckets[5];

        assert_eq!(dec.month, key(2023, 12));
        assert_eq!(dec.income.cents(), 1000);
        assert_eq!(dec.expense.cents(), 250);
        assert_eq!(jan.income.cents(), 500);
        assert_eq!(jan.expense.cents(), 300);
        assert_eq!(series.buckets[0].income, Money::zero());
        assert_eq!(series.total_income().cents(), 1500);
        assert_eq!(series.total_expense().cents(), 550);
        assert_eq!(series.peak().cents(), 1000);
        assert_eq!(jan.net().cents(), 200);
    }

    #[test]
    fn test_bad_records_are_counted_once() {
        let transactions = vec![
            txn(1, TransactionType::Income, 100, "2024-01-02"),
            txn(2, TransactionType::Income, 100, "Invalid Date"),
        ];
        let series = six_month_series(&transactions, date(2024, 1, 15));
        assert_eq!(series.issues.unparseable_dates, 1);
        assert_eq!(series.total_income().cents(), 100);
    }

    #[test]
    fn test_custom_window_lengths() {
        let transactions = vec![txn(1, TransactionType::Income, 100, "2022-11-05")];

        let year = monthly_series(&transactions, date(2023, 10, 1), 12);
        assert_eq!(year.buckets.len(), 12);
        assert_eq!(year.buckets[0].month, key(2022, 11));
        assert_eq!(year.buckets[0].income.cents(), 100);

        let single = monthly_series(&transactions, date(2023, 10, 1), 1);
        assert_eq!(single.buckets.len(), 1);
        assert_eq!(single.total_income(), Money::zero());

        assert!(monthly_series(&transactions, date(2023, 10, 1), 0).buckets.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let transactions = vec![
            txn(1, TransactionType::Income, 100, "2024-01-02"),
            txn(2, TransactionType::Expense, -50, "2023-11-02"),
        ];
        assert_eq!(
            six_month_series(&transactions, date(2024, 1, 15)),
            six_month_series(&transactions, date(2024, 1, 15))
        );
    }
}
