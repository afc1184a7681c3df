//! Transaction listing queries
//!
//! Reproduces the filters and pagination of `GET /transactions` over a local
//! snapshot: `page`, `per_page`, `account_id`, `category_id`, `type`,
//! `date_from` and `date_to`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::response::PaginatedResponse;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{AccountId, CategoryId, Transaction, TransactionType};

/// Largest page size accepted
pub const MAX_PER_PAGE: usize = 500;

/// Filters and pagination for a transaction listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// One-based page number
    pub page: usize,
    pub per_page: usize,
    pub account_id: Option<AccountId>,
    pub category_id: Option<CategoryId>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    /// Inclusive lower bound
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound
    pub date_to: Option<NaiveDate>,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 15,
            account_id: None,
            category_id: None,
            transaction_type: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl TransactionQuery {
    /// Create a query for the first page with the given page size
    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    pub fn has_date_filter(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    /// Check the query parameters are usable
    pub fn validate(&self) -> FinboardResult<()> {
        if self.page == 0 {
            return Err(FinboardError::Query("page must be at least 1".into()));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(FinboardError::Query(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(FinboardError::Query(format!(
                    "date_from {} is after date_to {}",
                    from, to
                )));
            }
        }
        if let Some(TransactionType::Unrecognized(raw)) = &self.transaction_type {
            return Err(FinboardError::Query(format!(
                "Invalid transaction type: '{}'. Valid types: income, expense, transfer",
                raw
            )));
        }
        Ok(())
    }

    /// Check whether a transaction passes every filter
    ///
    /// With a date filter set, transactions whose date does not parse never
    /// match.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(account_id) = self.account_id {
            if txn.account_id != account_id {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if txn.effective_category_id() != Some(category_id) {
                return false;
            }
        }
        if let Some(transaction_type) = &self.transaction_type {
            if &txn.transaction_type != transaction_type {
                return false;
            }
        }
        if self.has_date_filter() {
            let Ok(date) = txn.parsed_date() else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }
        true
    }

    /// Run the query over a snapshot, keeping the snapshot's order
    pub fn apply(&self, transactions: &[Transaction]) -> FinboardResult<PaginatedResponse<Transaction>> {
        self.validate()?;

        let matching: Vec<Transaction> = transactions
            .iter()
            .filter(|txn| self.matches(txn))
            .cloned()
            .collect();

        log::debug!(
            "Transaction query matched {} of {} records",
            matching.len(),
            transactions.len()
        );

        Ok(PaginatedResponse::paginate(matching, self.page, self.per_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::new(1, 1, TransactionType::Income, Money::from_cents(50000), "2024-01-05")
                .with_category(10),
            Transaction::new(2, 1, TransactionType::Expense, Money::from_cents(-2000), "2024-01-20")
                .with_category(20),
            Transaction::new(3, 2, TransactionType::Expense, Money::from_cents(-1500), "2024-02-02")
                .with_category(20),
            Transaction::new(4, 2, TransactionType::Transfer, Money::from_cents(1000), "bad-date"),
        ]
    }

    #[test]
    fn test_default_matches_everything() {
        let page = TransactionQuery::default().apply(&sample()).unwrap();
        assert_eq!(page.total, 4);
        assert_eq!(page.data[0].id.value(), 1);
    }

    #[test]
    fn test_filter_by_account_and_type() {
        let query = TransactionQuery {
            account_id: Some(AccountId::new(2)),
            transaction_type: Some(TransactionType::Expense),
            ..TransactionQuery::default()
        };
        let page = query.apply(&sample()).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].id.value(), 3);
    }

    #[test]
    fn test_filter_by_category() {
        let query = TransactionQuery {
            category_id: Some(CategoryId::new(20)),
            ..TransactionQuery::default()
        };
        assert_eq!(query.apply(&sample()).unwrap().total, 2);
    }

    #[test]
    fn test_date_range_is_inclusive_and_skips_bad_dates() {
        let query = TransactionQuery {
            date_from: Some(date(2024, 1, 20)),
            date_to: Some(date(2024, 2, 2)),
            ..TransactionQuery::default()
        };
        let page = query.apply(&sample()).unwrap();
        let ids: Vec<u64> = page.data.iter().map(|t| t.id.value()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_pagination() {
        let query = TransactionQuery {
            page: 2,
            per_page: 3,
            ..TransactionQuery::default()
        };
        let page = query.apply(&sample()).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.from, Some(4));
    }

    #[test]
    fn test_validation() {
        let zero_page = TransactionQuery {
            page: 0,
            ..TransactionQuery::default()
        };
        assert!(zero_page.validate().is_err());

        let inverted = TransactionQuery {
            date_from: Some(date(2024, 3, 1)),
            date_to: Some(date(2024, 1, 1)),
            ..TransactionQuery::default()
        };
        assert!(inverted.apply(&sample()).is_err());

        let unknown_type = TransactionQuery {
            transaction_type: Some(TransactionType::parse("refund")),
            ..TransactionQuery::default()
        };
        assert!(matches!(unknown_type.validate(), Err(FinboardError::Query(_))));

        assert!(TransactionQuery::with_per_page(MAX_PER_PAGE + 1).validate().is_err());
    }
}
