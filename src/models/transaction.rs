//! Transaction model
//!
//! Represents transactions as returned by `GET /transactions`. Dates stay in
//! their wire form until the aggregation layer parses them, so that one
//! malformed record can be reported instead of failing the whole snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::{Money, RawAmount};

/// Classification of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
    /// A classification this crate does not know about
    Unrecognized(String),
}

impl TransactionType {
    /// Parse transaction type from string (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "INCOME" => Self::Income,
            "EXPENSE" => Self::Expense,
            "TRANSFER" => Self::Transfer,
            _ => Self::Unrecognized(s.to_string()),
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
            Self::Transfer => "TRANSFER",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for TransactionType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TransactionType> for String {
    fn from(t: TransactionType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
            Self::Transfer => f.pad("Transfer"),
            Self::Unrecognized(raw) => f.pad(&format!("Unknown ({})", raw)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Amount as sent; absent or unreadable in malformed records
    #[serde(default)]
    pub amount: Option<RawAmount>,

    /// Classification
    #[serde(rename = "type", default = "unclassified", deserialize_with = "lenient_type")]
    pub transaction_type: TransactionType,

    /// Occurrence date as sent by the API (ISO calendar date)
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,

    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_recurring: bool,

    /// Category relation, when the API eagerly loaded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

fn unclassified() -> TransactionType {
    TransactionType::Unrecognized(String::new())
}

/// Text field where `null` reads as empty and other values keep their JSON text
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_type<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TransactionType, D::Error> {
    lenient_text(deserializer).map(|raw| TransactionType::parse(&raw))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Transaction {
    /// Create a new transaction from raw API ids
    pub fn new(
        id: u64,
        account_id: u64,
        transaction_type: TransactionType,
        amount: Money,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(id),
            account_id: AccountId::new(account_id),
            category_id: None,
            amount: Some(RawAmount::Valid(amount)),
            transaction_type,
            date: date.into(),
            description: String::new(),
            reference: None,
            is_recurring: false,
            category: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category reference
    pub fn with_category(mut self, category_id: u64) -> Self {
        self.category_id = Some(CategoryId::new(category_id));
        self
    }

    /// The amount, when present and readable
    pub fn valid_amount(&self) -> Option<Money> {
        self.amount.as_ref().and_then(RawAmount::valid)
    }

    /// Parse the occurrence date as a calendar date
    pub fn parsed_date(&self) -> Result<NaiveDate, DateParseError> {
        parse_calendar_date(&self.date)
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_transfer(&self) -> bool {
        self.transaction_type == TransactionType::Transfer
    }

    /// Category id, taken from the eager-loaded relation if the key is absent
    pub fn effective_category_id(&self) -> Option<CategoryId> {
        self.category_id
            .or_else(|| self.category.as_ref().map(|c| c.id))
    }
}

/// Parse an API date string as a calendar date
///
/// Accepts "YYYY-MM-DD" and datetimes that start with it
/// ("2024-01-15T00:00:00.000000Z", "2024-01-15 08:30:00"). The calendar date
/// is taken as written; no time-zone conversion is applied.
pub fn parse_calendar_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(DateParseError::Missing);
    }

    let date_part = match s.get(..10) {
        Some(prefix) if s.len() == 10 => prefix,
        Some(prefix) if s[10..].starts_with(|c: char| matches!(c, 'T' | 't' | ' ')) => prefix,
        _ => return Err(DateParseError::Invalid(s.to_string())),
    };

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| DateParseError::Invalid(s.to_string()))
}

/// Error type for transaction date parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    Missing,
    Invalid(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Transaction date is missing"),
            Self::Invalid(s) => write!(f, "Invalid transaction date: {}", s),
        }
    }
}

impl std::error::Error for DateParseError {}
