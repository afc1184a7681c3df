//! Core data models for finboard
//!
//! This module contains the records the finance API returns (accounts,
//! transactions, categories) plus the value types the dashboard computes
//! with: money amounts, typed ids and calendar month keys.

pub mod account;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use account::{Account, AccountType, CreditBalanceSign};
pub use category::{Category, CategoryNames};
pub use ids::{AccountId, CategoryId, TransactionId, UserId};
pub use money::{Money, MoneyParseError, RawAmount};
pub use month::{MonthKey, MonthKeyParseError};
pub use transaction::{parse_calendar_date, DateParseError, Transaction, TransactionType};
