//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, bars, and separators.

pub mod account;
pub mod report;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::{
    category_label, format_transaction_page, format_transaction_register, format_transaction_row,
};
