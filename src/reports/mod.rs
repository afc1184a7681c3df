//! Reports module for finboard
//!
//! Turns aggregation results into terminal layouts and CSV: the full
//! dashboard, account balances, the cash-flow chart and the financial summary.

pub mod balance;
pub mod cash_flow;
pub mod dashboard;
pub mod summary;

pub use balance::{AccountBalance, AccountTypeGroup, BalanceReport};
pub use cash_flow::{format_month_flows, CashFlowReport, CashFlowRow};
pub use dashboard::{DashboardReport, RecentTransaction};
pub use summary::format_summary;
