//! Dashboard aggregation engine
//!
//! Pure functions from account and transaction lists to KPI figures. Nothing
//! here touches the filesystem or the clock: callers pass the reference date.

pub mod balances;
pub mod flows;
pub mod records;
pub mod series;
pub mod summary;
pub mod validate;

pub use balances::{liquidity_and_debt, total_balance, LiquidityAndDebt, UnclassifiedAccounts};
pub use flows::{current_month_flows, MonthlyFlows};
pub use records::{partition, Posting, RecordIssue, RecordIssues};
pub use series::{monthly_series, six_month_series, CashFlowSeries, MonthlyBucket, DASHBOARD_MONTHS};
pub use summary::{financial_summary, DateRange, FinancialSummary};
pub use validate::{normalize, normalize_accounts, validate, ValidationReport};
