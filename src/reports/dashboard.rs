//! Dashboard Report
//!
//! Everything the dashboard page shows, computed in one pass over a snapshot:
//! the total balance, the liquidity/debt split, current-month flows, the
//! six-month chart and the most recent transactions.

use chrono::NaiveDate;
use serde::Serialize;

use super::cash_flow::{format_month_flows, CashFlowReport};
use crate::aggregation::{
    current_month_flows, liquidity_and_debt, normalize, six_month_series, total_balance, validate,
    LiquidityAndDebt, MonthlyFlows, ValidationReport,
};
use crate::config::settings::Settings;
use crate::display::report::{double_separator, format_header, separator};
use crate::display::{category_label, format_transaction_register};
use crate::models::{CategoryNames, Money, Transaction, TransactionId, TransactionType};
use crate::storage::Snapshot;

const WIDTH: usize = 72;

/// A row of the recent-transactions panel
#[derive(Debug, Clone, Serialize)]
pub struct RecentTransaction {
    pub id: TransactionId,
    pub date: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Option<Money>,
}

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub reference_date: NaiveDate,
    /// Sum of every account balance
    pub total_balance: Money,
    pub liquidity: LiquidityAndDebt,
    pub current_month: MonthlyFlows,
    pub cash_flow: CashFlowReport,
    /// First transactions in snapshot order
    pub recent_transactions: Vec<RecentTransaction>,
    pub accounts_count: usize,
    pub transactions_count: usize,
    pub validation: ValidationReport,

    #[serde(skip)]
    recent: Vec<Transaction>,
    #[serde(skip)]
    category_names: CategoryNames,
}

impl DashboardReport {
    /// Generate the dashboard for `reference_date`
    ///
    /// The snapshot is validated as loaded, then credit balances are
    /// normalized under the configured sign convention before aggregation.
    pub fn generate(snapshot: &Snapshot, reference_date: NaiveDate, settings: &Settings) -> Self {
        let validation = validate(snapshot, settings.credit_balance_sign);
        let snapshot = normalize(snapshot, settings.credit_balance_sign);

        let category_names = CategoryNames::from_categories(&snapshot.categories);
        let recent: Vec<Transaction> = snapshot
            .transactions
            .iter()
            .take(settings.recent_limit)
            .cloned()
            .collect();
        let recent_transactions = recent
            .iter()
            .map(|txn| RecentTransaction {
                id: txn.id,
                date: txn.date.clone(),
                description: txn.description.clone(),
                category: category_label(txn, &category_names),
                transaction_type: txn.transaction_type.clone(),
                amount: txn.valid_amount(),
            })
            .collect();

        let series = six_month_series(&snapshot.transactions, reference_date);

        log::debug!(
            "Dashboard for {}: {} accounts, {} transactions",
            reference_date,
            snapshot.accounts.len(),
            snapshot.transactions.len()
        );

        Self {
            reference_date,
            total_balance: total_balance(&snapshot.accounts),
            liquidity: liquidity_and_debt(&snapshot.accounts),
            current_month: current_month_flows(&snapshot.transactions, reference_date),
            cash_flow: CashFlowReport::from_series(&series, settings.month_labels),
            recent_transactions,
            accounts_count: snapshot.accounts.len(),
            transactions_count: snapshot.transactions.len(),
            validation,
            recent,
            category_names,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str(&format_header(
            &format!("Dashboard · {}", self.reference_date.format(&settings.date_format)),
            WIDTH,
        ));
        output.push('\n');
        output.push_str(&double_separator(WIDTH));
        output.push('\n');

        output.push_str(&format!("Total Balance:  {:>15}\n", money(self.total_balance)));
        output.push_str(&format!(
            "Liquidity:      {:>15}\n",
            money(self.liquidity.total_liquidity)
        ));
        output.push_str(&format!("Debt:           {:>15}\n", money(self.liquidity.total_debt)));
        output.push_str(&format!("Net Worth:      {:>15}\n", money(self.liquidity.net_worth)));
        output.push_str(&format!(
            "Accounts:       {:>15}\n",
            self.accounts_count
        ));
        output.push('\n');

        output.push_str("This Month\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format_month_flows(&self.current_month, settings));
        output.push('\n');

        output.push_str("Last 6 Months\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&self.cash_flow.format_chart(settings));
        output.push('\n');

        output.push_str("Recent Transactions\n");
        output.push_str(&separator(WIDTH));
        output.push('\n');
        output.push_str(&format_transaction_register(
            &self.recent,
            &self.category_names,
            settings,
        ));

        if !self.validation.is_clean() {
            output.push('\n');
            output.push_str(&format!(
                "Data warnings ({}), run `finboard validate` for details\n",
                self.validation.issue_count()
            ));
            for line in self.validation.lines() {
                output.push_str(&format!("  ! {}\n", line));
            }
        }

        output
    }
}
