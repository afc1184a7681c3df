//! Financial Summary Report

use crate::aggregation::FinancialSummary;
use crate::config::settings::Settings;
use crate::models::Money;

/// Format a financial summary for terminal display
pub fn format_summary(summary: &FinancialSummary, settings: &Settings) -> String {
    let money = |m: Money| settings.format_money(m);
    let bound = |d: Option<chrono::NaiveDate>| {
        d.map(|d| d.format(&settings.date_format).to_string())
            .unwrap_or_else(|| "…".to_string())
    };

    let mut output = String::new();
    output.push_str("Financial Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');

    if summary.range.from.is_some() || summary.range.to.is_some() {
        output.push_str(&format!(
            "Period: {} to {}\n\n",
            bound(summary.range.from),
            bound(summary.range.to)
        ));
    }

    output.push_str(&format!("Total Balance:   {:>15}\n", money(summary.total_balance)));
    output.push_str(&format!("Total Income:    {:>15}\n", money(summary.total_income)));
    output.push_str(&format!("Total Expenses:  {:>15}\n", money(summary.total_expenses)));
    output.push_str(&"-".repeat(33));
    output.push('\n');
    output.push_str(&format!("Net Balance:     {:>15}\n", money(summary.net_balance)));
    output.push('\n');
    output.push_str(&format!("Accounts:        {:>15}\n", summary.accounts_count));
    output.push_str(&format!("Transactions:    {:>15}\n", summary.transactions_count));

    if !summary.issues.is_clean() {
        output.push_str(&format!("Skipped:         {:>15}\n", summary.issues.total()));
    }

    output
}
