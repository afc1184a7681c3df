//! Cash Flow Report
//!
//! Monthly income/expense chart for a trailing window of months, plus the
//! single-month flows panel.

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use crate::aggregation::{monthly_series, CashFlowSeries, MonthlyFlows, RecordIssues};
use crate::config::settings::{MonthLabels, Settings};
use crate::display::report::{format_money_bar, left_align};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Money, MonthKey, Transaction};

/// One labeled month of the chart
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowRow {
    #[serde(flatten)]
    pub month: MonthKey,
    /// Short month name in the configured language
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

/// Cash Flow Report
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowReport {
    /// Oldest month first
    pub rows: Vec<CashFlowRow>,
    pub total_income: Money,
    pub total_expense: Money,
    /// Largest single income or expense, for bar scaling
    pub peak: Money,
    pub issues: RecordIssues,
}

impl CashFlowReport {
    /// Generate for `months` months ending at the month of `reference_date`
    pub fn generate(
        transactions: &[Transaction],
        reference_date: NaiveDate,
        months: u32,
        labels: MonthLabels,
    ) -> Self {
        Self::from_series(&monthly_series(transactions, reference_date, months), labels)
    }

    /// Label an already computed series
    pub fn from_series(series: &CashFlowSeries, labels: MonthLabels) -> Self {
        let rows = series
            .buckets
            .iter()
            .map(|bucket| CashFlowRow {
                month: bucket.month,
                label: labels.short(bucket.month.month0).to_string(),
                income: bucket.income,
                expense: bucket.expense,
                net: bucket.net(),
            })
            .collect();

        Self {
            rows,
            total_income: series.total_income(),
            total_expense: series.total_expense(),
            peak: series.peak(),
            issues: series.issues,
        }
    }

    /// Bar chart with one income and one expense bar per month
    pub fn format_chart(&self, settings: &Settings) -> String {
        let width = settings.chart_width.max(1);
        let mut output = String::new();

        for row in &self.rows {
            let heading = format!("{} {}", row.label, row.month.year);
            output.push_str(&format!(
                "{}  Income   {}  {:>12}\n",
                left_align(&heading, 8),
                format_money_bar(row.income, self.peak, width),
                settings.format_money(row.income)
            ));
            output.push_str(&format!(
                "{}  Expense  {}  {:>12}\n",
                left_align("", 8),
                format_money_bar(row.expense, self.peak, width),
                settings.format_money(row.expense)
            ));
        }

        output
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&format!("Cash Flow ({} months)\n", self.rows.len()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No months selected.\n");
            return output;
        }

        output.push_str(&self.format_chart(settings));
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:  {:>15}\n",
            settings.format_money(self.total_income)
        ));
        output.push_str(&format!(
            "Total Expense: {:>15}\n",
            settings.format_money(self.total_expense)
        ));
        output.push_str(&format!(
            "Net:           {:>15}\n",
            settings.format_money(self.total_income - self.total_expense)
        ));

        if !self.issues.is_clean() {
            output.push_str(&format!(
                "\n{} transaction(s) skipped ({} unparseable date, {} missing amount, {} unreadable amount)\n",
                self.issues.total(),
                self.issues.unparseable_dates,
                self.issues.missing_amounts,
                self.issues.invalid_amounts
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| FinboardError::Export(e.to_string());

        csv.write_record(["Month", "Label", "Income", "Expense", "Net"])
            .map_err(export_err)?;

        for row in &self.rows {
            csv.write_record([
                row.month.to_string(),
                row.label.clone(),
                row.income.to_decimal_string(),
                row.expense.to_decimal_string(),
                row.net.to_decimal_string(),
            ])
            .map_err(export_err)?;
        }

        csv.flush()?;
        Ok(())
    }
}

/// Format one month's income and expense panel
pub fn format_month_flows(flows: &MonthlyFlows, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        settings.month_labels.short(flows.month.month0),
        flows.month.year
    ));
    output.push_str(&format!("  Income:   {:>15}\n", settings.format_money(flows.income)));
    output.push_str(&format!("  Expense:  {:>15}\n", settings.format_money(flows.expense)));
    output.push_str(&format!("  Net:      {:>15}\n", settings.format_money(flows.net)));
    output.push_str(&format!("  Transactions: {}\n", flows.transaction_count));

    if !flows.issues.is_clean() {
        output.push_str(&format!("  Skipped:      {}\n", flows.issues.total()));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::current_month_flows;
    use crate::models::TransactionType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(1, 1, TransactionType::Income, Money::from_cents(50000), "2024-01-03"),
            Transaction::new(2, 1, TransactionType::Expense, Money::from_cents(-20000), "2024-01-10"),
            Transaction::new(3, 1, TransactionType::Expense, Money::from_cents(12000), "2023-12-24"),
        ]
    }

    #[test]
    fn test_rows_are_labeled() {
        let report =
            CashFlowReport::generate(&sample_transactions(), date(2024, 1, 15), 6, MonthLabels::Es);
        let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Ago", "Sep", "Oct", "Nov", "Dic", "Ene"]);
        assert_eq!(report.total_income.cents(), 50000);
        assert_eq!(report.total_expense.cents(), 32000);
        assert_eq!(report.peak.cents(), 50000);
        assert_eq!(report.rows[5].net.cents(), 30000);
    }

    #[test]
    fn test_english_labels() {
        let report = CashFlowReport::generate(&[], date(2024, 3, 1), 2, MonthLabels::En);
        assert_eq!(report.rows[0].label, "Feb");
        assert_eq!(report.rows[1].label, "Mar");
    }

    #[test]
    fn test_format_terminal() {
        let report =
            CashFlowReport::generate(&sample_transactions(), date(2024, 1, 15), 6, MonthLabels::Es);
        let output = report.format_terminal(&Settings::default());
        assert!(output.contains("Cash Flow (6 months)"));
        assert!(output.contains("Ene 2024"));
        assert!(output.contains("Ago 2023"));
        assert!(output.contains("$500.00"));
        assert!(output.contains("Net:"));
    }

    #[test]
    fn test_zero_month_window() {
        let report = CashFlowReport::generate(&sample_transactions(), date(2024, 1, 15), 0, MonthLabels::Es);
        assert!(report
            .format_terminal(&Settings::default())
            .contains("No months selected."));
    }

    #[test]
    fn test_csv_export() {
        let report =
            CashFlowReport::generate(&sample_transactions(), date(2024, 1, 15), 2, MonthLabels::Es);

        let mut csv_output = Vec::new();
        report.export_csv(&mut csv_output).unwrap();

        let csv_string = String::from_utf8(csv_output).unwrap();
        assert_eq!(
            csv_string,
            "Month,Label,Income,Expense,Net\n2023-12,Dic,0.00,120.00,-120.00\n2024-01,Ene,500.00,200.00,300.00\n"
        );
    }

    #[test]
    fn test_format_month_flows() {
        let flows = current_month_flows(&sample_transactions(), date(2024, 1, 15));
        let output = format_month_flows(&flows, &Settings::default());
        assert!(output.starts_with("Ene 2024\n"));
        assert!(output.contains("$500.00"));
        assert!(output.contains("$200.00"));
        assert!(output.contains("Transactions: 2"));
    }
}
