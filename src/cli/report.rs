//! CLI commands for reports
//!
//! Balance, monthly flows, cash-flow series and the financial summary.

use clap::Subcommand;
use std::path::PathBuf;

use crate::aggregation::{current_month_flows, financial_summary, normalize, DateRange, DASHBOARD_MONTHS};
use crate::cli::args::{create_output, parse_optional_date, reference_date};
use crate::config::settings::Settings;
use crate::error::FinboardResult;
use crate::reports::{format_month_flows, format_summary, BalanceReport, CashFlowReport};
use crate::storage::Snapshot;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total balance, liquidity, debt and net worth by account
    #[command(alias = "networth")]
    Balance {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Income and expense for the month of the reference date
    Flows {
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Monthly income/expense chart ending at the reference month
    Series {
        /// Number of months to show
        #[arg(short, long, default_value_t = DASHBOARD_MONTHS)]
        months: u32,

        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Balance, income and expense totals, optionally for a date range
    Summary {
        /// Start date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    snapshot: &Snapshot,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinboardResult<()> {
    let snapshot = normalize(snapshot, settings.credit_balance_sign);

    match cmd {
        ReportCommands::Balance { output } => {
            let report = BalanceReport::generate(&snapshot.accounts);
            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Balance report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(settings));
            }
        }
        ReportCommands::Flows { as_of } => {
            let flows = current_month_flows(&snapshot.transactions, reference_date(as_of)?);
            print!("{}", format_month_flows(&flows, settings));
        }
        ReportCommands::Series {
            months,
            as_of,
            output,
        } => {
            let report = CashFlowReport::generate(
                &snapshot.transactions,
                reference_date(as_of)?,
                months,
                settings.month_labels,
            );
            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Cash flow report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(settings));
            }
        }
        ReportCommands::Summary { from, to } => {
            let range = DateRange::new(
                parse_optional_date(from, "start")?,
                parse_optional_date(to, "end")?,
            )?;
            let summary = financial_summary(&snapshot.accounts, &snapshot.transactions, range);
            print!("{}", format_summary(&summary, settings));
        }
    }

    Ok(())
}
