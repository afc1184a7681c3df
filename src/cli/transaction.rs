//! Transaction CLI commands
//!
//! Filtered, paginated listing of snapshot transactions, mirroring the
//! query parameters of the API's transaction endpoint.

use clap::Args;
use std::path::PathBuf;

use crate::api::TransactionQuery;
use crate::cli::args::{create_output, parse_id, parse_optional_date};
use crate::config::settings::Settings;
use crate::display::format_transaction_page;
use crate::error::FinboardResult;
use crate::export::export_transactions_csv;
use crate::models::{CategoryNames, TransactionType};
use crate::storage::Snapshot;

/// Transaction listing options
#[derive(Args, Debug, Default)]
pub struct TransactionListArgs {
    /// Only transactions of this account (ID)
    #[arg(short, long)]
    pub account: Option<String>,

    /// Only transactions of this category (ID)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only this type (income, expense, transfer)
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<String>,

    /// Start date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Page size (defaults to the configured per_page)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Write every matching transaction to a CSV file instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl TransactionListArgs {
    /// Build the query these options describe
    pub fn to_query(&self, settings: &Settings) -> FinboardResult<TransactionQuery> {
        Ok(TransactionQuery {
            page: self.page,
            per_page: self.per_page.unwrap_or(settings.per_page),
            account_id: self
                .account
                .as_deref()
                .map(|s| parse_id(s, "account"))
                .transpose()?,
            category_id: self
                .category
                .as_deref()
                .map(|s| parse_id(s, "category"))
                .transpose()?,
            transaction_type: self.transaction_type.as_deref().map(TransactionType::parse),
            date_from: parse_optional_date(self.from.clone(), "start")?,
            date_to: parse_optional_date(self.to.clone(), "end")?,
        })
    }
}

/// Handle the transactions command
pub fn handle_transactions_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: TransactionListArgs,
) -> FinboardResult<()> {
    let query = args.to_query(settings)?;
    let names = CategoryNames::from_categories(&snapshot.categories);

    if let Some(path) = args.output {
        query.validate()?;
        let matching: Vec<_> = snapshot
            .transactions
            .iter()
            .filter(|txn| query.matches(txn))
            .cloned()
            .collect();

        let writer = create_output(&path)?;
        export_transactions_csv(&matching, &snapshot.accounts, &names, writer)?;
        println!("{} transaction(s) exported to: {}", matching.len(), path.display());
        return Ok(());
    }

    let page = query.apply(&snapshot.transactions)?;
    print!("{}", format_transaction_page(&page, &names, settings));

    Ok(())
}
