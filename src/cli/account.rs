//! Account CLI commands
//!
//! Lists snapshot accounts grouped by classification, or shows one account.

use crate::aggregation::normalize_accounts;
use crate::cli::args::parse_id;
use crate::config::settings::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Account, AccountId, AccountType};
use crate::storage::Snapshot;

fn classification_rank(account_type: &AccountType) -> u8 {
    match account_type {
        AccountType::Liquid => 0,
        AccountType::Credit => 1,
        AccountType::Unrecognized(_) => 2,
    }
}

/// Accounts ordered liquid, credit, unclassified; snapshot order within each
pub fn grouped_accounts(accounts: &[Account]) -> Vec<Account> {
    let mut sorted = accounts.to_vec();
    sorted.sort_by_key(|a| classification_rank(&a.account_type));
    sorted
}

/// Handle the accounts command
pub fn handle_accounts_command(
    snapshot: &Snapshot,
    settings: &Settings,
    account: Option<String>,
) -> FinboardResult<()> {
    let accounts = normalize_accounts(&snapshot.accounts, settings.credit_balance_sign);

    match account {
        None => {
            println!("{}", format_account_list(&grouped_accounts(&accounts), settings));
        }
        Some(query) => {
            let id: AccountId = parse_id(&query, "account")?;
            let found = accounts
                .iter()
                .find(|a| a.id == id)
                .ok_or_else(|| FinboardError::account_not_found(&query))?;
            print!("{}", format_account_details(found, settings));
        }
    }

    Ok(())
}
