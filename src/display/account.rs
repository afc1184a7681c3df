//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use super::report::left_align;
use crate::config::settings::Settings;
use crate::models::{Account, Money};

/// Format a list of accounts with balances as a table
pub fn format_account_list(accounts: &[Account], settings: &Settings) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    // Calculate column widths
    let name_width = accounts
        .iter()
        .map(|a| a.display_name().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type.to_string().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let rule = format!(
        "{:-<name_width$}  {:-<type_width$}  {:->14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    );

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{}  {}  {:>14}  {}\n",
        left_align("Name", name_width),
        left_align("Type", type_width),
        "Balance",
        "Status",
    ));
    output.push_str(&rule);

    for account in accounts {
        let status = if account.is_active { "" } else { "Inactive" };
        output.push_str(&format!(
            "{}  {}  {:>14}  {}\n",
            left_align(&account.display_name(), name_width),
            left_align(&account.account_type.to_string(), type_width),
            settings.format_money(account.current_balance),
            status,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.current_balance).sum();
    output.push_str(&rule);
    output.push_str(&format!(
        "{}  {}  {:>14}\n",
        left_align("TOTAL", name_width),
        left_align("", type_width),
        settings.format_money(total),
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.display_name()));
    output.push_str(&format!("  Type:     {}\n", account.account_type));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!(
        "  Balance:  {}\n",
        settings.format_money(account.current_balance)
    ));
    if let Some(currency) = &account.currency {
        output.push_str(&format!("  Currency: {}\n", currency));
    }
    output.push_str(&format!(
        "  Active:   {}\n",
        if account.is_active { "Yes" } else { "No" }
    ));

    if let Some(description) = account.description.as_deref().filter(|d| !d.is_empty()) {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", description));
    }

    if let Some(created) = &account.created_at {
        output.push('\n');
        output.push_str(&format!("  Created:  {}\n", created));
    }
    if let Some(updated) = &account.updated_at {
        output.push_str(&format!("  Modified: {}\n", updated));
    }

    output
}
