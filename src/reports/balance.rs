//! Balance Report
//!
//! Account balances grouped by classification, with the liquidity/debt
//! partition and the plain total across every account.

use serde::Serialize;
use std::io::Write;

use crate::aggregation::{liquidity_and_debt, total_balance, LiquidityAndDebt};
use crate::config::settings::Settings;
use crate::display::report::{left_align, truncate};
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Account, AccountId, AccountType, Money};

/// Summary of a single account's balance
#[derive(Debug, Clone, Serialize)]
pub struct AccountBalance {
    pub account_id: AccountId,
    pub account_name: String,
    pub account_type: AccountType,
    pub is_active: bool,
    pub balance: Money,
}

/// Accounts sharing one classification
#[derive(Debug, Clone, Serialize)]
pub struct AccountTypeGroup {
    /// Heading shown above the group
    pub label: String,
    pub accounts: Vec<AccountBalance>,
    pub total_balance: Money,
}

impl AccountTypeGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accounts: Vec::new(),
            total_balance: Money::zero(),
        }
    }

    /// Add an account to this group
    pub fn add_account(&mut self, account: AccountBalance) {
        self.total_balance += account.balance;
        self.accounts.push(account);
    }
}

/// Balance Report
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    /// Liquid first, then credit, then anything unrecognized
    pub groups: Vec<AccountTypeGroup>,
    pub total_balance: Money,
    pub summary: LiquidityAndDebt,
}

impl BalanceReport {
    /// Generate from normalized accounts
    pub fn generate(accounts: &[Account]) -> Self {
        let mut liquid = AccountTypeGroup::new("LIQUID");
        let mut credit = AccountTypeGroup::new("CREDIT");
        let mut other = AccountTypeGroup::new("UNCLASSIFIED");

        for account in accounts {
            let row = AccountBalance {
                account_id: account.id,
                account_name: account.display_name(),
                account_type: account.account_type.clone(),
                is_active: account.is_active,
                balance: account.current_balance,
            };
            match account.account_type {
                AccountType::Liquid => liquid.add_account(row),
                AccountType::Credit => credit.add_account(row),
                AccountType::Unrecognized(_) => other.add_account(row),
            }
        }

        let groups = [liquid, credit, other]
            .into_iter()
            .filter(|g| !g.accounts.is_empty())
            .collect();

        Self {
            groups,
            total_balance: total_balance(accounts),
            summary: liquidity_and_debt(accounts),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let money = |m: Money| settings.format_money(m);
        let mut output = String::new();

        output.push_str("Balance Report\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!("Total Balance:   {:>15}\n", money(self.total_balance)));
        output.push_str(&format!(
            "Liquidity:       {:>15}\n",
            money(self.summary.total_liquidity)
        ));
        output.push_str(&format!("Debt:            {:>15}\n", money(self.summary.total_debt)));
        output.push_str(&"-".repeat(33));
        output.push('\n');
        output.push_str(&format!("Net Worth:       {:>15}\n", money(self.summary.net_worth)));
        if !self.summary.unclassified.is_empty() {
            output.push_str(&format!(
                "Unclassified:    {:>15}  ({} account(s) not in net worth)\n",
                money(self.summary.unclassified.total),
                self.summary.unclassified.account_ids.len()
            ));
        }
        output.push('\n');

        output.push_str(&format!("{:<32} {:>15}\n", "Account", "Balance"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for group in &self.groups {
            output.push_str(&format!("\n{}\n", group.label));

            for account in &group.accounts {
                let inactive = if account.is_active { " " } else { "*" };
                output.push_str(&format!(
                    "{} {} {:>15}\n",
                    inactive,
                    left_align(&truncate(&account.account_name, 30), 30),
                    money(account.balance)
                ));
            }

            output.push_str(&format!(
                "  {:<30} {:>15}\n",
                "Subtotal:",
                money(group.total_balance)
            ));
        }

        if self.groups.iter().flat_map(|g| &g.accounts).any(|a| !a.is_active) {
            output.push_str(&"-".repeat(60));
            output.push('\n');
            output.push_str("* = Inactive account (still counted)\n");
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> FinboardResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| FinboardError::Export(e.to_string());

        csv.write_record(["Group", "Account ID", "Account Name", "Active", "Balance"])
            .map_err(export_err)?;

        for group in &self.groups {
            for account in &group.accounts {
                csv.write_record([
                    group.label.clone(),
                    account.account_id.value().to_string(),
                    account.account_name.clone(),
                    account.is_active.to_string(),
                    account.balance.to_decimal_string(),
                ])
                .map_err(export_err)?;
            }
        }

        for (label, amount) in [
            ("Total Balance", self.total_balance),
            ("Liquidity", self.summary.total_liquidity),
            ("Debt", self.summary.total_debt),
            ("Net Worth", self.summary.net_worth),
        ] {
            let value = amount.to_decimal_string();
            csv.write_record(["SUMMARY", "", label, "", value.as_str()])
                .map_err(export_err)?;
        }

        csv.flush()?;
        Ok(())
    }

    /// Get total number of accounts
    pub fn account_count(&self) -> usize {
        self.groups.iter().map(|g| g.accounts.len()).sum()
    }
}
