//! Balance KPIs
//!
//! Two figures are derived from account balances: the plain total across all
//! accounts, and the liquidity/debt split whose sum is net worth.

use serde::Serialize;

use crate::models::{Account, AccountId, AccountType, Money};

/// Sum of every account balance, regardless of type or active flag
pub fn total_balance(accounts: &[Account]) -> Money {
    accounts.iter().map(|a| a.current_balance).sum()
}

/// Accounts whose classification is neither liquid nor credit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnclassifiedAccounts {
    pub account_ids: Vec<AccountId>,
    pub total: Money,
}

impl UnclassifiedAccounts {
    pub fn is_empty(&self) -> bool {
        self.account_ids.is_empty()
    }
}

/// Liquidity/debt partition of account balances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LiquidityAndDebt {
    /// Sum of liquid balances
    pub total_liquidity: Money,
    /// Sum of credit balances (negative when money is owed)
    pub total_debt: Money,
    /// Liquidity plus debt
    pub net_worth: Money,
    /// Balances left out of both sums
    pub unclassified: UnclassifiedAccounts,
}

/// Partition balances into liquidity and debt
///
/// Credit balances must already be signed negative for debt; see
/// `aggregation::validate::normalize_accounts`.
pub fn liquidity_and_debt(accounts: &[Account]) -> LiquidityAndDebt {
    let mut result = LiquidityAndDebt::default();

    for account in accounts {
        match account.account_type {
            AccountType::Liquid => result.total_liquidity += account.current_balance,
            AccountType::Credit => result.total_debt += account.current_balance,
            AccountType::Unrecognized(ref raw) => {
                log::warn!(
                    "Account {} has unrecognized type '{}'; excluded from net worth",
                    account.id,
                    raw
                );
                result.unclassified.account_ids.push(account.id);
                result.unclassified.total += account.current_balance;
            }
        }
    }

    result.net_worth = result.total_liquidity + result.total_debt;
    result
}
