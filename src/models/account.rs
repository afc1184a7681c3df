//! Account model
//!
//! Represents the financial accounts returned by the API: liquid accounts
//! (cash, checking, savings) and credit accounts (cards, lines of credit).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, UserId};
use super::money::Money;

/// Classification of a financial account
///
/// The wire form is the API's upper-case string. Anything else is kept as
/// `Unrecognized` so it can be reported instead of silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountType {
    /// Readily available funds
    Liquid,
    /// Credit card or other debt
    Credit,
    /// A classification this crate does not know about
    Unrecognized(String),
}

impl AccountType {
    /// Parse account type from string (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "LIQUID" => Self::Liquid,
            "CREDIT" => Self::Credit,
            _ => Self::Unrecognized(s.to_string()),
        }
    }

    /// Wire representation ("LIQUID", "CREDIT", or the raw unknown value)
    pub fn as_str(&self) -> &str {
        match self {
            Self::Liquid => "LIQUID",
            Self::Credit => "CREDIT",
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Returns true if balances of this type represent debt
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for AccountType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<AccountType> for String {
    fn from(t: AccountType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Liquid => f.pad("Liquid"),
            Self::Credit => f.pad("Credit Card"),
            Self::Unrecognized(raw) => f.pad(&format!("Unknown ({})", raw)),
        }
    }
}

/// Sign convention the upstream API uses for credit account balances
///
/// The engine works with debt signed negative. When the API reports debt as a
/// positive number, balances are negated at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CreditBalanceSign {
    /// Debt is already negative (a card owing 300 reports -300)
    #[default]
    Negative,
    /// Debt is reported positive (a card owing 300 reports 300)
    Positive,
}

impl CreditBalanceSign {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "negative" | "neg" | "-" => Some(Self::Negative),
            "positive" | "pos" | "+" => Some(Self::Positive),
            _ => None,
        }
    }
}

/// A financial account as returned by `GET /accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Account name (e.g., "BBVA Nómina")
    #[serde(default)]
    pub name: String,

    /// Classification
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Signed balance; debt is negative once normalized
    pub current_balance: Money,

    /// ISO currency code, if the API provided one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the account is active; aggregation does not filter on this
    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Account {
    /// Create an active account with the given balance
    pub fn new(
        id: u64,
        name: impl Into<String>,
        account_type: AccountType,
        current_balance: Money,
    ) -> Self {
        Self {
            id: AccountId::new(id),
            user_id: None,
            name: name.into(),
            account_type,
            current_balance,
            currency: None,
            description: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    /// Balance with debt signed negative under the given upstream convention
    pub fn normalized_balance(&self, convention: CreditBalanceSign) -> Money {
        match (convention, &self.account_type) {
            (CreditBalanceSign::Positive, AccountType::Credit) => -self.current_balance,
            _ => self.current_balance,
        }
    }

    /// Display name, falling back to the id when the API sent none
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.account_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("LIQUID"), AccountType::Liquid);
        assert_eq!(AccountType::parse("credit"), AccountType::Credit);
        assert_eq!(
            AccountType::parse("INVESTMENT"),
            AccountType::Unrecognized("INVESTMENT".into())
        );
        assert!(!AccountType::parse("INVESTMENT").is_recognized());
    }

    #[test]
    fn test_is_liability() {
        assert!(AccountType::Credit.is_liability());
        assert!(!AccountType::Liquid.is_liability());
    }

    #[test]
    fn test_deserialize_api_record() {
        let json = r#"{
            "id": 3,
            "user_id": 1,
            "name": "Tarjeta Oro",
            "type": "CREDIT",
            "current_balance": "-300.00",
            "currency": "MXN",
            "is_active": true,
            "created_at": "2024-01-01T00:00:00.000000Z",
            "updated_at": "2024-01-01T00:00:00.000000Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, AccountId::new(3));
        assert_eq!(account.account_type, AccountType::Credit);
        assert_eq!(account.current_balance.cents(), -30000);
        assert_eq!(account.currency.as_deref(), Some("MXN"));
    }

    #[test]
    fn test_unknown_type_survives_deserialization() {
        let json = r#"{"id": 4, "type": "LOAN", "current_balance": 10}"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Unrecognized("LOAN".into()));
        assert!(account.is_active);

        let back = serde_json::to_value(&account).unwrap();
        assert_eq!(back["type"], "LOAN");
    }

    #[test]
    fn test_normalized_balance() {
        let card = Account::new(1, "Card", AccountType::Credit, Money::from_cents(30000));
        let cash = Account::new(2, "Cash", AccountType::Liquid, Money::from_cents(30000));

        assert_eq!(card.normalized_balance(CreditBalanceSign::Negative).cents(), 30000);
        assert_eq!(card.normalized_balance(CreditBalanceSign::Positive).cents(), -30000);
        assert_eq!(cash.normalized_balance(CreditBalanceSign::Positive).cents(), 30000);
    }

    #[test]
    fn test_display() {
        let account = Account::new(1, "Nómina", AccountType::Liquid, Money::zero());
        assert_eq!(format!("{}", account), "Nómina (Liquid)");

        let unnamed = Account::new(9, "", AccountType::Credit, Money::zero());
        assert_eq!(unnamed.display_name(), "acc-9");
    }
}
