//! Category model
//!
//! Categories label transactions for display. They carry a classification
//! matching `TransactionType` plus optional color and icon metadata; the
//! aggregation engine never sums by them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::ids::{CategoryId, UserId};
use super::transaction::TransactionType;

/// A transaction category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Category name (e.g., "Supermercado")
    #[serde(default)]
    pub name: String,

    /// Which kind of transaction this category labels
    #[serde(rename = "type")]
    pub category_type: TransactionType,

    /// Hex color used by the front end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Icon name used by the front end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Category {
    /// Create a new active category
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category_type: TransactionType,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            user_id: None,
            name: name.into(),
            category_type,
            color: None,
            icon: None,
            description: None,
            is_active: true,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name)
    }
}

/// Name lookup for labeling transactions in tables
#[derive(Debug, Clone, Default)]
pub struct CategoryNames(HashMap<CategoryId, String>);

impl CategoryNames {
    pub fn from_categories(categories: &[Category]) -> Self {
        Self(
            categories
                .iter()
                .map(|c| (c.id, c.name.clone()))
                .collect(),
        )
    }

    pub fn get(&self, id: CategoryId) -> Option<&str> {
        self.0.get(&id).map(String::as_str)
    }
}
