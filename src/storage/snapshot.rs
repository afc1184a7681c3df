//! API snapshots on disk
//!
//! A snapshot is the last fetched body of each collection endpoint, stored as
//! JSON in the data directory. A missing file means the fetch never happened
//! (or failed upstream) and loads as an empty collection so the dashboard can
//! still render zero-valued KPIs.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::file_io::{read_body, read_body_required, replace_with_json};
use crate::api::decode_collection;
use crate::config::paths::FinboardPaths;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{Account, Category, Transaction};

/// Which collection a snapshot file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    Accounts,
    Transactions,
    Categories,
}

impl SnapshotKind {
    /// Location of this collection's file in the data directory
    pub fn path(&self, paths: &FinboardPaths) -> PathBuf {
        match self {
            Self::Accounts => paths.accounts_file(),
            Self::Transactions => paths.transactions_file(),
            Self::Categories => paths.categories_file(),
        }
    }
}

impl FromStr for SnapshotKind {
    type Err = FinboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accounts" | "account" => Ok(Self::Accounts),
            "transactions" | "transaction" | "txn" => Ok(Self::Transactions),
            "categories" | "category" => Ok(Self::Categories),
            other => Err(FinboardError::Validation(format!(
                "Unknown snapshot kind: '{}'. Valid kinds: accounts, transactions, categories",
                other
            ))),
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accounts => write!(f, "accounts"),
            Self::Transactions => write!(f, "transactions"),
            Self::Categories => write!(f, "categories"),
        }
    }
}

/// Accounts, transactions and categories as last fetched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
}

impl Snapshot {
    pub fn new(
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
    ) -> Self {
        Self {
            accounts,
            transactions,
            categories,
        }
    }

    /// Load every collection from the data directory
    pub fn load(paths: &FinboardPaths) -> FinboardResult<Self> {
        let snapshot = Self {
            accounts: load_collection(&paths.accounts_file())?,
            transactions: load_collection(&paths.transactions_file())?,
            categories: load_collection(&paths.categories_file())?,
        };

        log::debug!(
            "Loaded snapshot: {} accounts, {} transactions, {} categories",
            snapshot.accounts.len(),
            snapshot.transactions.len(),
            snapshot.categories.len()
        );

        Ok(snapshot)
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.transactions.is_empty()
    }
}

/// Load one collection file in any of the API's body shapes
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> FinboardResult<Vec<T>> {
    let Some(value) = read_body(path)? else {
        log::warn!(
            "Snapshot file {} is missing or empty; treating it as empty",
            path.display()
        );
        return Ok(Vec::new());
    };

    decode_collection(value)
        .map_err(|e| FinboardError::Storage(format!("Failed to decode {}: {}", path.display(), e)))
}

/// Store an API response body as the snapshot for `kind`
///
/// The body is decoded first so that a malformed download never replaces a
/// good snapshot. Returns the number of records stored.
pub fn import_body(paths: &FinboardPaths, kind: SnapshotKind, source: &Path) -> FinboardResult<usize> {
    let value = read_body_required(source)?;
    let target = kind.path(paths);

    let count = match kind {
        SnapshotKind::Accounts => store::<Account>(value, &target)?,
        SnapshotKind::Transactions => store::<Transaction>(value, &target)?,
        SnapshotKind::Categories => store::<Category>(value, &target)?,
    };

    log::info!("Imported {} {} into {}", count, kind, target.display());
    Ok(count)
}

fn store<T: DeserializeOwned + Serialize>(value: serde_json::Value, target: &Path) -> FinboardResult<usize> {
    let records: Vec<T> = decode_collection(value)?;
    replace_with_json(target, &records)?;
    Ok(records.len())
}
