//! finboard - Personal-finance dashboard aggregation
//!
//! This library turns the accounts, transactions and categories returned by a
//! personal-finance API into the figures a dashboard shows: total balance,
//! liquidity and debt, the current month's income and expense, and a
//! six-month cash-flow series.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, categories, months)
//! - `api`: Response envelopes and list queries of the upstream API
//! - `storage`: Local snapshots of API responses
//! - `aggregation`: Pure dashboard computations
//! - `reports`: Report generation built on the aggregations
//! - `display`: Terminal formatting helpers
//! - `export`: JSON, YAML and CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finboard::aggregation::{current_month_flows, total_balance};
//! use finboard::storage::Snapshot;
//!
//! let snapshot = Snapshot::load(&paths)?;
//! let total = total_balance(&snapshot.accounts);
//! let flows = current_month_flows(&snapshot.transactions, today);
//! ```

pub mod aggregation;
pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FinboardError, FinboardResult};
