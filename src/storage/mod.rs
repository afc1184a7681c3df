//! Storage layer for finboard
//!
//! Reads API snapshots from the data directory and writes imported bodies
//! with atomic renames.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_body, read_body_required, replace_with_json};
pub use snapshot::{import_body, load_collection, Snapshot, SnapshotKind};
