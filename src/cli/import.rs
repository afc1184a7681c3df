//! CLI command handler for snapshot import
//!
//! Stores a saved API response body (`GET /accounts`, `/transactions` or
//! `/categories`) as the local snapshot for that collection.

use std::path::Path;

use crate::config::paths::FinboardPaths;
use crate::error::{FinboardError, FinboardResult};
use crate::storage::{import_body, SnapshotKind};

/// Handle the import command
pub fn handle_import_command(paths: &FinboardPaths, kind: &str, file: &Path) -> FinboardResult<()> {
    let kind: SnapshotKind = kind.parse()?;

    if !file.exists() {
        return Err(FinboardError::Storage(format!(
            "File not found: {}",
            file.display()
        )));
    }

    paths.ensure_directories()?;
    let count = import_body(paths, kind, file)?;

    println!(
        "Imported {} {} into {}",
        count,
        kind,
        kind.path(paths).display()
    );

    Ok(())
}
