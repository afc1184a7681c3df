//! Reading response bodies and replacing snapshot files
//!
//! Bodies are read as untyped JSON so the caller can accept every shape the
//! API answers with. Snapshot files are replaced through a sibling temp file,
//! so a reader never sees a half-written collection.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{FinboardError, FinboardResult};

/// Read a body as JSON, returning `None` when there is nothing to read
///
/// A missing file and a zero-length (or whitespace-only) file both count as
/// nothing; an interrupted download leaves the latter behind.
pub fn read_body(path: &Path) -> FinboardResult<Option<serde_json::Value>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(FinboardError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if raw.trim().is_empty() {
        log::warn!("{} is empty", path.display());
        return Ok(None);
    }

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| FinboardError::Storage(format!("{} is not valid JSON: {}", path.display(), e)))
}

/// Read a body that must exist and hold JSON
pub fn read_body_required(path: &Path) -> FinboardResult<serde_json::Value> {
    read_body(path)?.ok_or_else(|| {
        FinboardError::Storage(format!("No JSON body found in {}", path.display()))
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    path.with_file_name(format!(".{}.partial", name))
}

/// Replace `path` with the pretty-printed JSON of `records`
pub fn replace_with_json<T: Serialize + ?Sized>(path: &Path, records: &T) -> FinboardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FinboardError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let mut bytes = serde_json::to_vec_pretty(records)
        .map_err(|e| FinboardError::Storage(format!("Failed to serialize snapshot: {}", e)))?;
    bytes.push(b'\n');

    let temp = temp_path_for(path);
    let written = fs::File::create(&temp).and_then(|mut file| {
        file.write_all(&bytes)?;
        file.sync_all()
    });

    if let Err(e) = written.and_then(|()| fs::rename(&temp, path)) {
        let _ = fs::remove_file(&temp);
        return Err(FinboardError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
