//! API response envelopes
//!
//! The finance API wraps collections either in an `ApiResponse`
//! (`{"data": [...], "status": "success"}`) or, for paginated listings, in a
//! `PaginatedResponse`. Snapshot files may also hold a bare array.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{FinboardError, FinboardResult};

/// Standard response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Paginated response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
    pub total: usize,
    /// One-based index of the first item on the page; null when empty
    pub from: Option<usize>,
    /// One-based index of the last item on the page; null when empty
    pub to: Option<usize>,
}

impl<T> PaginatedResponse<T> {
    /// Slice one page out of an already-filtered collection
    ///
    /// `page` is one-based. A page past the end yields an empty `data` with
    /// the real totals, as the API does.
    pub fn paginate(items: Vec<T>, page: usize, per_page: usize) -> Self {
        let total = items.len();
        let per_page = per_page.max(1);
        let page = page.max(1);
        let last_page = total.div_ceil(per_page).max(1);

        let start = (page - 1).saturating_mul(per_page);
        let data: Vec<T> = items.into_iter().skip(start).take(per_page).collect();

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (Some(start + 1), Some(start + data.len()))
        };

        Self {
            data,
            current_page: page,
            last_page,
            per_page,
            total,
            from,
            to,
        }
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Decode a collection body in any of the shapes the API produces
pub fn decode_collection<T: DeserializeOwned>(value: serde_json::Value) -> FinboardResult<Vec<T>> {
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(ref map) if map.contains_key("data") => {
            if map.contains_key("current_page") {
                let page: PaginatedResponse<T> = serde_json::from_value(value)?;
                if page.has_more() {
                    log::warn!(
                        "Snapshot holds page {} of {}; later pages are not included",
                        page.current_page,
                        page.last_page
                    );
                }
                Ok(page.data)
            } else {
                let envelope: ApiResponse<Vec<T>> = serde_json::from_value(value)?;
                Ok(envelope.data)
            }
        }
        other => Err(FinboardError::Json(format!(
            "Expected a JSON array or a response envelope with \"data\", got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object without \"data\"",
    }
}
