//! Wire shapes of the finance API
//!
//! The HTTP client itself lives outside this crate; these types describe the
//! bodies it returns and the listing parameters it accepts, so that snapshots
//! of those bodies can be decoded and queried locally.

pub mod query;
pub mod response;

pub use query::TransactionQuery;
pub use response::{decode_collection, ApiResponse, PaginatedResponse};
