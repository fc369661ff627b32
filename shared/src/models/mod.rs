//! Data models
//!
//! Shared between the catalog engine and the CRUD layer (via the REST API).
//! All IDs are `i64`; JSON field names are camelCase like the REST payloads.

pub mod catalog;
pub mod dining_table;
pub mod store;

// Re-exports
pub use catalog::*;
pub use dining_table::*;
pub use store::*;
