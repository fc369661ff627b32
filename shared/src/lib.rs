//! Shared types for the branch catalog
//!
//! Data model, money and error types used by the catalog engine and by the
//! CRUD layer that feeds it.

pub mod error;
pub mod models;
pub mod money;
pub mod types;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use money::Money;
pub use serde::{Deserialize, Serialize};
pub use types::{BranchId, EntityId, StoreId, TableId};
