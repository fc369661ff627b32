//! Common identifier types
//!
//! All ids are `i64`, matching the backend's numeric primary keys.

pub type StoreId = i64;
pub type BranchId = i64;
pub type EntityId = i64;
pub type TableId = i64;
