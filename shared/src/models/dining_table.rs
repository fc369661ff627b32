//! Dining Table Model

use crate::types::{BranchId, TableId};
use serde::{Deserialize, Serialize};

/// Table status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

/// Dining table entity
///
/// The branch binding is fixed at creation. The QR payload is derived from
/// the store and table ids, `qr_code` only holds the opaque access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiningTable {
    pub id: TableId,
    pub branch_id: BranchId,
    pub table_number: String,
    pub capacity: i32,
    #[serde(default)]
    pub status: TableStatus,
    pub qr_code: Option<String>,
}

/// Update dining table payload (branch binding is not editable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningTableUpdate {
    pub table_number: Option<String>,
    pub capacity: Option<i32>,
    pub status: Option<TableStatus>,
}

impl DiningTable {
    pub fn apply_update(&mut self, update: DiningTableUpdate) {
        if let Some(number) = update.table_number {
            self.table_number = number;
        }
        if let Some(capacity) = update.capacity {
            self.capacity = capacity;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}
