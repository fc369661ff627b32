//! Store and Branch Model

use crate::types::{BranchId, StoreId};
use serde::{Deserialize, Serialize};

/// Business type of a store, inherited by every branch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BusinessType {
    Retail,
    Fnb,
    Hybrid,
}

/// Operating status of a branch
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingStatus {
    #[default]
    Active,
    ComingSoon,
    UnderMaintenance,
    Closed,
}

impl OperatingStatus {
    /// Only active branches take orders from the QR menu
    pub fn accepts_orders(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Store entity (owns branches)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub business_type: BusinessType,
}

impl Store {
    /// Build a branch of this store; the business type is copied, never chosen
    pub fn open_branch(&self, id: BranchId, create: BranchCreate) -> Branch {
        Branch {
            id,
            store_id: self.id,
            name: create.name,
            address: create.address.unwrap_or_default(),
            operating_status: create.operating_status.unwrap_or_default(),
            business_type: self.business_type,
        }
    }
}

/// Branch entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: BranchId,
    pub store_id: StoreId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub operating_status: OperatingStatus,
    /// Copied from the store at creation
    pub business_type: BusinessType,
}

impl Branch {
    pub fn apply_update(&mut self, update: BranchUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(status) = update.operating_status {
            self.operating_status = status;
        }
    }
}

/// Create branch payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchCreate {
    pub name: String,
    pub address: Option<String>,
    pub operating_status: Option<OperatingStatus>,
}

/// Update branch payload (business type is not editable)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub operating_status: Option<OperatingStatus>,
}
