//! Snapshot adapter
//!
//! Turns the REST payload of one store into the indexed inputs the engine
//! works on. Grouping and indexing happen once here, not per request.

use crate::binder::{MenuUrlConfig, TableBinder};
use crate::catalog::{BranchDirectory, CatalogProjector, OverrideStore};
use serde::Deserialize;
use serde_json::{Map, Value};
use shared::error::{AppError, AppResult};
use shared::models::{Branch, BranchOverride, CatalogEntity, DiningTable, Store};
use shared::{BranchId, Money};

/// Catalog of one store as delivered by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub store: Store,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub entities: Vec<SnapshotEntity>,
    #[serde(default)]
    pub overrides: Vec<BranchOverride>,
    #[serde(default)]
    pub tables: Vec<DiningTable>,
}

/// Entity record, optionally carrying its overrides inline
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct SnapshotEntity {
    pub entity: CatalogEntity,
    pub branch_pricing: Vec<BranchPricing>,
}

impl TryFrom<Map<String, Value>> for SnapshotEntity {
    type Error = serde_json::Error;

    fn try_from(mut record: Map<String, Value>) -> Result<Self, Self::Error> {
        let branch_pricing = match record.remove("branchPricing") {
            Some(Value::Null) | None => Vec::new(),
            Some(value) => serde_json::from_value(value)?,
        };
        let entity = serde_json::from_value(Value::Object(record))?;
        Ok(Self {
            entity,
            branch_pricing,
        })
    }
}

/// Inline override of the older menu item payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchPricing {
    pub branch_id: BranchId,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub available: Option<bool>,
}

/// Indexed engine inputs built from a [`CatalogSnapshot`]
#[derive(Debug, Clone)]
pub struct SnapshotParts {
    pub directory: BranchDirectory,
    pub entities: Vec<CatalogEntity>,
    pub overrides: OverrideStore,
    pub tables: Vec<DiningTable>,
}

impl CatalogSnapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::invalid_format(format!("invalid catalog snapshot: {e}")))
    }

    /// Build the branch directory and the override index
    ///
    /// Inline `branchPricing` records come before the top-level `overrides`
    /// list, so a top-level record wins when both name the same branch.
    pub fn into_parts(self) -> AppResult<SnapshotParts> {
        let directory = BranchDirectory::with_branches(self.store, self.branches)?;

        let mut inline = Vec::new();
        let mut entities = Vec::with_capacity(self.entities.len());
        for SnapshotEntity {
            entity,
            branch_pricing,
        } in self.entities
        {
            inline.extend(branch_pricing.into_iter().map(|p| BranchOverride {
                entity_id: entity.id,
                branch_id: p.branch_id,
                price: p.price,
                available: p.available,
            }));
            entities.push(entity);
        }
        let overrides = OverrideStore::from_overrides(inline.into_iter().chain(self.overrides));

        tracing::debug!(
            store_id = directory.store().id,
            branches = directory.len(),
            entities = entities.len(),
            overrides = overrides.len(),
            tables = self.tables.len(),
            "Catalog snapshot loaded"
        );

        Ok(SnapshotParts {
            directory,
            entities,
            overrides,
            tables: self.tables,
        })
    }
}

impl SnapshotParts {
    pub fn projector(&self) -> CatalogProjector<'_> {
        CatalogProjector::new(&self.directory, &self.overrides)
    }

    pub fn binder<'a>(&'a self, urls: &'a MenuUrlConfig) -> TableBinder<'a> {
        TableBinder::new(&self.directory, &self.tables, urls)
    }
}
