//! Branch catalog engine
//!
//! Resolves per-branch price and availability of a store's catalog and
//! builds the diner menu behind a table QR code. Pure computation over
//! in-memory snapshots: callers hand in entities, overrides, branches and
//! tables, and get plain data back.
//!
//! ```
//! use catalog_engine::catalog::{BranchDirectory, CatalogProjector, OverrideStore, ProjectionMode};
//! use shared::Money;
//! use shared::models::{BranchCreate, BranchOverride, BusinessType, CatalogEntity, Store};
//!
//! let store = Store { id: 1, name: "Cafe".into(), business_type: BusinessType::Fnb };
//! let branch = store.open_branch(2, BranchCreate {
//!     name: "Mall".into(),
//!     address: None,
//!     operating_status: None,
//! });
//! let directory = BranchDirectory::with_branches(store, [branch]).unwrap();
//! let overrides = OverrideStore::from_overrides([
//!     BranchOverride::price(10, 2, Money::from_cents(1250)),
//! ]);
//! let entities = [CatalogEntity::menu_item(10, 1, "Latte", Money::from_cents(1000))];
//!
//! let projection = CatalogProjector::new(&directory, &overrides)
//!     .project(&entities, Some(2), ProjectionMode::Diner)
//!     .unwrap();
//! assert_eq!(projection.entities[0].price, Some(Money::from_cents(1250)));
//! ```

pub mod binder;
pub mod catalog;
pub mod core;
pub mod error;
pub mod snapshot;
pub mod utils;

pub use binder::{MenuRequest, MenuResponse, MenuUrlConfig, TableBinder, TableContext, TableMenu};
pub use catalog::{
    BranchDirectory, CatalogProjector, Diagnostics, IntegrityWarning, OverrideStore, Projection,
    ProjectionMode, Resolution, ResolvedEntity, resolve, resolve_unscoped,
};
pub use crate::core::Config;
pub use error::NotFound;
pub use snapshot::{CatalogSnapshot, SnapshotParts};
