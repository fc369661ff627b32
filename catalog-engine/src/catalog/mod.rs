//! Branch-scoped catalog resolution
//!
//! - [`overrides`]: per-entity override index
//! - [`directory`]: branches of one store
//! - [`resolver`]: effective price/availability of one entity at one branch
//! - [`projector`]: resolution across a whole catalog
//! - [`menu`]: diner menu sections and stats
//! - [`validation`]: write-time checks for the CRUD layer

pub mod directory;
pub mod integrity;
pub mod menu;
pub mod overrides;
pub mod projector;
pub mod resolver;
pub mod validation;

pub use directory::BranchDirectory;
pub use integrity::{Diagnostics, IntegrityWarning};
pub use menu::{BranchMenu, BranchMenuStats, MenuSection, build_menu};
pub use overrides::OverrideStore;
pub use projector::{CatalogProjector, Projection, ProjectionMode, ResolvedEntity};
pub use resolver::{Resolution, resolve, resolve_unscoped};
