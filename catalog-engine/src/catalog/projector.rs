//! Catalog Projector
//!
//! Applies the resolver across a whole catalog for one branch. Output keeps
//! the input order; sorting is left to the caller.

use super::directory::BranchDirectory;
use super::integrity::{Diagnostics, IntegrityWarning};
use super::overrides::OverrideStore;
use super::resolver::{Resolution, resolve, resolve_unscoped};
use crate::error::NotFound;
use serde::Serialize;
use shared::models::{CatalogEntity, EntityKind};
use shared::{BranchId, EntityId, Money};

/// Who the projection is for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionMode {
    /// Unavailable entities are left out
    #[default]
    Diner,
    /// Every entity, annotated with its resolved state
    Admin,
}

/// Entity with its effective price and availability at one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub category_id: Option<EntityId>,
    pub sort_order: i32,
    pub price: Option<Money>,
    pub available: bool,
}

impl ResolvedEntity {
    fn new(entity: &CatalogEntity, resolution: &Resolution) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
            name: entity.name.clone(),
            category_id: entity.category_id,
            sort_order: entity.sort_order,
            price: resolution.price,
            available: resolution.available,
        }
    }

    pub fn is_menu_item(&self) -> bool {
        self.kind == EntityKind::MenuItem
    }
}

/// Result of projecting a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// `None` for the unscoped store-wide view
    pub branch_id: Option<BranchId>,
    pub mode: ProjectionMode,
    pub entities: Vec<ResolvedEntity>,
    pub warnings: Diagnostics,
}

impl Projection {
    /// Diner view derived from any projection
    pub fn available_only(&self) -> Projection {
        Projection {
            branch_id: self.branch_id,
            mode: ProjectionMode::Diner,
            entities: self
                .entities
                .iter()
                .filter(|e| e.available)
                .cloned()
                .collect(),
            warnings: self.warnings.clone(),
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&ResolvedEntity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Projects catalogs against one store's branches and overrides
///
/// Borrows its inputs and never mutates them, so one projector can serve
/// concurrent requests over the same snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CatalogProjector<'a> {
    directory: &'a BranchDirectory,
    overrides: &'a OverrideStore,
}

impl<'a> CatalogProjector<'a> {
    pub fn new(directory: &'a BranchDirectory, overrides: &'a OverrideStore) -> Self {
        Self {
            directory,
            overrides,
        }
    }

    pub fn directory(&self) -> &'a BranchDirectory {
        self.directory
    }

    /// Project `entities` for a branch, or store-wide when `branch_id` is `None`
    pub fn project(
        &self,
        entities: &[CatalogEntity],
        branch_id: Option<BranchId>,
        mode: ProjectionMode,
    ) -> Result<Projection, NotFound> {
        let Some(branch_id) = branch_id else {
            return Ok(self.project_unscoped(entities, mode));
        };
        self.directory.require(branch_id)?;

        let mut warnings = Diagnostics::default();
        let mut resolved = Vec::with_capacity(entities.len());
        for entity in entities {
            self.audit(entity, &mut warnings);
            let resolution = resolve(entity, self.overrides.for_entity(entity.id), branch_id);
            if mode == ProjectionMode::Admin || resolution.available {
                resolved.push(ResolvedEntity::new(entity, &resolution));
            }
            warnings.extend(resolution.warnings);
        }

        tracing::debug!(
            branch_id,
            ?mode,
            total = entities.len(),
            returned = resolved.len(),
            warnings = warnings.len(),
            "Catalog projected"
        );

        Ok(Projection {
            branch_id: Some(branch_id),
            mode,
            entities: resolved,
            warnings,
        })
    }

    /// Store-wide view: scope and overrides are ignored, base fields apply
    pub fn project_unscoped(&self, entities: &[CatalogEntity], mode: ProjectionMode) -> Projection {
        let resolved: Vec<_> = entities
            .iter()
            .map(|entity| (entity, resolve_unscoped(entity)))
            .filter(|(_, r)| mode == ProjectionMode::Admin || r.available)
            .map(|(entity, r)| ResolvedEntity::new(entity, &r))
            .collect();

        tracing::debug!(
            ?mode,
            total = entities.len(),
            returned = resolved.len(),
            "Unscoped catalog projected"
        );

        Projection {
            branch_id: None,
            mode,
            entities: resolved,
            warnings: Diagnostics::default(),
        }
    }

    /// Report override and scope ids that are not branches of this store
    fn audit(&self, entity: &CatalogEntity, warnings: &mut Diagnostics) {
        for o in self.overrides.for_entity(entity.id) {
            if !self.directory.contains(o.branch_id) {
                warnings.report(IntegrityWarning::CrossStoreOverride {
                    entity_id: entity.id,
                    branch_id: o.branch_id,
                });
            }
        }
        for branch_id in entity.scope.branch_ids() {
            if !self.directory.contains(branch_id) {
                warnings.report(IntegrityWarning::UnknownScopeBranch {
                    entity_id: entity.id,
                    branch_id,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BranchCreate, BranchOverride, BusinessType, Scope, Store};

    fn directory() -> BranchDirectory {
        let store = Store {
            id: 1,
            name: "Pasta Bar".to_string(),
            business_type: BusinessType::Fnb,
        };
        let branches = (1..=4)
            .map(|id| {
                store.open_branch(
                    id,
                    BranchCreate {
                        name: format!("Branch {id}"),
                        address: None,
                        operating_status: None,
                    },
                )
            })
            .collect::<Vec<_>>();
        BranchDirectory::with_branches(store, branches).unwrap()
    }

    fn catalog() -> Vec<CatalogEntity> {
        vec![
            CatalogEntity::category(1, 1, "Starters"),
            CatalogEntity::menu_item(10, 1, "Soup", Money::from_cents(450)).in_category(1),
            CatalogEntity::menu_item(11, 1, "Salad", Money::from_cents(700))
                .in_category(1)
                .with_scope(Scope::only([1, 4])),
            CatalogEntity::menu_item(12, 1, "Bread", Money::from_cents(200)).in_category(1),
        ]
    }

    fn overrides() -> OverrideStore {
        OverrideStore::from_overrides([
            BranchOverride::price(10, 2, Money::from_cents(500)),
            BranchOverride::disabled(12, 2),
        ])
    }

    #[test]
    fn test_diner_excludes_unavailable() {
        let dir = directory();
        let store = overrides();
        let projector = CatalogProjector::new(&dir, &store);

        let projection = projector
            .project(&catalog(), Some(2), ProjectionMode::Diner)
            .unwrap();
        let ids: Vec<_> = projection.entities.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 10]);
        assert_eq!(projection.get(10).unwrap().price, Some(Money::from_cents(500)));
        assert!(projection.warnings.is_empty());
    }

    #[test]
    fn test_admin_keeps_order_and_flags() {
        let dir = directory();
        let store = overrides();
        let projector = CatalogProjector::new(&dir, &store);

        let projection = projector
            .project(&catalog(), Some(2), ProjectionMode::Admin)
            .unwrap();
        let flags: Vec<_> = projection
            .entities
            .iter()
            .map(|e| (e.id, e.available))
            .collect();
        assert_eq!(flags, vec![(1, true), (10, true), (11, false), (12, false)]);
        // Disabled item still carries its base price
        assert_eq!(projection.get(12).unwrap().price, Some(Money::from_cents(200)));
    }

    #[test]
    fn test_admin_filtered_equals_diner() {
        let dir = directory();
        let store = overrides();
        let projector = CatalogProjector::new(&dir, &store);
        let entities = catalog();

        for branch in 1..=4 {
            let admin = projector
                .project(&entities, Some(branch), ProjectionMode::Admin)
                .unwrap();
            let diner = projector
                .project(&entities, Some(branch), ProjectionMode::Diner)
                .unwrap();
            assert_eq!(admin.available_only(), diner);
        }
    }

    #[test]
    fn test_unknown_branch_is_not_found() {
        let dir = directory();
        let store = OverrideStore::new();
        let projector = CatalogProjector::new(&dir, &store);

        let err = projector
            .project(&catalog(), Some(99), ProjectionMode::Diner)
            .unwrap_err();
        assert_eq!(err, NotFound::Branch { branch_id: 99 });
    }

    #[test]
    fn test_unscoped_ignores_scope_and_overrides() {
        let dir = directory();
        let store = overrides();
        let projector = CatalogProjector::new(&dir, &store);

        let projection = projector
            .project(&catalog(), None, ProjectionMode::Diner)
            .unwrap();
        assert_eq!(projection.branch_id, None);
        assert_eq!(projection.len(), 4);
        assert_eq!(projection.get(10).unwrap().price, Some(Money::from_cents(450)));
    }

    #[test]
    fn test_integrity_audit_reports_foreign_ids() {
        let dir = directory();
        let store = OverrideStore::from_overrides([BranchOverride::disabled(10, 42)]);
        let projector = CatalogProjector::new(&dir, &store);
        let entities = vec![
            CatalogEntity::menu_item(10, 1, "Soup", Money::from_cents(450)),
            CatalogEntity::menu_item(11, 1, "Salad", Money::from_cents(700))
                .with_scope(Scope::only([1, 77])),
        ];

        let projection = projector
            .project(&entities, Some(1), ProjectionMode::Diner)
            .unwrap();
        // Nothing is dropped because of bad data
        assert_eq!(projection.len(), 2);
        let kinds: Vec<_> = projection.warnings.iter().cloned().collect();
        assert_eq!(
            kinds,
            vec![
                IntegrityWarning::CrossStoreOverride {
                    entity_id: 10,
                    branch_id: 42,
                },
                IntegrityWarning::UnknownScopeBranch {
                    entity_id: 11,
                    branch_id: 77,
                },
            ]
        );
    }

    #[test]
    fn test_projection_serializes_camel_case() {
        let dir = directory();
        let store = overrides();
        let projector = CatalogProjector::new(&dir, &store);
        let projection = projector
            .project(&catalog(), Some(2), ProjectionMode::Diner)
            .unwrap();

        let value = serde_json::to_value(&projection).unwrap();
        assert_eq!(value["branchId"], 2);
        assert_eq!(value["mode"], "DINER");
        assert_eq!(value["entities"][1]["categoryId"], 1);
        assert_eq!(value["entities"][1]["price"], 5.0);
    }
}
