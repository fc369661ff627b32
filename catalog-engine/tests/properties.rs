//! Cross-module properties checked over every branch of the demo catalog

mod common;

use catalog_engine::{ProjectionMode, resolve};
use common::{BRANCHES, fixture};
use shared::Money;
use shared::models::{BranchOverride, CatalogEntity, Scope};

#[test]
fn test_unrestricted_without_override_is_base() {
    let parts = fixture();
    for entity in parts
        .entities
        .iter()
        .filter(|e| !e.scope.is_restricted())
        .filter(|e| parts.overrides.for_entity(e.id).is_empty())
    {
        for branch in BRANCHES {
            let r = resolve(entity, &[], branch);
            assert!(r.available, "entity {} at branch {branch}", entity.id);
            assert_eq!(r.price, entity.base_price);
        }
    }
}

#[test]
fn test_override_never_widens_scope() {
    let entity = CatalogEntity::menu_item(1, 1, "Gelato", Money::from_cents(400))
        .with_scope(Scope::only([1, 4]));
    for branch in [2, 3] {
        let overrides = [
            BranchOverride {
                entity_id: 1,
                branch_id: branch,
                price: Some(Money::from_cents(300)),
                available: Some(true),
            },
            BranchOverride::price(1, branch, Money::from_cents(350)),
        ];
        let r = resolve(&entity, &overrides, branch);
        assert!(!r.available);
        assert_eq!(r.price, Some(Money::from_cents(400)));
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let parts = fixture();
    for entity in &parts.entities {
        for branch in BRANCHES {
            let overrides = parts.overrides.for_entity(entity.id);
            assert_eq!(
                resolve(entity, overrides, branch),
                resolve(entity, overrides, branch)
            );
        }
    }
}

#[test]
fn test_admin_view_filtered_is_diner_view() {
    let parts = fixture();
    let projector = parts.projector();
    for branch in BRANCHES.into_iter().map(Some).chain([None]) {
        let admin = projector
            .project(&parts.entities, branch, ProjectionMode::Admin)
            .unwrap();
        let diner = projector
            .project(&parts.entities, branch, ProjectionMode::Diner)
            .unwrap();
        assert_eq!(admin.len(), parts.entities.len());
        assert_eq!(admin.available_only(), diner);
    }
}

#[test]
fn test_prices_never_negative() {
    let mut parts = fixture();
    parts
        .overrides
        .upsert(BranchOverride::price(11, 1, Money::from_cents(-100)));
    let projector = parts.projector();
    for branch in BRANCHES {
        let projection = projector
            .project(&parts.entities, Some(branch), ProjectionMode::Admin)
            .unwrap();
        for entity in &projection.entities {
            match entity.price {
                Some(price) => {
                    assert!(entity.is_menu_item());
                    assert!(!price.is_negative());
                }
                None => assert!(!entity.is_menu_item()),
            }
        }
    }
}

#[test]
fn test_concurrent_projections_share_snapshot() {
    let parts = fixture();
    let projector = parts.projector();
    let expected: Vec<_> = BRANCHES
        .iter()
        .map(|&b| {
            projector
                .project(&parts.entities, Some(b), ProjectionMode::Diner)
                .unwrap()
        })
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let branch = BRANCHES[i % BRANCHES.len()];
                let entities = &parts.entities;
                s.spawn(move || {
                    (
                        branch,
                        projector
                            .project(entities, Some(branch), ProjectionMode::Diner)
                            .unwrap(),
                    )
                })
            })
            .collect();
        for handle in handles {
            let (branch, projection) = handle.join().unwrap();
            let index = BRANCHES.iter().position(|&b| b == branch).unwrap();
            assert_eq!(projection, expected[index]);
        }
    });
}
