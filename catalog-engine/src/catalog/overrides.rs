//! Override Store
//!
//! Branch overrides grouped by entity id, so the projector looks them up in
//! O(1) per entity instead of scanning the full override list. Within one
//! entity the vector order is the insertion sequence; when duplicates exist
//! for a branch the resolver keeps the last one.

use shared::models::BranchOverride;
use shared::{BranchId, EntityId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    by_entity: HashMap<EntityId, Vec<BranchOverride>>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat override list by entity, keeping records as delivered
    /// (duplicates and no-op entries included)
    pub fn from_overrides(overrides: impl IntoIterator<Item = BranchOverride>) -> Self {
        let mut by_entity: HashMap<EntityId, Vec<BranchOverride>> = HashMap::new();
        for o in overrides {
            by_entity.entry(o.entity_id).or_default().push(o);
        }
        Self { by_entity }
    }

    /// Overrides attached to one entity, in insertion order
    pub fn for_entity(&self, entity_id: EntityId) -> &[BranchOverride] {
        self.by_entity
            .get(&entity_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Write path: store one override per (entity, branch)
    ///
    /// Any existing records for the pair are replaced. An override whose
    /// fields are both `None` is not stored; it deletes the pair instead.
    /// Returns the record that was effective before the write.
    pub fn upsert(&mut self, o: BranchOverride) -> Option<BranchOverride> {
        let previous = self.remove(o.entity_id, o.branch_id);
        if !o.is_noop() {
            self.by_entity.entry(o.entity_id).or_default().push(o);
        }
        previous
    }

    /// Remove every override for (entity, branch), returning the effective one
    pub fn remove(&mut self, entity_id: EntityId, branch_id: BranchId) -> Option<BranchOverride> {
        let entries = self.by_entity.get_mut(&entity_id)?;
        let mut removed = None;
        entries.retain(|o| {
            if o.branch_id == branch_id {
                removed = Some(o.clone());
                false
            } else {
                true
            }
        });
        if entries.is_empty() {
            self.by_entity.remove(&entity_id);
        }
        removed
    }

    /// Drop every override of an entity (entity deleted)
    pub fn remove_entity(&mut self, entity_id: EntityId) -> Vec<BranchOverride> {
        self.by_entity.remove(&entity_id).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_entity.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_entity.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BranchOverride> {
        self.by_entity.values().flatten()
    }
}

impl FromIterator<BranchOverride> for OverrideStore {
    fn from_iter<I: IntoIterator<Item = BranchOverride>>(iter: I) -> Self {
        Self::from_overrides(iter)
    }
}
