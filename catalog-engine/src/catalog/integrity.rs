//! Data-integrity diagnostics
//!
//! Malformed override or scope data never aborts a resolution. The engine
//! resolves deterministically, logs the problem and hands it back alongside
//! the result.

use serde::Serialize;
use shared::{BranchId, EntityId, ErrorCode, Money};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum IntegrityWarning {
    /// Several overrides for one (entity, branch); the last one wins
    DuplicateOverride {
        entity_id: EntityId,
        branch_id: BranchId,
        count: usize,
    },
    /// Override references a branch that is not part of the entity's store
    CrossStoreOverride {
        entity_id: EntityId,
        branch_id: BranchId,
    },
    /// Scope lists a branch id the store does not have
    UnknownScopeBranch {
        entity_id: EntityId,
        branch_id: BranchId,
    },
    /// Override price below zero; the base price is used instead
    NegativeOverridePrice {
        entity_id: EntityId,
        branch_id: BranchId,
        price: Money,
    },
    /// Categories have no price, the override price is ignored
    CategoryPriceOverride {
        entity_id: EntityId,
        branch_id: BranchId,
    },
}

impl IntegrityWarning {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateOverride { .. } => ErrorCode::DuplicateOverride,
            Self::CrossStoreOverride { .. } => ErrorCode::CrossStoreOverride,
            Self::UnknownScopeBranch { .. } => ErrorCode::UnknownScopeBranch,
            Self::NegativeOverridePrice { .. } => ErrorCode::NegativeOverridePrice,
            Self::CategoryPriceOverride { .. } => ErrorCode::CategoryPriceOverride,
        }
    }

    pub fn entity_id(&self) -> EntityId {
        match self {
            Self::DuplicateOverride { entity_id, .. }
            | Self::CrossStoreOverride { entity_id, .. }
            | Self::UnknownScopeBranch { entity_id, .. }
            | Self::NegativeOverridePrice { entity_id, .. }
            | Self::CategoryPriceOverride { entity_id, .. } => *entity_id,
        }
    }

    pub fn branch_id(&self) -> BranchId {
        match self {
            Self::DuplicateOverride { branch_id, .. }
            | Self::CrossStoreOverride { branch_id, .. }
            | Self::UnknownScopeBranch { branch_id, .. }
            | Self::NegativeOverridePrice { branch_id, .. }
            | Self::CategoryPriceOverride { branch_id, .. } => *branch_id,
        }
    }
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateOverride {
                entity_id,
                branch_id,
                count,
            } => write!(
                f,
                "entity {entity_id} has {count} overrides for branch {branch_id}, using the last one"
            ),
            Self::CrossStoreOverride {
                entity_id,
                branch_id,
            } => write!(
                f,
                "entity {entity_id} has an override for branch {branch_id} outside its store"
            ),
            Self::UnknownScopeBranch {
                entity_id,
                branch_id,
            } => write!(f, "entity {entity_id} is scoped to unknown branch {branch_id}"),
            Self::NegativeOverridePrice {
                entity_id,
                branch_id,
                price,
            } => write!(
                f,
                "entity {entity_id} has negative price {price} at branch {branch_id}"
            ),
            Self::CategoryPriceOverride {
                entity_id,
                branch_id,
            } => write!(
                f,
                "category {entity_id} has a price override at branch {branch_id}"
            ),
        }
    }
}

/// Collected diagnostics for one resolution or projection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<IntegrityWarning>);

impl Diagnostics {
    /// Log a warning and keep it for the caller
    pub fn report(&mut self, warning: IntegrityWarning) {
        tracing::warn!(
            code = %warning.code(),
            entity_id = warning.entity_id(),
            branch_id = warning.branch_id(),
            "{}",
            warning
        );
        self.0.push(warning);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IntegrityWarning> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<IntegrityWarning> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a IntegrityWarning;
    type IntoIter = std::slice::Iter<'a, IntegrityWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_codes() {
        let w = IntegrityWarning::DuplicateOverride {
            entity_id: 1,
            branch_id: 2,
            count: 3,
        };
        assert_eq!(w.code(), ErrorCode::DuplicateOverride);
        assert!(w.code().is_integrity());
        assert_eq!(w.entity_id(), 1);
        assert_eq!(w.branch_id(), 2);
        assert_eq!(
            w.to_string(),
            "entity 1 has 3 overrides for branch 2, using the last one"
        );
    }

    #[test]
    fn test_warning_serialization() {
        let w = IntegrityWarning::NegativeOverridePrice {
            entity_id: 7,
            branch_id: 3,
            price: Money::from_cents(-250),
        };
        let value = serde_json::to_value(&w).unwrap();
        assert_eq!(value["kind"], "NEGATIVE_OVERRIDE_PRICE");
        assert_eq!(value["entityId"], 7);
        assert_eq!(value["price"], -2.5);
    }

    #[test]
    fn test_diagnostics_collects() {
        let mut d = Diagnostics::default();
        assert!(d.is_empty());
        d.report(IntegrityWarning::UnknownScopeBranch {
            entity_id: 1,
            branch_id: 99,
        });
        let mut other = Diagnostics::default();
        other.report(IntegrityWarning::CategoryPriceOverride {
            entity_id: 2,
            branch_id: 1,
        });
        d.extend(other);
        assert_eq!(d.len(), 2);
        assert_eq!(d.iter().map(|w| w.entity_id()).collect::<Vec<_>>(), vec![1, 2]);
    }
}
