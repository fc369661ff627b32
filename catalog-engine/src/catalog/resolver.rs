//! Resolution Engine
//!
//! Computes the effective price and availability of one catalog entity at one
//! branch. Precedence, highest first:
//!
//! 1. Scope: a restricted entity outside its scope is unavailable. Overrides
//!    can only narrow visibility inside the scope, never widen it.
//! 2. Override lookup for the branch; duplicates resolve to the last record.
//! 3. Availability: explicit `available: false` wins; `true`, a price-only
//!    override, or no override at all leaves the entity available.
//! 4. Price: override price when available and set, else the base price.
//!
//! The store-wide `base_available` flag only drives the unscoped view.

use super::integrity::{Diagnostics, IntegrityWarning};
use serde::Serialize;
use shared::models::{BranchOverride, CatalogEntity};
use shared::{BranchId, Money};

/// Effective (price, availability) pair
///
/// `price` is `Some` for every menu item, including unavailable ones, and
/// `None` for categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub price: Option<Money>,
    pub available: bool,
    #[serde(skip_serializing_if = "Diagnostics::is_empty")]
    pub warnings: Diagnostics,
}

impl Resolution {
    fn base(entity: &CatalogEntity, available: bool) -> Self {
        debug_assert!(
            entity.base_price.is_none_or(|p| !p.is_negative()),
            "entity {} has a negative base price",
            entity.id
        );
        Self {
            price: entity.base_price,
            available,
            warnings: Diagnostics::default(),
        }
    }
}

/// Resolve an entity at a branch
///
/// `overrides` may contain records for other entities or branches; only the
/// ones matching both are considered.
pub fn resolve(
    entity: &CatalogEntity,
    overrides: &[BranchOverride],
    branch_id: BranchId,
) -> Resolution {
    if !entity.scope.contains(branch_id) {
        return Resolution::base(entity, false);
    }

    let mut warnings = Diagnostics::default();
    let found = find_override(entity, overrides, branch_id, &mut warnings);
    let override_price = found.and_then(|o| effective_price(entity, o, &mut warnings));

    let available = found.and_then(|o| o.available).unwrap_or(true);

    let mut resolution = Resolution::base(entity, available);
    if available && let Some(price) = override_price {
        resolution.price = Some(price);
    }
    resolution.warnings = warnings;
    resolution
}

/// Resolve without a branch: scope and overrides are ignored
pub fn resolve_unscoped(entity: &CatalogEntity) -> Resolution {
    Resolution::base(entity, entity.base_available)
}

/// Last override recorded for (entity, branch)
fn find_override<'a>(
    entity: &CatalogEntity,
    overrides: &'a [BranchOverride],
    branch_id: BranchId,
    warnings: &mut Diagnostics,
) -> Option<&'a BranchOverride> {
    let mut matches = overrides
        .iter()
        .filter(|o| o.entity_id == entity.id && o.branch_id == branch_id);
    let first = matches.next()?;
    let (count, last) = matches.fold((1, first), |(n, _), o| (n + 1, o));
    if count > 1 {
        warnings.report(IntegrityWarning::DuplicateOverride {
            entity_id: entity.id,
            branch_id,
            count,
        });
    }
    Some(last)
}

/// Override price usable for this entity, if any
fn effective_price(
    entity: &CatalogEntity,
    o: &BranchOverride,
    warnings: &mut Diagnostics,
) -> Option<Money> {
    let price = o.price?;
    if !entity.is_menu_item() {
        warnings.report(IntegrityWarning::CategoryPriceOverride {
            entity_id: entity.id,
            branch_id: o.branch_id,
        });
        return None;
    }
    if price.is_negative() {
        warnings.report(IntegrityWarning::NegativeOverridePrice {
            entity_id: entity.id,
            branch_id: o.branch_id,
            price,
        });
        return None;
    }
    Some(price)
}
