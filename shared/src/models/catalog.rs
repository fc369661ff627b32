//! Catalog Model
//!
//! Categories and menu items share one shape: a base record plus a branch
//! scope. Per-branch price/availability adjustments live in
//! [`BranchOverride`] records keyed by (entity, branch).

use crate::money::Money;
use crate::types::{BranchId, EntityId, StoreId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

/// Which branches may ever see an entity
///
/// Wire form is the legacy id array: an absent field or `[]` means every
/// branch of the store, a non-empty array restricts to those branches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    All,
    Only(BTreeSet<BranchId>),
}

impl Scope {
    pub fn only(branches: impl IntoIterator<Item = BranchId>) -> Self {
        Self::Only(branches.into_iter().collect())
    }

    pub fn contains(&self, branch_id: BranchId) -> bool {
        match self {
            Self::All => true,
            Self::Only(ids) => ids.contains(&branch_id),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, Self::Only(_))
    }

    /// Branch ids listed by a restricted scope (empty for `All`)
    pub fn branch_ids(&self) -> impl Iterator<Item = BranchId> + '_ {
        let ids = match self {
            Self::All => None,
            Self::Only(ids) => Some(ids.iter().copied()),
        };
        ids.into_iter().flatten()
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::All => serializer.collect_seq(std::iter::empty::<BranchId>()),
            Self::Only(ids) => serializer.collect_seq(ids),
        }
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ids = Option::<Vec<BranchId>>::deserialize(deserializer)?.unwrap_or_default();
        if ids.is_empty() {
            Ok(Self::All)
        } else {
            Ok(Self::only(ids))
        }
    }
}

/// Entity kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    Category,
    MenuItem,
}

/// Catalog entity (category or menu item)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntity {
    pub id: EntityId,
    pub store_id: StoreId,
    pub name: String,
    pub kind: EntityKind,
    /// Owning category (menu items only)
    #[serde(default)]
    pub category_id: Option<EntityId>,
    /// Store-wide price; present for menu items only
    #[serde(default)]
    pub base_price: Option<Money>,
    /// Store-wide flag; only the unscoped view reads it
    #[serde(default = "default_true", alias = "isAvailable")]
    pub base_available: bool,
    #[serde(default, rename = "scopeBranchIds", alias = "branchIds")]
    pub scope: Scope,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}

impl CatalogEntity {
    pub fn category(id: EntityId, store_id: StoreId, name: impl Into<String>) -> Self {
        Self {
            id,
            store_id,
            name: name.into(),
            kind: EntityKind::Category,
            category_id: None,
            base_price: None,
            base_available: true,
            scope: Scope::All,
            sort_order: 0,
        }
    }

    pub fn menu_item(
        id: EntityId,
        store_id: StoreId,
        name: impl Into<String>,
        base_price: Money,
    ) -> Self {
        Self {
            kind: EntityKind::MenuItem,
            base_price: Some(base_price),
            ..Self::category(id, store_id, name)
        }
    }

    pub fn in_category(mut self, category_id: EntityId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn is_menu_item(&self) -> bool {
        self.kind == EntityKind::MenuItem
    }
}

/// Branch-specific adjustment of one catalog entity
///
/// `None` fields inherit from the base record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BranchOverride {
    pub entity_id: EntityId,
    pub branch_id: BranchId,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl BranchOverride {
    pub fn price(entity_id: EntityId, branch_id: BranchId, price: Money) -> Self {
        Self {
            entity_id,
            branch_id,
            price: Some(price),
            available: None,
        }
    }

    pub fn disabled(entity_id: EntityId, branch_id: BranchId) -> Self {
        Self {
            entity_id,
            branch_id,
            price: None,
            available: Some(false),
        }
    }

    /// Both fields inherit: the record changes nothing
    pub fn is_noop(&self) -> bool {
        self.price.is_none() && self.available.is_none()
    }
}
