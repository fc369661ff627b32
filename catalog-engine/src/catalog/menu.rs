//! Branch menu assembly
//!
//! Groups a projection into the sections a diner browses.

use super::projector::{Projection, ResolvedEntity};
use serde::Serialize;
use shared::{BranchId, EntityId, Money};
use std::collections::HashMap;

/// One visible category and its visible items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub category: ResolvedEntity,
    pub items: Vec<ResolvedEntity>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchMenuStats {
    pub total_items: usize,
    pub total_categories: usize,
    /// Mean item price, zero for an empty menu
    pub average_price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchMenu {
    pub branch_id: Option<BranchId>,
    pub sections: Vec<MenuSection>,
    /// Visible items that belong to no category
    pub uncategorized: Vec<ResolvedEntity>,
    pub stats: BranchMenuStats,
}

impl BranchMenu {
    pub fn items(&self) -> impl Iterator<Item = &ResolvedEntity> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter())
            .chain(self.uncategorized.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.stats.total_items == 0
    }
}

/// Build the diner menu from a projection
///
/// Only available entities are used, so an admin projection yields the same
/// menu as a diner one. Items whose category is hidden are dropped with it.
pub fn build_menu(projection: &Projection) -> BranchMenu {
    let visible = || projection.entities.iter().filter(|e| e.available);

    let mut sections: Vec<MenuSection> = visible()
        .filter(|e| !e.is_menu_item())
        .map(|category| MenuSection {
            category: category.clone(),
            items: Vec::new(),
        })
        .collect();
    let index: HashMap<EntityId, usize> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| (s.category.id, i))
        .collect();

    let mut uncategorized = Vec::new();
    let mut dropped = 0usize;
    for item in visible().filter(|e| e.is_menu_item()) {
        match item.category_id {
            None => uncategorized.push(item.clone()),
            Some(category_id) => match index.get(&category_id) {
                Some(&i) => sections[i].items.push(item.clone()),
                None => dropped += 1,
            },
        }
    }

    let mut menu = BranchMenu {
        branch_id: projection.branch_id,
        sections,
        uncategorized,
        stats: BranchMenuStats::default(),
    };
    menu.stats = BranchMenuStats {
        total_items: menu.items().count(),
        total_categories: menu.sections.len(),
        average_price: Money::average(menu.items().filter_map(|e| e.price))
            .unwrap_or(Money::ZERO),
    };

    tracing::debug!(
        branch_id = ?menu.branch_id,
        sections = menu.stats.total_categories,
        items = menu.stats.total_items,
        dropped,
        "Branch menu built"
    );
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::integrity::Diagnostics;
    use crate::catalog::projector::ProjectionMode;
    use shared::models::EntityKind;

    fn entity(
        id: EntityId,
        category_id: Option<EntityId>,
        cents: Option<i64>,
        available: bool,
    ) -> ResolvedEntity {
        ResolvedEntity {
            id,
            kind: if cents.is_some() {
                EntityKind::MenuItem
            } else {
                EntityKind::Category
            },
            name: format!("entity {id}"),
            category_id,
            sort_order: 0,
            price: cents.map(Money::from_cents),
            available,
        }
    }

    fn projection(entities: Vec<ResolvedEntity>) -> Projection {
        Projection {
            branch_id: Some(2),
            mode: ProjectionMode::Admin,
            entities,
            warnings: Diagnostics::default(),
        }
    }

    #[test]
    fn test_groups_items_under_categories() {
        let menu = build_menu(&projection(vec![
            entity(1, None, None, true),
            entity(2, None, None, true),
            entity(10, Some(2), Some(300), true),
            entity(11, Some(1), Some(500), true),
            entity(12, Some(1), Some(800), false),
            entity(13, None, Some(250), true),
        ]));

        assert_eq!(menu.branch_id, Some(2));
        assert_eq!(menu.sections.len(), 2);
        assert_eq!(menu.sections[0].category.id, 1);
        assert_eq!(
            menu.sections[0].items.iter().map(|e| e.id).collect::<Vec<_>>(),
            vec![11]
        );
        assert_eq!(menu.sections[1].items[0].id, 10);
        assert_eq!(menu.uncategorized.len(), 1);
        assert_eq!(menu.stats.total_items, 3);
        assert_eq!(menu.stats.total_categories, 2);
        // (3.00 + 5.00 + 2.50) / 3 = 3.50
        assert_eq!(menu.stats.average_price, Money::from_cents(350));
    }

    #[test]
    fn test_hidden_category_drops_items() {
        let menu = build_menu(&projection(vec![
            entity(1, None, None, false),
            entity(10, Some(1), Some(300), true),
            entity(11, Some(99), Some(300), true),
        ]));
        assert!(menu.sections.is_empty());
        assert!(menu.uncategorized.is_empty());
        assert!(menu.is_empty());
        assert_eq!(menu.stats.average_price, Money::ZERO);
    }

    #[test]
    fn test_empty_category_section_kept() {
        let menu = build_menu(&projection(vec![entity(1, None, None, true)]));
        assert_eq!(menu.sections.len(), 1);
        assert!(menu.sections[0].items.is_empty());
        assert_eq!(menu.stats.total_items, 0);
    }
}
