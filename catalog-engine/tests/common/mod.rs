#![allow(dead_code)]

use catalog_engine::{CatalogSnapshot, MenuUrlConfig, SnapshotParts};

pub const FIXTURE: &str = include_str!("../../demos/bella_italia.json");

pub const BRANCHES: [i64; 4] = [1, 2, 3, 4];

/// Bella Italia demo store
pub fn fixture() -> SnapshotParts {
    CatalogSnapshot::from_json(FIXTURE)
        .expect("fixture parses")
        .into_parts()
        .expect("fixture is consistent")
}

pub fn urls() -> MenuUrlConfig {
    MenuUrlConfig::new("https://menu.bella-italia.test")
}

pub fn ids<'a>(entities: impl IntoIterator<Item = &'a catalog_engine::ResolvedEntity>) -> Vec<i64> {
    entities.into_iter().map(|e| e.id).collect()
}
