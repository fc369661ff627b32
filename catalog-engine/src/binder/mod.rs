//! Table/QR Binder
//!
//! Maps a scanned table to its branch and builds the diner menu for it.
//! Unknown tables never fail the request: the diner gets the store-wide menu
//! and the caller gets the reason.

use crate::catalog::{
    BranchDirectory, BranchMenu, CatalogProjector, OverrideStore, Projection, ProjectionMode,
    build_menu,
};
use crate::error::NotFound;
use serde::{Deserialize, Serialize};
use shared::models::{CatalogEntity, DiningTable, OperatingStatus, TableStatus};
use shared::{BranchId, StoreId, TableId};


/// Where the public QR menu is served
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuUrlConfig {
    pub base_url: String,
}

impl MenuUrlConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `{base}/emenu/{store}?table={id}`; `preview` stands in for a missing store
    pub fn menu_url(&self, store_id: Option<StoreId>, table_id: Option<TableId>) -> String {
        let base = self.base_url.trim_end_matches('/');
        let mut url = match store_id {
            Some(id) => format!("{base}/emenu/{id}"),
            None => format!("{base}/emenu/preview"),
        };
        if let Some(table_id) = table_id {
            url.push_str(&format!("?table={table_id}"));
        }
        url
    }
}

/// Branch context of a scanned table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableContext {
    pub table_id: TableId,
    pub table_number: String,
    pub branch_id: BranchId,
    pub branch_name: String,
    pub operating_status: OperatingStatus,
}

/// Menu served for a table scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableMenu {
    /// Table found: projected for its branch
    Scoped {
        context: TableContext,
        menu: Projection,
    },
    /// Table not recognized: store-wide unscoped menu
    Fallback { reason: NotFound, menu: Projection },
}

impl TableMenu {
    pub fn projection(&self) -> &Projection {
        match self {
            Self::Scoped { menu, .. } | Self::Fallback { menu, .. } => menu,
        }
    }

    pub fn into_projection(self) -> Projection {
        match self {
            Self::Scoped { menu, .. } | Self::Fallback { menu, .. } => menu,
        }
    }

    pub fn context(&self) -> Option<&TableContext> {
        match self {
            Self::Scoped { context, .. } => Some(context),
            Self::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Query of the public QR menu endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRequest {
    pub store_id: StoreId,
    #[serde(default, alias = "table")]
    pub table_id: Option<TableId>,
}

/// Payload of the public QR menu endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub store_id: StoreId,
    pub menu_url: String,
    pub table: Option<TableContext>,
    /// Set when a table was requested but could not be used
    pub fallback: Option<NotFound>,
    pub menu: BranchMenu,
}

/// Table counts of one branch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub cleaning: usize,
}

/// Count the tables of `branch_id` per status
pub fn table_stats(tables: &[DiningTable], branch_id: BranchId) -> TableStats {
    tables
        .iter()
        .filter(|t| t.branch_id == branch_id)
        .fold(TableStats::default(), |mut stats, t| {
            stats.total += 1;
            match t.status {
                TableStatus::Available => stats.available += 1,
                TableStatus::Occupied => stats.occupied += 1,
                TableStatus::Reserved => stats.reserved += 1,
                TableStatus::Cleaning => stats.cleaning += 1,
            }
            stats
        })
}

#[derive(Debug, Clone, Copy)]
pub struct TableBinder<'a> {
    directory: &'a BranchDirectory,
    tables: &'a [DiningTable],
    urls: &'a MenuUrlConfig,
}

impl<'a> TableBinder<'a> {
    pub fn new(
        directory: &'a BranchDirectory,
        tables: &'a [DiningTable],
        urls: &'a MenuUrlConfig,
    ) -> Self {
        Self {
            directory,
            tables,
            urls,
        }
    }

    fn find_table(&self, table_id: TableId) -> Option<&'a DiningTable> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    /// Owning branch of a table
    pub fn resolve_table_context(&self, table_id: TableId) -> Result<TableContext, NotFound> {
        let table = self
            .find_table(table_id)
            .ok_or(NotFound::Table { table_id })?;
        let branch = self
            .directory
            .get(table.branch_id)
            .ok_or(NotFound::TableBranch {
                table_id,
                branch_id: table.branch_id,
            })?;
        Ok(TableContext {
            table_id,
            table_number: table.table_number.clone(),
            branch_id: branch.id,
            branch_name: branch.name.clone(),
            operating_status: branch.operating_status,
        })
    }

    pub fn build_menu_url(&self, store_id: Option<StoreId>, table_id: Option<TableId>) -> String {
        self.urls.menu_url(store_id, table_id)
    }

    /// Compare a scanned token with the table's stored QR token
    pub fn verify_table_token(&self, table_id: TableId, token: &str) -> bool {
        self.find_table(table_id)
            .and_then(|t| t.qr_code.as_deref())
            .is_some_and(|code| !code.is_empty() && code == token)
    }

    /// Diner menu for a scanned table, falling back to the store-wide menu
    pub fn resolve_menu_for_table(
        &self,
        table_id: TableId,
        entities: &[CatalogEntity],
        overrides: &OverrideStore,
    ) -> TableMenu {
        let projector = CatalogProjector::new(self.directory, overrides);
        let scoped = self.resolve_table_context(table_id).and_then(|context| {
            projector
                .project(entities, Some(context.branch_id), ProjectionMode::Diner)
                .map(|menu| (context, menu))
        });
        match scoped {
            Ok((context, menu)) => TableMenu::Scoped { context, menu },
            Err(reason) => {
                tracing::info!(table_id, %reason, "Table not recognized, serving store menu");
                TableMenu::Fallback {
                    reason,
                    menu: projector.project_unscoped(entities, ProjectionMode::Diner),
                }
            }
        }
    }

    /// Public QR endpoint: table menu when a table is given, store menu otherwise
    pub fn menu_for_request(
        &self,
        request: &MenuRequest,
        entities: &[CatalogEntity],
        overrides: &OverrideStore,
    ) -> Result<MenuResponse, NotFound> {
        let store_id = self.directory.store().id;
        if request.store_id != store_id {
            return Err(NotFound::Store {
                store_id: request.store_id,
            });
        }

        let (table, fallback, projection) = match request.table_id {
            Some(table_id) => match self.resolve_menu_for_table(table_id, entities, overrides) {
                TableMenu::Scoped { context, menu } => (Some(context), None, menu),
                TableMenu::Fallback { reason, menu } => (None, Some(reason), menu),
            },
            None => {
                let projector = CatalogProjector::new(self.directory, overrides);
                let menu = projector.project_unscoped(entities, ProjectionMode::Diner);
                (None, None, menu)
            }
        };

        Ok(MenuResponse {
            store_id,
            menu_url: self.build_menu_url(Some(store_id), request.table_id),
            table,
            fallback,
            menu: build_menu(&projection),
        })
    }

    pub fn table_stats(&self, branch_id: BranchId) -> TableStats {
        table_stats(self.tables, branch_id)
    }
}
