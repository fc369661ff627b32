//! Lookup failures returned as ordinary values
//!
//! Unknown tables and branches are expected at the QR endpoint (stale codes,
//! deleted tables), so callers get a [`NotFound`] they can render a fallback
//! for instead of an error that aborts the request.

use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::{BranchId, StoreId, TableId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum NotFound {
    #[error("store {store_id} not found")]
    Store { store_id: StoreId },
    #[error("branch {branch_id} not found")]
    Branch { branch_id: BranchId },
    #[error("table {table_id} not found")]
    Table { table_id: TableId },
    #[error("table {table_id} is bound to unknown branch {branch_id}")]
    TableBranch {
        table_id: TableId,
        branch_id: BranchId,
    },
}

impl NotFound {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Store { .. } => ErrorCode::StoreNotFound,
            Self::Branch { .. } => ErrorCode::BranchNotFound,
            Self::Table { .. } => ErrorCode::TableNotFound,
            Self::TableBranch { .. } => ErrorCode::TableBranchNotFound,
        }
    }
}

impl From<NotFound> for AppError {
    fn from(err: NotFound) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            NotFound::Store { store_id } => app.with_detail("store_id", store_id),
            NotFound::Branch { branch_id } => app.with_detail("branch_id", branch_id),
            NotFound::Table { table_id } => app.with_detail("table_id", table_id),
            NotFound::TableBranch {
                table_id,
                branch_id,
            } => app
                .with_detail("table_id", table_id)
                .with_detail("branch_id", branch_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_into_app_error() {
        let err: AppError = NotFound::Table { table_id: 42 }.into();
        assert_eq!(err.code, ErrorCode::TableNotFound);
        assert_eq!(err.message, "table 42 not found");
        assert_eq!(err.details.unwrap().get("table_id").unwrap(), 42);

        let err: AppError = NotFound::TableBranch {
            table_id: 3,
            branch_id: 9,
        }
        .into();
        assert_eq!(err.code, ErrorCode::TableBranchNotFound);
        assert_eq!(err.http_status().as_u16(), 404);
    }

    #[test]
    fn test_not_found_serializes_tagged() {
        let value = serde_json::to_value(NotFound::Branch { branch_id: 5 }).unwrap();
        assert_eq!(value, serde_json::json!({"kind": "BRANCH", "branchId": 5}));
    }
}
