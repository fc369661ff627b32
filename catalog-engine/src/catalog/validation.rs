//! Write-time validation
//!
//! Run by the CRUD layer before records reach the engine. The resolver
//! assumes validated input and does not call into this module.

use super::directory::BranchDirectory;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BranchOverride, CatalogEntity, DiningTable, Scope};
use shared::money::MAX_PRICE;
use shared::Money;

// ── Limits ──────────────────────────────────────────────────────────

/// Entity and branch names, table numbers
pub const MAX_NAME_LEN: usize = 200;

/// Seats per table
pub const MAX_TABLE_CAPACITY: i32 = 100;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a catalog price: non-negative and at most `MAX_PRICE`.
pub fn validate_price(price: Money, field: &str) -> AppResult<()> {
    if price.is_negative() || price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::InvalidPrice,
            format!("{field} must be between 0 and {MAX_PRICE}, got {price}"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

// ── Records ─────────────────────────────────────────────────────────

/// Validate a category or menu item against its store
pub fn validate_entity(entity: &CatalogEntity, directory: &BranchDirectory) -> AppResult<()> {
    validate_required_text(&entity.name, "name", MAX_NAME_LEN)?;
    if entity.store_id != directory.store().id {
        return Err(AppError::validation(format!(
            "entity {} belongs to store {}, not {}",
            entity.id,
            entity.store_id,
            directory.store().id
        ))
        .with_detail("entity_id", entity.id));
    }
    match (entity.is_menu_item(), entity.base_price) {
        (true, Some(price)) => validate_price(price, "basePrice")?,
        (true, None) => {
            return Err(AppError::with_message(
                ErrorCode::MenuItemPriceRequired,
                format!("menu item {} has no base price", entity.id),
            )
            .with_detail("entity_id", entity.id));
        }
        (false, Some(_)) => {
            return Err(AppError::with_message(
                ErrorCode::CategoryPriceNotAllowed,
                format!("category {} cannot have a price", entity.id),
            )
            .with_detail("entity_id", entity.id));
        }
        (false, None) => {}
    }
    validate_scope(&entity.scope, directory)
}

/// Every restricted branch id must be a branch of the store
pub fn validate_scope(scope: &Scope, directory: &BranchDirectory) -> AppResult<()> {
    if let Some(unknown) = scope.branch_ids().find(|id| !directory.contains(*id)) {
        return Err(AppError::with_message(
            ErrorCode::ScopeBranchInvalid,
            format!("scope references unknown branch {unknown}"),
        )
        .with_detail("branch_id", unknown));
    }
    Ok(())
}

/// Validate an override for `entity` before it is stored
pub fn validate_override(
    o: &BranchOverride,
    entity: &CatalogEntity,
    directory: &BranchDirectory,
) -> AppResult<()> {
    if o.entity_id != entity.id {
        return Err(AppError::invalid_format(format!(
            "override targets entity {}, not {}",
            o.entity_id, entity.id
        )));
    }
    if entity.store_id != directory.store().id || !directory.contains(o.branch_id) {
        return Err(AppError::with_message(
            ErrorCode::CrossStoreOverride,
            format!(
                "branch {} is not a branch of store {}",
                o.branch_id, entity.store_id
            ),
        )
        .with_detail("entity_id", entity.id)
        .with_detail("branch_id", o.branch_id));
    }
    if let Some(price) = o.price {
        if !entity.is_menu_item() {
            return Err(AppError::with_message(
                ErrorCode::CategoryPriceNotAllowed,
                format!("category {} cannot have a price override", entity.id),
            )
            .with_detail("entity_id", entity.id));
        }
        validate_price(price, "price")?;
    }
    Ok(())
}

/// Validate a dining table and its branch binding
pub fn validate_table(table: &DiningTable, directory: &BranchDirectory) -> AppResult<()> {
    validate_required_text(&table.table_number, "tableNumber", MAX_NAME_LEN)?;
    if !(1..=MAX_TABLE_CAPACITY).contains(&table.capacity) {
        return Err(AppError::with_message(
            ErrorCode::InvalidTableCapacity,
            format!(
                "capacity must be between 1 and {MAX_TABLE_CAPACITY}, got {}",
                table.capacity
            ),
        )
        .with_detail("table_id", table.id));
    }
    if !directory.contains(table.branch_id) {
        return Err(AppError::with_message(
            ErrorCode::TableBranchNotFound,
            format!("table {} is bound to unknown branch {}", table.id, table.branch_id),
        )
        .with_detail("table_id", table.id)
        .with_detail("branch_id", table.branch_id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BranchCreate, BusinessType, Store, TableStatus};

    fn directory() -> BranchDirectory {
        let store = Store {
            id: 1,
            name: "Deli".to_string(),
            business_type: BusinessType::Hybrid,
        };
        let branch = store.open_branch(
            3,
            BranchCreate {
                name: "Harbour".to_string(),
                address: Some("Pier 3".to_string()),
                operating_status: None,
            },
        );
        BranchDirectory::with_branches(store, [branch]).unwrap()
    }

    fn table(capacity: i32, branch_id: i64) -> DiningTable {
        DiningTable {
            id: 8,
            branch_id,
            table_number: "B2".to_string(),
            capacity,
            status: TableStatus::Available,
            qr_code: None,
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Soup", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_required_text(&long, "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_price_bounds() {
        assert!(validate_price(Money::ZERO, "price").is_ok());
        assert!(validate_price(MAX_PRICE, "price").is_ok());
        assert_eq!(
            validate_price(Money::from_cents(-1), "price").unwrap_err().code,
            ErrorCode::InvalidPrice
        );
        assert_eq!(
            validate_price(Money::from_cents(100_000_001), "price")
                .unwrap_err()
                .code,
            ErrorCode::InvalidPrice
        );
    }

    #[test]
    fn test_entity_price_rules() {
        let dir = directory();
        let item = CatalogEntity::menu_item(1, 1, "Bagel", Money::from_cents(350));
        assert!(validate_entity(&item, &dir).is_ok());

        let mut no_price = item.clone();
        no_price.base_price = None;
        assert_eq!(
            validate_entity(&no_price, &dir).unwrap_err().code,
            ErrorCode::MenuItemPriceRequired
        );

        let mut priced_category = CatalogEntity::category(2, 1, "Bakery");
        priced_category.base_price = Some(Money::from_cents(100));
        assert_eq!(
            validate_entity(&priced_category, &dir).unwrap_err().code,
            ErrorCode::CategoryPriceNotAllowed
        );

        let negative = CatalogEntity::menu_item(3, 1, "Refund", Money::from_cents(-100));
        assert_eq!(
            validate_entity(&negative, &dir).unwrap_err().code,
            ErrorCode::InvalidPrice
        );
    }

    #[test]
    fn test_scope_must_use_store_branches() {
        let dir = directory();
        assert!(validate_scope(&Scope::All, &dir).is_ok());
        assert!(validate_scope(&Scope::only([3]), &dir).is_ok());
        let err = validate_scope(&Scope::only([3, 5]), &dir).unwrap_err();
        assert_eq!(err.code, ErrorCode::ScopeBranchInvalid);
    }

    #[test]
    fn test_override_rules() {
        let dir = directory();
        let item = CatalogEntity::menu_item(1, 1, "Bagel", Money::from_cents(350));
        let category = CatalogEntity::category(2, 1, "Bakery");

        assert!(validate_override(&BranchOverride::disabled(1, 3), &item, &dir).is_ok());
        assert_eq!(
            validate_override(&BranchOverride::disabled(1, 4), &item, &dir)
                .unwrap_err()
                .code,
            ErrorCode::CrossStoreOverride
        );
        assert_eq!(
            validate_override(
                &BranchOverride::price(2, 3, Money::from_cents(100)),
                &category,
                &dir
            )
            .unwrap_err()
            .code,
            ErrorCode::CategoryPriceNotAllowed
        );
        assert_eq!(
            validate_override(
                &BranchOverride::price(1, 3, Money::from_cents(-5)),
                &item,
                &dir
            )
            .unwrap_err()
            .code,
            ErrorCode::InvalidPrice
        );
    }

    #[test]
    fn test_table_rules() {
        let dir = directory();
        assert!(validate_table(&table(4, 3), &dir).is_ok());
        assert_eq!(
            validate_table(&table(0, 3), &dir).unwrap_err().code,
            ErrorCode::InvalidTableCapacity
        );
        assert_eq!(
            validate_table(&table(4, 9), &dir).unwrap_err().code,
            ErrorCode::TableBranchNotFound
        );
    }
}
