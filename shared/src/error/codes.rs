//! Unified error codes for the branch catalog
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Store and branch errors
//! - 6xxx: Catalog errors (entities, overrides, data integrity)
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Store / Branch ====================
    /// Store not found
    StoreNotFound = 3001,
    /// Branch not found
    BranchNotFound = 3101,
    /// Branch belongs to another store
    BranchStoreMismatch = 3102,
    /// Branch id already registered
    BranchAlreadyExists = 3103,
    /// Business type cannot change once branches exist
    BusinessTypeLocked = 3104,

    // ==================== 6xxx: Catalog ====================
    /// Catalog entity not found
    EntityNotFound = 6001,
    /// Price is negative, not finite or above the maximum
    InvalidPrice = 6002,
    /// Categories carry no price
    CategoryPriceNotAllowed = 6003,
    /// Menu items require a base price
    MenuItemPriceRequired = 6004,
    /// Scope lists a branch outside the owning store
    ScopeBranchInvalid = 6005,

    /// More than one override for the same entity and branch
    DuplicateOverride = 6101,
    /// Override targets a branch of another store
    CrossStoreOverride = 6102,
    /// Scope references an unknown branch id
    UnknownScopeBranch = 6103,
    /// Override price is negative
    NegativeOverridePrice = 6104,
    /// Price override attached to a category
    CategoryPriceOverride = 6105,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is bound to a branch that does not exist
    TableBranchNotFound = 7002,
    /// Table capacity out of range
    InvalidTableCapacity = 7003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Whether this code describes malformed stored data rather than a bad request
    pub const fn is_integrity(&self) -> bool {
        matches!(
            self,
            ErrorCode::DuplicateOverride
                | ErrorCode::CrossStoreOverride
                | ErrorCode::UnknownScopeBranch
                | ErrorCode::NegativeOverridePrice
                | ErrorCode::CategoryPriceOverride
        )
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",

            // Store / Branch
            ErrorCode::StoreNotFound => "Store not found",
            ErrorCode::BranchNotFound => "Branch not found",
            ErrorCode::BranchStoreMismatch => "Branch belongs to another store",
            ErrorCode::BranchAlreadyExists => "Branch already exists",
            ErrorCode::BusinessTypeLocked => {
                "Business type cannot change once branches exist"
            }

            // Catalog
            ErrorCode::EntityNotFound => "Catalog entity not found",
            ErrorCode::InvalidPrice => "Invalid price",
            ErrorCode::CategoryPriceNotAllowed => "Categories cannot have a price",
            ErrorCode::MenuItemPriceRequired => "Menu item requires a base price",
            ErrorCode::ScopeBranchInvalid => "Scope references a branch outside the store",
            ErrorCode::DuplicateOverride => "Duplicate branch override",
            ErrorCode::CrossStoreOverride => "Override references a branch of another store",
            ErrorCode::UnknownScopeBranch => "Scope references an unknown branch",
            ErrorCode::NegativeOverridePrice => "Override price is negative",
            ErrorCode::CategoryPriceOverride => "Price override on a category",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableBranchNotFound => "Table branch not found",
            ErrorCode::InvalidTableCapacity => "Invalid table capacity",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Store / Branch
            3001 => Ok(ErrorCode::StoreNotFound),
            3101 => Ok(ErrorCode::BranchNotFound),
            3102 => Ok(ErrorCode::BranchStoreMismatch),
            3103 => Ok(ErrorCode::BranchAlreadyExists),
            3104 => Ok(ErrorCode::BusinessTypeLocked),

            // Catalog
            6001 => Ok(ErrorCode::EntityNotFound),
            6002 => Ok(ErrorCode::InvalidPrice),
            6003 => Ok(ErrorCode::CategoryPriceNotAllowed),
            6004 => Ok(ErrorCode::MenuItemPriceRequired),
            6005 => Ok(ErrorCode::ScopeBranchInvalid),
            6101 => Ok(ErrorCode::DuplicateOverride),
            6102 => Ok(ErrorCode::CrossStoreOverride),
            6103 => Ok(ErrorCode::UnknownScopeBranch),
            6104 => Ok(ErrorCode::NegativeOverridePrice),
            6105 => Ok(ErrorCode::CategoryPriceOverride),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableBranchNotFound),
            7003 => Ok(ErrorCode::InvalidTableCapacity),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
