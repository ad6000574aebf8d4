//! Unified error codes for the Atelier admin console
//!
//! This module defines all error codes shared between the engine, the client
//! and the console frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Manufacturer errors
//! - 4xxx: Pricing/tier errors
//! - 5xxx: Authorization-grant errors
//! - 6xxx: Product/category errors
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

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Session has expired
    SessionExpired = 1005,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 3xxx: Manufacturer ====================
    /// Manufacturer not found
    ManufacturerNotFound = 3001,
    /// Manufacturer account is disabled
    ManufacturerDisabled = 3002,
    /// Operation requires an elite manufacturer
    ManufacturerNotElite = 3003,

    // ==================== 4xxx: Pricing / Tier ====================
    /// Tier system configuration not found
    TierSystemNotFound = 4001,
    /// Discount rule not found
    DiscountRuleNotFound = 4002,
    /// Discount rule configuration is invalid
    DiscountRuleInvalid = 4003,
    /// Profit settings not found
    ProfitSettingsNotFound = 4004,
    /// Proposed price is not below the list price
    ProposalPriceInvalid = 4005,
    /// Proposed price is below the contractual floor
    ProposalBelowFloor = 4006,

    // ==================== 5xxx: Authorization grants ====================
    /// Authorization grant not found
    GrantNotFound = 5001,
    /// An equivalent grant already exists
    GrantAlreadyExists = 5002,
    /// Authorization grant has expired
    GrantExpired = 5003,
    /// Authorization request has an empty scope
    GrantScopeEmpty = 5004,
    /// Authorization request scope is inconsistent with its id lists
    GrantScopeInvalid = 5005,

    // ==================== 6xxx: Product / Category ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,
    /// Category not found
    CategoryNotFound = 6101,
    /// SKU not found
    SkuNotFound = 6201,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
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

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",
            ErrorCode::SessionExpired => "Session has expired",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Manufacturer
            ErrorCode::ManufacturerNotFound => "Manufacturer not found",
            ErrorCode::ManufacturerDisabled => "Manufacturer account is disabled",
            ErrorCode::ManufacturerNotElite => "Operation requires an elite manufacturer",

            // Pricing / Tier
            ErrorCode::TierSystemNotFound => "Tier system configuration not found",
            ErrorCode::DiscountRuleNotFound => "Discount rule not found",
            ErrorCode::DiscountRuleInvalid => "Discount rule configuration is invalid",
            ErrorCode::ProfitSettingsNotFound => "Profit settings not found",
            ErrorCode::ProposalPriceInvalid => "Proposed price must be below the list price",
            ErrorCode::ProposalBelowFloor => "Proposed price is below the contractual floor",

            // Authorization grants
            ErrorCode::GrantNotFound => "Authorization grant not found",
            ErrorCode::GrantAlreadyExists => "An equivalent grant already exists",
            ErrorCode::GrantExpired => "Authorization grant has expired",
            ErrorCode::GrantScopeEmpty => "Authorization request has an empty scope",
            ErrorCode::GrantScopeInvalid => {
                "Authorization request scope is inconsistent with its id lists"
            }

            // Product / Category
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::SkuNotFound => "SKU not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }

    /// Get the HTTP status code conventionally paired with this error code
    pub fn http_status(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            ErrorCode::Success => StatusCode::OK,
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::DiscountRuleInvalid
            | ErrorCode::ProposalPriceInvalid
            | ErrorCode::ProposalBelowFloor
            | ErrorCode::GrantScopeEmpty
            | ErrorCode::GrantScopeInvalid
            | ErrorCode::ProductInvalidPrice => StatusCode::BAD_REQUEST,
            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid
            | ErrorCode::SessionExpired => StatusCode::UNAUTHORIZED,
            ErrorCode::PermissionDenied
            | ErrorCode::RoleRequired
            | ErrorCode::AdminRequired
            | ErrorCode::ManufacturerDisabled
            | ErrorCode::ManufacturerNotElite => StatusCode::FORBIDDEN,
            ErrorCode::NotFound
            | ErrorCode::ManufacturerNotFound
            | ErrorCode::TierSystemNotFound
            | ErrorCode::DiscountRuleNotFound
            | ErrorCode::ProfitSettingsNotFound
            | ErrorCode::GrantNotFound
            | ErrorCode::ProductNotFound
            | ErrorCode::CategoryNotFound
            | ErrorCode::SkuNotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists | ErrorCode::GrantAlreadyExists => StatusCode::CONFLICT,
            ErrorCode::GrantExpired => StatusCode::GONE,
            ErrorCode::TimeoutError => StatusCode::GATEWAY_TIMEOUT,
            ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::NetworkError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
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

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::SessionExpired),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            // Manufacturer
            3001 => Ok(ErrorCode::ManufacturerNotFound),
            3002 => Ok(ErrorCode::ManufacturerDisabled),
            3003 => Ok(ErrorCode::ManufacturerNotElite),

            // Pricing / Tier
            4001 => Ok(ErrorCode::TierSystemNotFound),
            4002 => Ok(ErrorCode::DiscountRuleNotFound),
            4003 => Ok(ErrorCode::DiscountRuleInvalid),
            4004 => Ok(ErrorCode::ProfitSettingsNotFound),
            4005 => Ok(ErrorCode::ProposalPriceInvalid),
            4006 => Ok(ErrorCode::ProposalBelowFloor),

            // Authorization grants
            5001 => Ok(ErrorCode::GrantNotFound),
            5002 => Ok(ErrorCode::GrantAlreadyExists),
            5003 => Ok(ErrorCode::GrantExpired),
            5004 => Ok(ErrorCode::GrantScopeEmpty),
            5005 => Ok(ErrorCode::GrantScopeInvalid),

            // Product / Category
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6201 => Ok(ErrorCode::SkuNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}
