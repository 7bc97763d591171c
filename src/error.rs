//! Custom error types for the consolidation core
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Errors are reserved for contract
//! violations on the mutation API; malformed records and missing halves of
//! an optional join are handled defensively and never raise.

use thiserror::Error;

/// The main error type for consolidation operations
#[derive(Error, Debug)]
pub enum ConsolidatorError {
    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ConsolidatorError {
    /// Create a "not found" error for line items
    pub fn line_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "LineItem",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for line items
    pub fn line_item_duplicate(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "LineItem",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<serde_json::Error> for ConsolidatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for consolidation operations
pub type ConsolidatorResult<T> = Result<T, ConsolidatorError>;
