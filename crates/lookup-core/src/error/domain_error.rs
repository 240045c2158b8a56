//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Value cannot be empty")]
    EmptyValue,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("{kind} '{value}' already exists")]
    DuplicateValue { kind: &'static str, value: String },

    // =========================================================================
    // Construction Errors
    // =========================================================================
    #[error("Could not construct {kind}: {reason}")]
    ConstructionFailed { kind: &'static str, reason: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyValue => "EMPTY_VALUE",
            Self::DuplicateValue { .. } => "DUPLICATE_VALUE",
            Self::ConstructionFailed { .. } => "CONSTRUCTION_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Create a duplicate value error for an entity kind
    pub fn duplicate(kind: &'static str, value: impl Into<String>) -> Self {
        Self::DuplicateValue {
            kind,
            value: value.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyValue)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateValue { .. })
    }

    /// Check if the caller is at fault (validation or conflict)
    pub fn is_client_error(&self) -> bool {
        self.is_validation() || self.is_conflict()
    }
}
