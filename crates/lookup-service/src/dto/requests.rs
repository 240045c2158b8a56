//! Request DTOs

use lookup_core::DomainError;
use validator::Validate;

/// A lookup value accepted for creation: trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewValue {
    #[validate(length(min = 1, message = "Value cannot be empty"))]
    pub value: String,
}

impl NewValue {
    /// Trim and validate a raw value
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let candidate = Self {
            value: raw.trim().to_string(),
        };
        candidate.validate().map_err(|_| DomainError::EmptyValue)?;

        Ok(candidate)
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}
