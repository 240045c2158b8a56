//! Validated table identifiers
//!
//! Table names are interpolated into SQL text, so only plain identifiers
//! are accepted.

use std::fmt;

/// Maximum identifier length PostgreSQL keeps without truncation
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Name of the table backing one entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    /// Validate a table name: ASCII letter or underscore first, then letters,
    /// digits or underscores
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidTableName> {
        let name = name.into();
        let mut chars = name.chars();

        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest || name.len() > MAX_IDENTIFIER_LENGTH {
            return Err(InvalidTableName(name));
        }

        Ok(Self(name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error for names that are not plain SQL identifiers
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid table name: {0:?}")]
pub struct InvalidTableName(pub String);
