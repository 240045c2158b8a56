//! Entity ID - store-assigned integer identity of a lookup entry
//!
//! The store hands out positive ids on first persistence. Zero marks an entry
//! that has been constructed but not saved yet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identity of a lookup entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Id carried by entries that have not been persisted yet
    pub const UNASSIGNED: Self = Self(0);

    /// Create an EntityId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check whether the store has assigned this id
    #[inline]
    pub const fn is_assigned(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<EntityId> for i64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}
