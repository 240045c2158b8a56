//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::LookupEntity;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Lookup Repository
// ============================================================================

/// Persistence for one entity kind.
///
/// Implementations that enforce a uniqueness constraint on `value` must report
/// a violation from `save` as [`DomainError::DuplicateValue`]; every other
/// storage failure is [`DomainError::DatabaseError`].
#[async_trait]
pub trait LookupRepository<E: LookupEntity>: Send + Sync {
    /// Find the entry whose value matches exactly
    async fn find_by_value(&self, value: &str) -> RepoResult<Option<E>>;

    /// Persist a new entry; the store assigns its id
    async fn save(&self, entity: &E) -> RepoResult<()>;

    /// List every entry of the kind
    async fn find_all(&self) -> RepoResult<Vec<E>>;
}

// ============================================================================
// Store Health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Check that the backing store answers
    async fn ping(&self) -> RepoResult<()>;

    /// Short backend name reported by readiness checks
    fn backend(&self) -> &'static str;
}
