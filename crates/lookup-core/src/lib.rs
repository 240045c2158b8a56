//! # lookup-core
//!
//! Domain layer for lookup tables: the `{id, value}` entity model, the entity
//! kinds shipped with the service, the construction capability used by the
//! generic service, and the repository ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Category, EntityFactory, FromValue, LookupEntity, Role, Tag};
pub use error::DomainError;
pub use traits::{LookupRepository, RepoResult, StoreHealth};
pub use value_objects::EntityId;
