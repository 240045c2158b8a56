//! Repository implementations
//!
//! Adapters for the repository ports defined in lookup-core. The PostgreSQL
//! adapter keeps one table per entity kind; the in-memory adapter backs local
//! runs and tests.

mod error;
mod health;
mod lookup;
mod memory;
mod table;

pub use health::{InMemoryStoreHealth, PgStoreHealth};
pub use lookup::PgLookupRepository;
pub use memory::InMemoryLookupRepository;
pub use table::{InvalidTableName, TableName};
