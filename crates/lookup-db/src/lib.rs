//! # lookup-db
//!
//! Repository adapters for the lookup tables.
//!
//! ## Overview
//!
//! This crate provides implementations of the repository ports defined in
//! `lookup-core`:
//!
//! - Connection pool management for PostgreSQL
//! - The `{id, value}` row model with a SQLx `FromRow` derive
//! - `PgLookupRepository`, one table per entity kind
//! - `InMemoryLookupRepository`, for local runs and tests
//!
//! The expected table layout is in `sql/schema.sql`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lookup_common::AppConfig;
//! use lookup_core::{Category, LookupRepository};
//! use lookup_db::{create_pool, PgLookupRepository, PoolConfig, TableName};
//!
//! async fn example(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let database = config.database.as_ref().ok_or("postgres backend not configured")?;
//!     let pool = create_pool(&PoolConfig::from(database)).await?;
//!     let categories = PgLookupRepository::<Category>::new(pool, TableName::new("categories")?);
//!
//!     let all = categories.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, PgPool, PoolConfig};
pub use repositories::{
    InMemoryLookupRepository, InMemoryStoreHealth, InvalidTableName, PgLookupRepository,
    PgStoreHealth, TableName,
};
