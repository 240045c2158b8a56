//! Store health probes used by readiness checks

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lookup_core::{RepoResult, StoreHealth};

use super::error::map_db_error;

/// Pings PostgreSQL through the shared pool
#[derive(Clone)]
pub struct PgStoreHealth {
    pool: PgPool,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// The in-memory store is always reachable
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryStoreHealth;

#[async_trait]
impl StoreHealth for InMemoryStoreHealth {
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
