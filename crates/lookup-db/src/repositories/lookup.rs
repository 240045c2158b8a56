//! PostgreSQL implementation of LookupRepository

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lookup_core::{DomainError, LookupEntity, LookupRepository, RepoResult};

use crate::models::LookupRow;

use super::error::{map_db_error, map_unique_violation};
use super::table::TableName;

/// PostgreSQL implementation of LookupRepository.
///
/// One instance per entity kind, bound to the table holding that kind.
/// The table must carry a unique constraint on `value` (see `sql/schema.sql`).
pub struct PgLookupRepository<E> {
    pool: PgPool,
    table: TableName,
    select_by_value: String,
    insert: String,
    select_all: String,
    _kind: PhantomData<fn() -> E>,
}

impl<E: LookupEntity> PgLookupRepository<E> {
    /// Create a new PgLookupRepository over `table`
    pub fn new(pool: PgPool, table: TableName) -> Self {
        Self {
            select_by_value: format!("SELECT id, value FROM {table} WHERE value = $1"),
            insert: format!("INSERT INTO {table} (value) VALUES ($1)"),
            select_all: format!("SELECT id, value FROM {table} ORDER BY id"),
            pool,
            table,
            _kind: PhantomData,
        }
    }

    pub fn table(&self) -> &TableName {
        &self.table
    }
}

impl<E> Clone for PgLookupRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            table: self.table.clone(),
            select_by_value: self.select_by_value.clone(),
            insert: self.insert.clone(),
            select_all: self.select_all.clone(),
            _kind: PhantomData,
        }
    }
}

#[async_trait]
impl<E: LookupEntity> LookupRepository<E> for PgLookupRepository<E> {
    #[instrument(skip(self), fields(table = %self.table))]
    async fn find_by_value(&self, value: &str) -> RepoResult<Option<E>> {
        let result = sqlx::query_as::<_, LookupRow>(&self.select_by_value)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(LookupRow::into_entity))
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn save(&self, entity: &E) -> RepoResult<()> {
        sqlx::query(&self.insert)
            .bind(entity.value())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || DomainError::duplicate(E::KIND, entity.value()))
            })?;

        Ok(())
    }

    #[instrument(skip(self), fields(table = %self.table))]
    async fn find_all(&self) -> RepoResult<Vec<E>> {
        let results = sqlx::query_as::<_, LookupRow>(&self.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(LookupRow::into_entity).collect())
    }
}
