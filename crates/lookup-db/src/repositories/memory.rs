//! In-memory implementation of LookupRepository

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::instrument;

use lookup_core::{DomainError, EntityId, LookupEntity, LookupRepository, RepoResult};

#[derive(Debug)]
struct Table<E> {
    rows: Vec<E>,
    next_id: i64,
}

/// In-memory lookup table.
///
/// Assigns ids from 1 upward, enforces uniqueness of `value` like the
/// database constraint does, and lists entries in insertion order.
#[derive(Debug)]
pub struct InMemoryLookupRepository<E> {
    table: Mutex<Table<E>>,
}

impl<E: LookupEntity> InMemoryLookupRepository<E> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.table.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: LookupEntity> Default for InMemoryLookupRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: LookupEntity> LookupRepository<E> for InMemoryLookupRepository<E> {
    #[instrument(skip(self))]
    async fn find_by_value(&self, value: &str) -> RepoResult<Option<E>> {
        let table = self.table.lock();
        Ok(table.rows.iter().find(|row| row.value() == value).cloned())
    }

    #[instrument(skip(self))]
    async fn save(&self, entity: &E) -> RepoResult<()> {
        let mut table = self.table.lock();

        if table.rows.iter().any(|row| row.value() == entity.value()) {
            return Err(DomainError::duplicate(E::KIND, entity.value()));
        }

        let id = EntityId::new(table.next_id);
        table.next_id += 1;
        table.rows.push(E::restore(id, entity.value().to_string()));

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<E>> {
        Ok(self.table.lock().rows.clone())
    }
}
