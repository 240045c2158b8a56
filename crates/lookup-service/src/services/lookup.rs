//! Lookup service
//!
//! Create-or-fetch, lookup and listing for one entity kind. The same code
//! serves every kind; the repository and factory it is wired with decide
//! which table is touched and how entries are constructed.

use std::sync::Arc;

use lookup_core::{DomainError, EntityFactory, FromValue, LookupEntity, LookupRepository};
use tracing::{info, instrument, warn};

use crate::dto::NewValue;

use super::error::{ServiceError, ServiceResult};

/// Lookup service for entity kind `E`
pub struct LookupService<E: LookupEntity> {
    repo: Arc<dyn LookupRepository<E>>,
    factory: EntityFactory<E>,
}

impl<E: FromValue> LookupService<E> {
    /// Create a service constructing entries by the kind's own constructor
    pub fn new(repo: Arc<dyn LookupRepository<E>>) -> Self {
        Self::with_factory(repo, EntityFactory::by_convention())
    }
}

impl<E: LookupEntity> LookupService<E> {
    /// Create a service with a custom construction capability
    pub fn with_factory(repo: Arc<dyn LookupRepository<E>>, factory: EntityFactory<E>) -> Self {
        Self { repo, factory }
    }

    /// Create a new entry for `raw_value`.
    ///
    /// The value is trimmed first. An existing entry with the same value is a
    /// conflict and is never returned as success. On success the entry is
    /// read back so the caller gets the store-assigned id.
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn create(&self, raw_value: &str) -> ServiceResult<E> {
        let value = NewValue::parse(raw_value)?.into_inner();

        if self.repo.find_by_value(&value).await?.is_some() {
            warn!(value = %value, "Duplicate value rejected");
            return Err(DomainError::duplicate(E::KIND, value).into());
        }

        let entity = self.factory.construct(value.clone())?;

        if let Err(e) = self.repo.save(&entity).await {
            if e.is_conflict() {
                warn!(value = %value, "Duplicate value rejected by store");
            }
            return Err(e.into());
        }

        let saved = self.repo.find_by_value(&value).await?.ok_or_else(|| {
            ServiceError::internal(format!("{} '{value}' missing after save", E::KIND))
        })?;

        if !saved.is_persisted() {
            return Err(ServiceError::internal(format!(
                "{} '{value}' has no id after save",
                E::KIND
            )));
        }

        info!(id = %saved.id(), value = %value, "Entry created");

        Ok(saved)
    }

    /// Find the entry whose value matches exactly (no trimming)
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn get_by_value(&self, value: &str) -> ServiceResult<Option<E>> {
        Ok(self.repo.find_by_value(value).await?)
    }

    /// List every entry of the kind
    #[instrument(skip(self), fields(kind = E::KIND))]
    pub async fn get_all(&self) -> ServiceResult<Vec<E>> {
        Ok(self.repo.find_all().await?)
    }
}

impl<E: LookupEntity> Clone for LookupService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            factory: self.factory.clone(),
        }
    }
}

impl<E: LookupEntity> std::fmt::Debug for LookupService<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("kind", &E::KIND)
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}
