//! Service context - dependency container for services
//!
//! Holds one lookup service per entity kind and the store health probe.

use std::sync::Arc;

use lookup_core::{Category, LookupRepository, Role, StoreHealth, Tag};

use super::error::{ServiceError, ServiceResult};
use super::lookup::LookupService;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Lookup services
    categories: LookupService<Category>,
    roles: LookupService<Role>,
    tags: LookupService<Tag>,

    // Readiness
    store_health: Arc<dyn StoreHealth>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        categories: LookupService<Category>,
        roles: LookupService<Role>,
        tags: LookupService<Tag>,
        store_health: Arc<dyn StoreHealth>,
    ) -> Self {
        Self {
            categories,
            roles,
            tags,
            store_health,
        }
    }

    // === Lookup services ===

    pub fn categories(&self) -> &LookupService<Category> {
        &self.categories
    }

    pub fn roles(&self) -> &LookupService<Role> {
        &self.roles
    }

    pub fn tags(&self) -> &LookupService<Tag> {
        &self.tags
    }

    // === Health ===

    /// Get the store health probe
    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("categories", &self.categories)
            .field("roles", &self.roles)
            .field("tags", &self.tags)
            .field("backend", &self.store_health.backend())
            .finish()
    }
}

/// Builder for creating ServiceContext from repositories
#[derive(Default)]
pub struct ServiceContextBuilder {
    categories: Option<LookupService<Category>>,
    roles: Option<LookupService<Role>>,
    tags: Option<LookupService<Tag>>,
    store_health: Option<Arc<dyn StoreHealth>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category_repo(self, repo: Arc<dyn LookupRepository<Category>>) -> Self {
        self.categories(LookupService::new(repo))
    }

    pub fn role_repo(self, repo: Arc<dyn LookupRepository<Role>>) -> Self {
        self.roles(LookupService::new(repo))
    }

    pub fn tag_repo(self, repo: Arc<dyn LookupRepository<Tag>>) -> Self {
        self.tags(LookupService::new(repo))
    }

    /// Use a preconfigured category service (e.g. with a custom factory)
    pub fn categories(mut self, service: LookupService<Category>) -> Self {
        self.categories = Some(service);
        self
    }

    pub fn roles(mut self, service: LookupService<Role>) -> Self {
        self.roles = Some(service);
        self
    }

    pub fn tags(mut self, service: LookupService<Tag>) -> Self {
        self.tags = Some(service);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.categories
                .ok_or_else(|| ServiceError::validation("categories repository is required"))?,
            self.roles
                .ok_or_else(|| ServiceError::validation("roles repository is required"))?,
            self.tags
                .ok_or_else(|| ServiceError::validation("tags repository is required"))?,
            self.store_health
                .ok_or_else(|| ServiceError::validation("store health probe is required"))?,
        ))
    }
}
