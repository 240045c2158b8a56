//! Application state
//!
//! `AppState` is shared by the operational routes; each lookup route carries
//! its own `LookupEndpoint` with the service and request key of its kind.

use std::sync::Arc;

use lookup_common::AppConfig;
use lookup_core::LookupEntity;
use lookup_service::{LookupService, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("config", &"AppConfig")
            .finish()
    }
}

/// Per-kind endpoint state: the kind's service plus the request key that
/// carries the value on creation (e.g. `"categoryName"`)
pub struct LookupEndpoint<E: LookupEntity> {
    service: LookupService<E>,
    value_key: &'static str,
}

impl<E: LookupEntity> LookupEndpoint<E> {
    pub fn new(service: LookupService<E>, value_key: &'static str) -> Self {
        Self { service, value_key }
    }

    pub fn service(&self) -> &LookupService<E> {
        &self.service
    }

    pub fn value_key(&self) -> &'static str {
        self.value_key
    }
}

impl<E: LookupEntity> Clone for LookupEndpoint<E> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            value_key: self.value_key,
        }
    }
}

impl<E: LookupEntity> std::fmt::Debug for LookupEndpoint<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupEndpoint")
            .field("kind", &E::KIND)
            .field("value_key", &self.value_key)
            .finish()
    }
}
