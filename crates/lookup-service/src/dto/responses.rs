//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use lookup_core::{EntityId, LookupEntity};
use serde::Serialize;

// ============================================================================
// Lookup Responses
// ============================================================================

/// A persisted lookup entry: `{"id": <int>, "value": <string>}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityResponse {
    pub id: EntityId,
    pub value: String,
}

impl<E: LookupEntity> From<&E> for EntityResponse {
    fn from(entity: &E) -> Self {
        Self {
            id: entity.id(),
            value: entity.value().to_string(),
        }
    }
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
    pub backend: String,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool, backend: &str) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
            backend: backend.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup_core::Category;

    #[test]
    fn test_entity_response_shape() {
        let category = Category::restore(EntityId::new(3), "Books".to_string());
        let json = serde_json::to_value(EntityResponse::from(&category)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "value": "Books"}));
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, "memory");
        assert!(ready.is_ready());
        assert_eq!(ready.checks.storage, "healthy");
        assert_eq!(ready.backend, "memory");

        let not_ready = ReadinessResponse::ready(false, "postgres");
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.storage, "unhealthy");
    }
}
