//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A lookup kind as exposed over HTTP
#[derive(Debug, Clone, Copy)]
pub struct Kind {
    pub path: &'static str,
    pub key: &'static str,
}

pub const CATEGORIES: Kind = Kind {
    path: "/api/v1/categories",
    key: "categoryName",
};

pub const ROLES: Kind = Kind {
    path: "/api/v1/roles",
    key: "roleName",
};

pub const TAGS: Kind = Kind {
    path: "/api/v1/tags",
    key: "tagName",
};

pub const ALL_KINDS: [Kind; 3] = [CATEGORIES, ROLES, TAGS];

impl Kind {
    /// Creation body carrying `value` under this kind's key
    pub fn body(&self, value: &str) -> Value {
        json!({ self.key: value })
    }

    /// A value no other test (or earlier run against the same database) has used
    pub fn unique_value(&self) -> String {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        format!("{}-{millis}-{}", self.key, unique_suffix())
    }
}

/// Created or listed entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntryResponse {
    pub id: i64,
    pub value: String,
}

/// Failure body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub status_code: String,
}

/// Readiness body
#[derive(Debug, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: ReadinessChecks,
    pub backend: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadinessChecks {
    pub storage: String,
}
