//! API Integration Tests
//!
//! Each test spawns the real server on an ephemeral port with in-memory
//! storage. The PostgreSQL test additionally needs DATABASE_URL.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, fixtures::*, postgres_config, TestServer,
};
use reqwest::{Method, StatusCode};
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");

    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");

    let ready: ReadinessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ready.status, "ready");
    assert_eq!(ready.checks.storage, "healthy");
    assert_eq!(ready.backend, "memory");
}

// ============================================================================
// Create Tests
// ============================================================================

#[tokio::test]
async fn test_create_entry() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(CATEGORIES.path, &CATEGORIES.body("Books"))
        .await
        .unwrap();
    let entry: EntryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(entry.value, "Books");
    assert!(entry.id > 0);
}

#[tokio::test]
async fn test_create_duplicate_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post(ROLES.path, &ROLES.body("admin")).await.unwrap();
    assert_json::<EntryResponse>(response, StatusCode::CREATED).await.unwrap();

    for repeat in ["admin", "  admin  "] {
        let response = server.post(ROLES.path, &ROLES.body(repeat)).await.unwrap();
        let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert!(error.message.contains("already exists"), "{}", error.message);
    }

    let response = server.get(ROLES.path).await.unwrap();
    let all: Vec<EntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_create_trims_value() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post(TAGS.path, &TAGS.body("\t rust \n")).await.unwrap();
    let entry: EntryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(entry.value, "rust");
}

#[tokio::test]
async fn test_create_missing_field() {
    let server = TestServer::start().await.expect("Failed to start server");

    for kind in ALL_KINDS {
        let response = server.post(kind.path, &json!({})).await.unwrap();
        let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.message, format!("Missing required field: {}", kind.key));
    }
}

#[tokio::test]
async fn test_create_empty_value() {
    let server = TestServer::start().await.expect("Failed to start server");

    for value in ["", "    "] {
        let response = server.post(TAGS.path, &TAGS.body(value)).await.unwrap();
        let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error.message, "tagName cannot be empty.");
    }

    let response = server.get(TAGS.path).await.unwrap();
    let all: Vec<EntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_create_malformed_body() {
    let server = TestServer::start().await.expect("Failed to start server");

    for body in [r#"{"categoryName": "#, "[1, 2]", r#"{"categoryName": true}"#] {
        let response = server.post_raw(CATEGORIES.path, body).await.unwrap();
        assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    }
}

#[tokio::test]
async fn test_create_long_value() {
    let server = TestServer::start().await.expect("Failed to start server");
    let long = "c".repeat(300);

    let response = server
        .post(CATEGORIES.path, &CATEGORIES.body(&long))
        .await
        .unwrap();
    let created = assert_json::<EntryResponse>(response, StatusCode::CREATED)
        .await
        .unwrap();
    assert_eq!(created.value, long);

    let response = server
        .post(CATEGORIES.path, &CATEGORIES.body(&long))
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Listing Tests
// ============================================================================

#[tokio::test]
async fn test_list_empty() {
    let server = TestServer::start().await.expect("Failed to start server");

    for kind in ALL_KINDS {
        let response = server.get(kind.path).await.unwrap();
        let all: Vec<EntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(all.is_empty());
    }
}

#[tokio::test]
async fn test_list_returns_every_created_entry() {
    let server = TestServer::start().await.expect("Failed to start server");

    let mut created = Vec::new();
    for _ in 0..5 {
        let value = TAGS.unique_value();
        let response = server.post(TAGS.path, &TAGS.body(&value)).await.unwrap();
        created.push(assert_json::<EntryResponse>(response, StatusCode::CREATED).await.unwrap());
    }

    let response = server.get(TAGS.path).await.unwrap();
    let all: Vec<EntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all, created);
}

#[tokio::test]
async fn test_kinds_are_independent() {
    let server = TestServer::start().await.expect("Failed to start server");

    for kind in ALL_KINDS {
        let response = server.post(kind.path, &kind.body("shared")).await.unwrap();
        let entry: EntryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(entry.value, "shared");
    }

    for kind in ALL_KINDS {
        let response = server.get(kind.path).await.unwrap();
        let all: Vec<EntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(all.len(), 1);
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[tokio::test]
async fn test_concurrent_creates_store_one_entry() {
    let server = TestServer::start().await.expect("Failed to start server");
    let url = format!("{}{}", server.base_url(), CATEGORIES.path);

    let requests = (0..10).map(|_| {
        let client = server.client.clone();
        let url = url.clone();
        tokio::spawn(async move {
            client
                .post(&url)
                .json(&CATEGORIES.body("Music"))
                .send()
                .await
                .map(|r| r.status())
        })
    });

    let mut statuses = Vec::new();
    for request in requests {
        statuses.push(request.await.unwrap().unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CREATED).count(), 1);
    assert!(statuses
        .iter()
        .all(|s| *s == StatusCode::CREATED || *s == StatusCode::BAD_REQUEST));

    let response = server.get(CATEGORIES.path).await.unwrap();
    let all: Vec<EntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 1);
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_unknown_route() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/unknown").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_unsupported_method() {
    let server = TestServer::start().await.expect("Failed to start server");

    for method in [Method::PUT, Method::PATCH, Method::DELETE] {
        let response = server.request(method, TAGS.path).await.unwrap();
        assert_error(response, StatusCode::METHOD_NOT_ALLOWED).await.unwrap();
    }
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_round_trip() {
    let Some(config) = postgres_config() else {
        return;
    };

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let response = server.get("/health/ready").await.unwrap();
    let ready: ReadinessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ready.backend, "postgres");

    let value = CATEGORIES.unique_value();
    let response = server
        .post(CATEGORIES.path, &CATEGORIES.body(&value))
        .await
        .unwrap();
    let entry: EntryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(entry.value, value);

    let response = server
        .post(CATEGORIES.path, &CATEGORIES.body(&value))
        .await
        .unwrap();
    let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert!(error.message.contains("already exists"));
}
