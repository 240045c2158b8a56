//! Route definitions
//!
//! Lookup routes are mounted under /api/v1; health routes sit outside it.

use axum::{routing::get, Router};
use lookup_core::LookupEntity;
use lookup_service::ServiceContext;

use crate::handlers::{fallback, health, lookup};
use crate::state::{AppState, LookupEndpoint};

/// Request key carrying the value of a new category
pub const CATEGORY_VALUE_KEY: &str = "categoryName";
/// Request key carrying the value of a new role
pub const ROLE_VALUE_KEY: &str = "roleName";
/// Request key carrying the value of a new tag
pub const TAG_VALUE_KEY: &str = "tagName";

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router(ctx: &ServiceContext) -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes(ctx))
        .fallback(fallback::not_found)
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes(ctx: &ServiceContext) -> Router<AppState> {
    Router::new()
        .merge(lookup_routes(
            "/categories",
            LookupEndpoint::new(ctx.categories().clone(), CATEGORY_VALUE_KEY),
        ))
        .merge(lookup_routes(
            "/roles",
            LookupEndpoint::new(ctx.roles().clone(), ROLE_VALUE_KEY),
        ))
        .merge(lookup_routes(
            "/tags",
            LookupEndpoint::new(ctx.tags().clone(), TAG_VALUE_KEY),
        ))
}

/// `GET` lists and `POST` creates entries of one kind at `path`; any other
/// method is answered with 405.
pub fn lookup_routes<E, S>(path: &str, endpoint: LookupEndpoint<E>) -> Router<S>
where
    E: LookupEntity,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            path,
            get(lookup::list_entries::<E>)
                .post(lookup::create_entry::<E>)
                .fallback(fallback::method_not_allowed),
        )
        .with_state(endpoint)
}
