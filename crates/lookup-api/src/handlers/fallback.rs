//! Fallback handlers for unmatched routes and methods

use axum::http::{Method, Uri};

use crate::response::ApiError;

/// No route matches the path
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// The path exists but does not support the method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("Method {method} not allowed on {}", uri.path()))
}
