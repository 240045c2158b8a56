//! Response types and error handling for API endpoints
//!
//! Success payloads are written as-is; every failure is written as an
//! [`ErrorEnvelope`] whose `statusCode` names the transport status.

mod envelope;
mod status;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lookup_service::ServiceError;
use thiserror::Error;
use tracing::error;

pub use envelope::ErrorEnvelope;
pub use status::ResponseStatus;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Outcome reported for this error
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        match self {
            Self::BadRequest(_) => ResponseStatus::BadRequest,
            Self::NotFound(_) => ResponseStatus::NotFound,
            Self::MethodNotAllowed(_) => ResponseStatus::MethodNotAllowed,
            Self::Internal(_) => ResponseStatus::InternalServerError,
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.status().into()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log server errors
        if matches!(status, ResponseStatus::InternalServerError) {
            error!(error = ?self, "Server error occurred");
        }

        let body = ErrorEnvelope::new(self.to_string(), status);
        (StatusCode::from(status), Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
