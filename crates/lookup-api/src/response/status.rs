//! Status vocabulary carried in error bodies

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Closed set of outcomes a response can report.
///
/// Serialized by symbolic name (`"BAD_REQUEST"`), so clients can branch on the
/// body alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl ResponseStatus {
    /// Numeric HTTP code
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::InternalServerError => 500,
        }
    }

    /// Symbolic name, as serialized
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Created => "CREATED",
            Self::NoContent => "NO_CONTENT",
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Look up the member for a numeric code
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub const ALL: [Self; 9] = [
        Self::Ok,
        Self::Created,
        Self::NoContent,
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::InternalServerError,
    ];
}

impl From<ResponseStatus> for StatusCode {
    fn from(status: ResponseStatus) -> Self {
        match status {
            ResponseStatus::Ok => StatusCode::OK,
            ResponseStatus::Created => StatusCode::CREATED,
            ResponseStatus::NoContent => StatusCode::NO_CONTENT,
            ResponseStatus::BadRequest => StatusCode::BAD_REQUEST,
            ResponseStatus::Unauthorized => StatusCode::UNAUTHORIZED,
            ResponseStatus::Forbidden => StatusCode::FORBIDDEN,
            ResponseStatus::NotFound => StatusCode::NOT_FOUND,
            ResponseStatus::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ResponseStatus::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
