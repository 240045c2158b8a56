//! JSON object body extractor
//!
//! Creation requests carry a single JSON object whose key name depends on the
//! entity kind, so the body is parsed as a generic object and the key is
//! looked up by the handler. Rejections are written as error envelopes.

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};

use crate::response::{ApiError, ErrorEnvelope, ResponseStatus};

/// A request body parsed as one JSON object.
///
/// An empty body or a literal `null` is treated as an empty object.
#[derive(Debug, Clone, Default)]
pub struct JsonObject(pub Map<String, Value>);

impl JsonObject {
    /// Parse raw body bytes
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(Value::Null) => Ok(Self::default()),
            Ok(_) => Err(ApiError::bad_request("Request body must be a JSON object")),
            Err(e) => Err(ApiError::bad_request(format!("Malformed JSON body: {e}"))),
        }
    }

    /// String value under `key`.
    ///
    /// An absent key and an explicit `null` both count as missing.
    pub fn required_str(&self, key: &str) -> Result<&str, ApiError> {
        match self.0.get(key) {
            None | Some(Value::Null) => {
                Err(ApiError::bad_request(format!("Missing required field: {key}")))
            }
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(ApiError::bad_request(format!("{key} must be a string"))),
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonObject
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        Self::parse(&bytes).map_err(IntoResponse::into_response)
    }
}

/// A body that could not be read keeps the status axum gave it. It is
/// enveloped when that status belongs to the vocabulary; otherwise (413 for
/// an oversized body) the transport response is passed through.
fn body_rejection(rejection: BytesRejection) -> Response {
    match ResponseStatus::from_code(rejection.status().as_u16()) {
        Some(status) => {
            let body = ErrorEnvelope::new(rejection.body_text(), status);
            (StatusCode::from(status), Json(body)).into_response()
        }
        None => rejection.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: ApiError) -> String {
        err.to_string()
    }

    #[test]
    fn test_parse_object() {
        let body = JsonObject::parse(br#"{"tagName": "rust", "extra": 1}"#).unwrap();
        assert_eq!(body.required_str("tagName").unwrap(), "rust");
    }

    #[test]
    fn test_empty_and_null_bodies_have_no_keys() {
        for raw in [&b""[..], b"  \n", b"null"] {
            let body = JsonObject::parse(raw).unwrap();
            assert_eq!(
                message(body.required_str("roleName").unwrap_err()),
                "Missing required field: roleName"
            );
        }
    }

    #[test]
    fn test_rejects_non_objects() {
        for raw in [&b"[]"[..], b"\"Books\"", b"42"] {
            let err = JsonObject::parse(raw).unwrap_err();
            assert_eq!(message(err), "Request body must be a JSON object");
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = JsonObject::parse(br#"{"categoryName": "#).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(ref msg) if msg.starts_with("Malformed JSON body")));
    }

    #[test]
    fn test_null_and_non_string_values() {
        let body = JsonObject::parse(br#"{"a": null, "b": 7, "c": ["x"]}"#).unwrap();
        assert_eq!(message(body.required_str("a").unwrap_err()), "Missing required field: a");
        assert_eq!(message(body.required_str("b").unwrap_err()), "b must be a string");
        assert_eq!(message(body.required_str("c").unwrap_err()), "c must be a string");
    }
}
