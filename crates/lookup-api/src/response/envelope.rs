//! Error body shared by every failure response

use serde::{Deserialize, Serialize};

use super::status::ResponseStatus;

/// `{"message": ..., "statusCode": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub message: String,
    pub status_code: ResponseStatus,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>, status_code: ResponseStatus) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}
