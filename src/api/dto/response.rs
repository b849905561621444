//! Common JSON response envelope.

use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{"status": "OK"}` or `{"status": "Error", "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
        }
    }
}
