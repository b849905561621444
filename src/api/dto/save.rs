//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use url::Url;
use validator::Validate;

use super::response::ApiResponse;
use crate::error::AppError;

/// Request to store a URL under an alias.
///
/// Unknown fields are ignored. A missing `url` decodes as empty and is then
/// rejected by validation as a required field.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// The original URL (required, must parse as an absolute URL).
    #[serde(default)]
    #[validate(length(min = 1, code = "required"), url(code = "url"))]
    pub url: String,

    /// Optional alias; generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Decodes a raw request body.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyBody`] if the body is empty or whitespace only
    /// - [`AppError::Decode`] if it is not a JSON object of the expected shape
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        if body.trim_ascii().is_empty() {
            return Err(AppError::EmptyBody);
        }

        serde_json::from_slice(body).map_err(AppError::Decode)
    }

    /// Canonical form of `url` as it will be stored and redirected to.
    ///
    /// Parsing drops tabs and newlines, trims control characters and
    /// percent-encodes non-ASCII, so the result is always a valid
    /// `Location` header value.
    ///
    /// # Errors
    ///
    /// [`AppError::Validation`] if `url` does not parse.
    pub fn normalized_url(&self) -> Result<String, AppError> {
        Url::parse(&self.url)
            .map(String::from)
            .map_err(|_| AppError::Validation("field url is not a valid URL".to_string()))
    }
}

/// Successful save: the envelope plus the alias actually stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias,
        }
    }
}
