//! Handler-boundary error type.
//!
//! Every failure a handler can produce is an [`AppError`]. None of them escape
//! as a transport-level fault: each renders to the JSON error envelope
//! `{"status": "Error", "error": "<message>"}`.
//!
//! Error responses keep HTTP status 200 for compatibility with existing
//! clients, which read the outcome from the `status` field.

use axum::{
    Json,
    http::{StatusCode, header::InvalidHeaderValue},
    response::{IntoResponse, Response},
};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::api::dto::response::ApiResponse;
use crate::domain::repositories::StorageError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request body is empty")]
    EmptyBody,

    #[error("failed to decode request body")]
    Decode(#[source] serde_json::Error),

    /// Field-level validation failure; the message names fields and rules.
    #[error("{0}")]
    Validation(String),

    #[error("url already exists")]
    AliasExists(#[source] StorageError),

    #[error("failed to add url")]
    SaveFailed(#[source] StorageError),

    #[error("alias is empty")]
    EmptyAlias,

    #[error("url not found")]
    NotFound(#[source] StorageError),

    #[error("failed to get url")]
    LookupFailed(#[source] StorageError),

    /// The stored URL cannot be sent as a `Location` header.
    #[error("failed to get url")]
    InvalidLocation(#[source] InvalidHeaderValue),
}

impl AppError {
    /// Classifies a storage failure from the save path.
    pub fn from_save(err: StorageError) -> Self {
        if err.is_alias_exists() {
            Self::AliasExists(err)
        } else {
            Self::SaveFailed(err)
        }
    }

    /// Classifies a storage failure from the lookup path.
    pub fn from_lookup(err: StorageError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err)
        } else {
            Self::LookupFailed(err)
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: BTreeMap<_, _> = errors.field_errors().into_iter().collect();

        let message = fields
            .iter()
            .map(|(field, errs)| describe_field(field, errs))
            .collect::<Vec<_>>()
            .join(", ");

        Self::Validation(message)
    }
}

/// Human-readable description of the first violated rule on a field.
///
/// `required` wins over format rules, so an empty `url` reads as missing
/// rather than malformed.
fn describe_field(field: &str, errors: &[ValidationError]) -> String {
    if errors.iter().any(|e| e.code == "required") {
        format!("field {field} is a required field")
    } else if errors.iter().any(|e| e.code == "url") {
        format!("field {field} is not a valid URL")
    } else if let Some(e) = errors.first() {
        format!("field {field} is not valid ({})", e.code)
    } else {
        format!("field {field} is not valid")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}
