//! Handler for the save endpoint.

use axum::{Json, body::Bytes, extract::State};
use tracing::{debug, error, info};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a client-chosen or generated alias.
///
/// # Endpoint
///
/// `POST /`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/very/long/path", "alias": "docs" }
/// ```
///
/// `alias` is optional; when absent or empty a random alphanumeric alias is
/// generated. The URL is stored in its parsed, canonical form.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "aB3xZ9" }
/// ```
///
/// # Errors
///
/// All errors are answered with `{"status": "Error", "error": ...}`:
/// `request body is empty`, `failed to decode request body`, a validation
/// description, `url already exists`, or `failed to add url`.
pub async fn save_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SaveResponse>, AppError> {
    let request = SaveRequest::from_body(&body).inspect_err(|e| match e {
        AppError::Decode(source) => error!(error = %source, "failed to decode request body"),
        other => error!("{other}"),
    })?;

    debug!(?request, "request body decoded");

    request.validate().map_err(|errors| {
        let err = AppError::from(errors);
        error!(error = %err, "invalid request");
        err
    })?;
    let url = request.normalized_url()?;

    let mapping = state
        .url_service
        .save_url(url, request.alias)
        .await
        .map_err(|e| {
            let err = AppError::from_save(e);
            match &err {
                AppError::AliasExists(source) => info!(error = %source, "url already exists"),
                other => error!(error = ?other, "failed to add url"),
            }
            err
        })?;

    info!(id = mapping.id, alias = %mapping.alias, "url added");

    Ok(Json(SaveResponse::ok(mapping.alias)))
}
