//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response Codes
///
/// - **302 Found** with `Location` set to the stored URL
/// - **200 OK** with `{"status": "Error", "error": "url not found"}` for
///   unknown aliases, or `"failed to get url"` when the store fails
///
/// No redirect is issued unless the lookup succeeded.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<Response, AppError> {
    redirect(&state, &alias).await
}

/// `GET /` - the alias segment is missing altogether.
pub async fn empty_alias_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    redirect(&state, "").await
}

async fn redirect(state: &AppState, alias: &str) -> Result<Response, AppError> {
    if alias.is_empty() {
        info!("alias is empty");
        return Err(AppError::EmptyAlias);
    }

    let url = state.url_service.get_url(alias).await.map_err(|e| {
        let err = AppError::from_lookup(e);
        match &err {
            AppError::NotFound(_) => info!(alias, "url not found"),
            other => error!(alias, error = ?other, "failed to get url"),
        }
        err
    })?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|e| {
        error!(alias, ?url, error = %e, "stored url is not a valid Location");
        AppError::InvalidLocation(e)
    })?;

    info!(alias, %url, "got url");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
