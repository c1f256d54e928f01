//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The code is the request path with the leading `/` stripped. The mapping
/// is re-loaded from the store on every request, so a redirect always sees
/// the latest committed state.
///
/// # Responses
///
/// - `302 Found` with `Location` set to the stored target URL, empty body.
///   302 rather than axum's `Redirect` defaults, to match the established
///   wire contract.
/// - `404` text/html `<h1>ShortCode Not Found</h1>` for an unknown code.
/// - `500` on store failure.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let links = state.store.load().await?;

    match links.get(&code) {
        Some(url) => {
            debug!(code = %code, target = %url, "redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, url)], ()).into_response())
        }
        None => Err(AppError::NotFound),
    }
}
