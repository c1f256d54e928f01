//! Handler for the full mapping listing.

use axum::{Json, extract::State};

use crate::domain::LinkMap;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the complete link mapping.
///
/// # Endpoint
///
/// `GET /links`
///
/// # Response
///
/// `200 application/json`, body = the whole [`LinkMap`] as a flat
/// `{"code": "url", ...}` object. The landing page polls this endpoint to
/// render the list of existing links.
///
/// # Errors
///
/// Returns 500 on store failure.
pub async fn links_handler(State(state): State<AppState>) -> Result<Json<LinkMap>, AppError> {
    let links = state.store.load().await?;
    Ok(Json(links))
}
