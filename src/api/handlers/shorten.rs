//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::generate_code;

/// Body returned when the requested code is already taken.
pub const COLLISION_BODY: &str = "ShortCode already exists. Please choose another shortcode.";

/// Creates a new short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "shortCode": "my-code"   // optional; random 8-char hex code otherwise
/// }
/// ```
///
/// # Responses
///
/// - `200` JSON `{"success": true, "shortcode": "<code>"}` on creation
/// - `200` text/plain collision message when the code is already mapped —
///   the success-shaped status is kept for wire compatibility with existing
///   clients that branch on the body text (see DESIGN.md)
/// - `400` text/plain `URL is required` when `url` is missing or empty
/// - `400` text/plain on a malformed JSON body
/// - `500` on store failure
///
/// A collision never mutates the store, whether the code was user-supplied
/// or one of the vanishingly unlikely generated duplicates.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::Validation("Invalid JSON body"))?;

    let url = match payload.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::url_required()),
    };

    let final_code = payload
        .short_code
        .filter(|code| !code.is_empty())
        .unwrap_or_else(generate_code);

    // Hold the write lock across load→check→save so two concurrent
    // creations cannot both decide a code is free and clobber each other's
    // snapshot on save.
    let _guard = state.write_lock.lock().await;

    let mut links = state.store.load().await?;

    if links.contains(&final_code) {
        return Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain")],
            COLLISION_BODY,
        )
            .into_response());
    }

    links.insert(final_code.clone(), url);
    state.store.save(&links).await?;

    info!(code = %final_code, "created short link");

    Ok(Json(ShortenResponse {
        success: true,
        shortcode: final_code,
    })
    .into_response())
}
