//! Handlers for the landing page and stylesheet.
//!
//! The service ships a tiny static frontend (one HTML page, one stylesheet)
//! from the configured public directory. Asset read failures answer a
//! generic 404 page; no filesystem detail leaks into the response.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tokio::fs;
use tracing::warn;

use crate::state::AppState;

const MISSING_ASSET_BODY: &str = "<h1>404 Page Not Found</h1>";

/// Serves the landing page.
///
/// `GET /` → `200 text/html`, or `404 text/html` if `index.html` cannot be
/// read.
pub async fn index_handler(State(state): State<AppState>) -> Response {
    serve_asset(&state, "index.html", "text/html").await
}

/// Serves the stylesheet.
///
/// `GET /style.css` → `200 text/css`, or `404 text/html` if `style.css`
/// cannot be read.
pub async fn stylesheet_handler(State(state): State<AppState>) -> Response {
    serve_asset(&state, "style.css", "text/css").await
}

async fn serve_asset(state: &AppState, name: &str, content_type: &'static str) -> Response {
    match fs::read_to_string(state.public_dir.join(name)).await {
        Ok(data) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type)],
            data,
        )
            .into_response(),
        Err(e) => {
            warn!(asset = name, error = %e, "failed to read static asset");
            (StatusCode::NOT_FOUND, Html(MISSING_ASSET_BODY)).into_response()
        }
    }
}
