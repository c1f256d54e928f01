//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`           - Landing page
//! - `GET  /style.css`  - Stylesheet
//! - `GET  /links`      - Full link mapping as JSON
//! - `GET  /{code}`     - Short link redirect
//! - `POST /shorten`    - Create a new mapping
//!
//! Anything else falls through to axum's 404 fallback. Static routes take
//! precedence over the `/{code}` capture, so `links`, `shorten`, and
//! `style.css` can never be resolved as short codes.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{
    index_handler, links_handler, redirect_handler, shorten_handler, stylesheet_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/style.css", get(stylesheet_handler))
        .route("/links", get(links_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
