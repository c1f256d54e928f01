//! Application error taxonomy and HTTP response mapping.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::domain::StoreError;

/// Body returned for any unknown short code or missing static asset.
pub const NOT_FOUND_BODY: &str = "<h1>ShortCode Not Found</h1>";

/// Per-request failures surfaced to the client.
///
/// A shortcode collision is deliberately *not* represented here: it is a
/// normal outcome of the creation flow, answered with its own response by
/// the shorten handler.
#[derive(Debug, Error)]
pub enum AppError {
    /// The backing store could not be read or written.
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// The request was syntactically fine but semantically invalid.
    #[error("{0}")]
    Validation(&'static str),

    /// Unknown short code.
    #[error("shortcode not found")]
    NotFound,
}

impl AppError {
    /// Missing or empty `url` field on a creation request.
    pub fn url_required() -> Self {
        Self::Validation("URL is required")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Storage(e) => {
                // Log the detail, never leak it to the client.
                error!(error = %e, "link store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain")],
                    "Internal Server Error",
                )
                    .into_response()
            }
            AppError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "text/plain")],
                message,
            )
                .into_response(),
            AppError::NotFound => {
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_BODY)).into_response()
            }
        }
    }
}
