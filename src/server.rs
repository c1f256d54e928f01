//! HTTP server initialization and runtime setup.
//!
//! Wires the file store into application state and runs the Axum server.

use crate::config::Config;
use crate::infrastructure::persistence::JsonFileStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The JSON file link store (bootstrapped empty on first load)
/// - Application state and router
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the server bind fails or a runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(JsonFileStore::new(&config.store_path));
    let state = AppState::new(store, &config.public_dir);

    let app = app_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
