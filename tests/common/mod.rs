#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use axum_test::TestServer;
use linkbox::api::handlers::{
    index_handler, links_handler, redirect_handler, shorten_handler, stylesheet_handler,
};
use linkbox::domain::LinkMap;
use linkbox::infrastructure::persistence::MemoryStore;
use linkbox::state::AppState;

/// Creates test state over an empty in-memory store.
///
/// Returns the store handle alongside the state so tests can assert on
/// what was (or was not) persisted.
pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    seeded_state(&[])
}

/// Creates test state over an in-memory store seeded with `pairs`.
pub fn seeded_state(pairs: &[(&str, &str)]) -> (AppState, Arc<MemoryStore>) {
    let links: LinkMap = pairs
        .iter()
        .map(|(code, url)| (code.to_string(), url.to_string()))
        .collect();
    let store = Arc::new(MemoryStore::with_links(links));
    let state = AppState::new(store.clone(), "public");
    (state, store)
}

/// Builds a test server with the full route table.
pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(index_handler))
        .route("/style.css", get(stylesheet_handler))
        .route("/links", get(links_handler))
        .route("/shorten", post(shorten_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}
