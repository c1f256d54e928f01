mod common;

use axum::http::StatusCode;
use linkbox::domain::LinkStore;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success_is_302_with_location() {
    let (state, _store) = common::seeded_state(&[("redirect1", "https://example.com/target")]);
    let server = common::make_server(state);

    let response = server.get("/redirect1").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com/target");
    response.assert_text("");
}

#[tokio::test]
async fn test_redirect_not_found_body() {
    let (state, store) = common::seeded_state(&[("known", "http://x")]);
    let server = common::make_server(state);

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();
    response.assert_text("<h1>ShortCode Not Found</h1>");

    // Lookups never mutate the store.
    assert_eq!(store.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_then_redirect_round_trip() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    // A target with path, query, and fragment must come back byte-for-byte.
    let url = "https://example.com/a%20b?q=1&x=2#frag";

    let created = server
        .post("/shorten")
        .json(&json!({ "url": url }))
        .await
        .json::<serde_json::Value>();
    let code = created["shortcode"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), url);
}

#[tokio::test]
async fn test_unmatched_method_is_not_a_crash() {
    let (state, _store) = common::create_test_state();
    let server = common::make_server(state);

    // POST to a GET-only route answers 405, not a fault.
    let response = server.post("/links").await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);

    // Nested paths match nothing and fall through to the 404 fallback.
    let response = server.get("/a/b/c").await;
    response.assert_status_not_found();
}
