use linkbox::domain::{LinkMap, LinkStore, StoreError};
use linkbox::infrastructure::persistence::JsonFileStore;

fn pairs(entries: &[(&str, &str)]) -> LinkMap {
    entries
        .iter()
        .map(|(code, url)| (code.to_string(), url.to_string()))
        .collect()
}

#[tokio::test]
async fn test_first_load_bootstraps_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("links.json");
    let store = JsonFileStore::new(&path);

    let links = store.load().await.unwrap();
    assert!(links.is_empty());

    // The file now exists and holds a valid empty mapping.
    let raw = std::fs::read_to_string(&path).unwrap();
    assert_eq!(raw, "{}");

    // A fresh store instance over the same path (a restart) sees a valid
    // empty store, not a missing one.
    let restarted = JsonFileStore::new(&path);
    assert!(restarted.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_then_load_round_trip_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");

    let saved = pairs(&[("abc", "https://example.com"), ("def", "http://other")]);
    JsonFileStore::new(&path).save(&saved).await.unwrap();

    let loaded = JsonFileStore::new(&path).load().await.unwrap();
    assert_eq!(loaded, saved);
}

#[tokio::test]
async fn test_save_replaces_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");
    let store = JsonFileStore::new(&path);

    store.save(&pairs(&[("a", "http://1")])).await.unwrap();
    store.save(&pairs(&[("b", "http://2")])).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert!(!loaded.contains("a"));
    assert_eq!(loaded.get("b"), Some("http://2"));
}

#[tokio::test]
async fn test_corrupt_file_is_a_tagged_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("links.json");
    std::fs::write(&path, "not json at all").unwrap();

    let err = JsonFileStore::new(&path).load().await.unwrap_err();
    assert!(matches!(err, StoreError::Corrupt(_)));
}

#[tokio::test]
async fn test_unreadable_path_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    // The path itself is a directory, so reading it as a file fails with
    // something other than NotFound.
    let store = JsonFileStore::new(dir.path());

    let err = store.load().await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
}
