//! JSON file implementation of the link store.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::{LinkMap, LinkStore, StoreError};

/// File-backed store keeping the whole [`LinkMap`] in a single JSON file.
///
/// The file is a flat `{"code": "url", ...}` object. Every [`LinkStore::load`]
/// reads the file from disk and every [`LinkStore::save`] rewrites it
/// wholesale, so the file is always the authoritative state and the handlers
/// never rely on an in-process cache surviving between requests.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file (and its parent directory) is not touched until the first
    /// [`LinkStore::load`] bootstraps it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty mapping to the backing file, creating the parent
    /// directory if needed, so that subsequent loads (including after a
    /// process restart) see a valid empty store rather than a missing one.
    async fn bootstrap(&self) -> Result<LinkMap, StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(StoreError::Unavailable)?;
            }
        }

        let empty = LinkMap::new();
        self.write_map(&empty).await?;
        info!(path = %self.path.display(), "bootstrapped empty link store");
        Ok(empty)
    }

    async fn write_map(&self, links: &LinkMap) -> Result<(), StoreError> {
        // serde_json only fails here on non-string keys, which LinkMap
        // cannot produce; treat it as an I/O-level failure all the same.
        let data = serde_json::to_string(links)
            .map_err(|e| StoreError::Unavailable(std::io::Error::other(e)))?;

        fs::write(&self.path, data)
            .await
            .map_err(StoreError::Unavailable)
    }
}

#[async_trait]
impl LinkStore for JsonFileStore {
    async fn load(&self) -> Result<LinkMap, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(data) => serde_json::from_str(&data).map_err(StoreError::Corrupt),
            // First-time absence is the bootstrap branch, not a failure.
            Err(e) if e.kind() == ErrorKind::NotFound => self.bootstrap().await,
            Err(e) => Err(StoreError::Unavailable(e)),
        }
    }

    async fn save(&self, links: &LinkMap) -> Result<(), StoreError> {
        self.write_map(links).await
    }
}
