//! Storage trait for the link mapping.

use crate::domain::LinkMap;
use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a [`LinkStore`].
///
/// "Backing store does not exist yet" is deliberately *not* an error: the
/// first [`LinkStore::load`] bootstraps an empty store instead. Only
/// genuine read/write failures surface here, as a tagged kind rather than
/// anything callers would have to string-match.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("link store unavailable: {0}")]
    Unavailable(#[source] std::io::Error),

    /// The backing store exists but does not contain a valid link mapping.
    #[error("link store corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Durable, authoritative keeper of the [`LinkMap`].
///
/// Load-modify-save is intentionally the entire protocol. The mapping is
/// small enough to read and replace wholesale on every operation, which
/// keeps the store auditable and trivially swappable. There is no indexing
/// and no incremental append log.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonFileStore`] - JSON file implementation
/// - [`crate::infrastructure::persistence::MemoryStore`] - in-memory fake for tests
/// - `MockLinkStore` - mockall mock available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns the current mapping.
    ///
    /// If no backing store exists yet, creates one representing an empty
    /// mapping and returns the empty map, so that a later restart sees a
    /// valid (not missing) store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the backing medium cannot be
    /// read for any reason other than first-time absence, and
    /// [`StoreError::Corrupt`] if its contents fail to parse.
    async fn load(&self) -> Result<LinkMap, StoreError>;

    /// Persists the given mapping, replacing the previous content wholesale.
    ///
    /// This is a full replace, not a merge: the caller's snapshot becomes
    /// the entire store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on write failure.
    async fn save(&self, links: &LinkMap) -> Result<(), StoreError>;
}
