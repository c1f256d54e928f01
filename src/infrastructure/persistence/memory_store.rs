//! In-memory link store for tests and embedded use.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{LinkMap, LinkStore, StoreError};

/// In-memory [`LinkStore`] with the same load/save semantics as the file
/// store, minus durability.
///
/// Handler tests run against this store so they need neither a temp
/// directory nor filesystem cleanup.
#[derive(Default)]
pub struct MemoryStore {
    links: RwLock<LinkMap>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `links`.
    pub fn with_links(links: LinkMap) -> Self {
        Self {
            links: RwLock::new(links),
        }
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn load(&self) -> Result<LinkMap, StoreError> {
        Ok(self.links.read().await.clone())
    }

    async fn save(&self, links: &LinkMap) -> Result<(), StoreError> {
        *self.links.write().await = links.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_replaces_wholesale() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_empty());

        let first: LinkMap = [("a".to_string(), "http://1".to_string())]
            .into_iter()
            .collect();
        store.save(&first).await.unwrap();

        let second: LinkMap = [("b".to_string(), "http://2".to_string())]
            .into_iter()
            .collect();
        store.save(&second).await.unwrap();

        // Full replace, not a merge.
        let loaded = store.load().await.unwrap();
        assert!(!loaded.contains("a"));
        assert_eq!(loaded.get("b"), Some("http://2"));
    }
}
