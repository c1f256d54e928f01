//! Shared application state injected into all handlers.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::LinkStore;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// The authoritative link store. Handlers re-load it at the start of
    /// every operation; nothing is cached across requests.
    pub store: Arc<dyn LinkStore>,

    /// Serializes the load→check→save sequence of creation requests.
    ///
    /// Without it, two concurrent creations that both load before either
    /// saves would each persist its own full snapshot, with the second
    /// save silently dropping the first mapping. Reads never take this
    /// lock.
    pub write_lock: Arc<Mutex<()>>,

    /// Directory holding the landing page and stylesheet.
    pub public_dir: PathBuf,
}

impl AppState {
    /// Creates state over the given store, serving assets from `public_dir`.
    pub fn new(store: Arc<dyn LinkStore>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            public_dir: public_dir.into(),
        }
    }
}
