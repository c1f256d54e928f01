//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup. All variables are optional and
//! fall back to development-friendly defaults:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `STORE_PATH` - Path of the JSON link store file (default: `data/links.json`)
//! - `PUBLIC_DIR` - Directory with the landing page assets (default: `public`)
//! - `RUST_LOG` - Log level filter (default: `info`)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server binds to.
    pub listen_addr: SocketAddr,
    /// Path of the JSON file holding the link mapping.
    pub store_path: String,
    /// Directory containing `index.html` and `style.css`.
    pub public_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN` is set but not a valid socket address.
    pub fn from_env() -> Result<Self> {
        let listen = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let listen_addr = listen
            .parse()
            .with_context(|| format!("LISTEN is not a valid socket address: {listen}"))?;

        let store_path = env::var("STORE_PATH").unwrap_or_else(|_| "data/links.json".to_string());
        let public_dir = env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Self {
            listen_addr,
            store_path,
            public_dir,
        })
    }
}
