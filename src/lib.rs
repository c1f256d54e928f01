//! # linkbox
//!
//! A small file-backed URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! The crate follows a trimmed layered layout:
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::LinkMap`] entity and the
//!   [`domain::LinkStore`] trait
//! - **Infrastructure Layer** ([`infrastructure`]) - The JSON file store and
//!   an in-memory fake
//! - **API Layer** ([`api`]) - HTTP handlers and DTOs
//!
//! ## Features
//!
//! - Shorten a URL with a random or user-supplied code
//! - 302 redirect from `GET /{code}` to the stored target
//! - Full mapping listing at `GET /links`
//! - Single JSON file as the entire persistent state, bootstrapped empty on
//!   first use
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional configuration
//! export LISTEN="0.0.0.0:3000"
//! export STORE_PATH="data/links.json"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{LinkMap, LinkStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{JsonFileStore, MemoryStore};
    pub use crate::state::AppState;
}
