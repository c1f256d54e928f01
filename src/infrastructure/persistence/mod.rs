//! Concrete [`crate::domain::LinkStore`] implementations.
//!
//! # Stores
//!
//! - [`JsonFileStore`] - production store: one JSON file holding the whole mapping
//! - [`MemoryStore`] - in-memory fake for tests and embedding

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
