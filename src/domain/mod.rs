//! Domain layer containing the link mapping entity and storage contract.
//!
//! # Architecture
//!
//! - [`link_map`] - The [`LinkMap`] entity: the complete code→URL mapping
//! - [`store`] - The [`LinkStore`] trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on the HTTP or persistence layers;
//! handlers talk to storage exclusively through the [`LinkStore`] trait.

pub mod link_map;
pub mod store;

pub use link_map::LinkMap;
pub use store::{LinkStore, StoreError};

#[cfg(test)]
pub use store::MockLinkStore;
