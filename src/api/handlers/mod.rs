//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint of the service.

pub mod assets;
pub mod links;
pub mod redirect;
pub mod shorten;

pub use assets::{index_handler, stylesheet_handler};
pub use links::links_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
