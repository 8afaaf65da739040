//! Immutable catalog of playable tracks.
//!
//! Tracks are loaded once at startup, either from the built-in list or from a
//! JSON file, and never change afterwards.

mod catalog;
mod error;
mod types;

pub use catalog::{Catalog, MAX_COMMAND_LEN};
pub use error::CatalogError;
pub use types::Track;
