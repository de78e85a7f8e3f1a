//! Configuration document model for Quiz Catalog Sync.
//!
//! This crate defines the shape of `config.json` and the immutable
//! built-in tables used to fill in metadata for newly discovered categories.

pub mod defaults;
pub mod schema;

pub use schema::{CatalogConfig, Category};
