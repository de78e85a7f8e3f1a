//! Filesystem abstraction for Quiz Catalog Sync
//!
//! Provides normalized path handling, catalog layout constants and
//! crash-safe I/O for the configuration document.

pub mod constants;
pub mod document;
pub mod error;
pub mod io;
pub mod path;

pub use constants::{CatalogPath, EXCLUDED_DIR_NAMES, RESERVED_PREFIXES, is_skipped_name};
pub use document::{DocumentFormat, DocumentStore};
pub use error::{Error, Result};
pub use io::RobustnessConfig;
pub use path::NormalizedPath;
