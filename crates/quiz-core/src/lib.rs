//! Scanning and reconciliation core for Quiz Catalog Sync
//!
//! This crate keeps `config.json` in step with a two-level quiz tree:
//!
//! - **Scanner**: walks `<root>/<category>/<quiz>/quiz.json`
//! - **Reconcile**: merges a scan into the previous document, keeping
//!   user-edited category metadata
//! - **Validate**: read-only comparison of a scan with the document
//! - **CatalogSync**: the full validate, reconcile, persist, re-validate cycle
//!
//! # Architecture
//!
//! ```text
//!                  quiz-cli
//!                     |
//!                 quiz-core
//!                     |
//!           +---------+---------+
//!           |                   |
//!        quiz-fs            quiz-meta
//! ```

pub mod error;
pub mod scanner;
pub mod stats;
pub mod sync;

pub use error::{Error, Result};
pub use scanner::{CatalogScan, Scanner};
pub use stats::{CatalogStats, CategorySummary};
pub use sync::{
    CatalogSync, Change, ConfigSource, Issue, LoadedConfig, Reconciliation, SyncOptions,
    SyncReport, SyncStatus, ValidationReport, reconcile, validate,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn error_root_not_found_displays_path() {
        let error = Error::RootNotFound {
            path: PathBuf::from("/path/to/catalog"),
        };

        let display = format!("{}", error);
        assert!(
            display.contains("/path/to/catalog"),
            "Error display should contain the path, got: {}",
            display
        );
    }
}
