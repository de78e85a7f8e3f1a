//! Keeping `config.json` in step with the catalog tree
//!
//! This module provides:
//! - **check**: read-only validation of the document against a scan
//! - **reconcile**: pure merge of a scan into the previous document
//! - **engine**: the load, reconcile, persist, re-validate cycle

mod check;
mod engine;
mod reconcile;

pub use check::{Issue, ValidationReport, validate};
pub use engine::{CatalogSync, ConfigSource, LoadedConfig, SyncOptions, SyncReport, SyncStatus};
pub use reconcile::{Change, Reconciliation, reconcile};
