//! Shared test utilities for the quiz-catalog-sync workspace.
//!
//! This crate provides standardised catalog fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`catalog`]: [`TestCatalog`](catalog::TestCatalog) builder for on-disk quiz trees

pub mod catalog;

pub use catalog::TestCatalog;
