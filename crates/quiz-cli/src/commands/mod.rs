//! Command implementations for quiz-cli

pub mod sync;

pub use sync::run_sync;
