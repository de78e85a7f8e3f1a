//! Error types for quiz-core

use std::path::PathBuf;

/// Result type for quiz-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quiz-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The catalog root is missing or not a directory
    #[error("Catalog root not found or not a directory: {path}")]
    RootNotFound { path: PathBuf },

    /// The catalog root could not be listed
    #[error("Failed to scan {path}: {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from quiz-fs
    #[error(transparent)]
    Fs(#[from] quiz_fs::Error),
}
