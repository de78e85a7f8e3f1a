//! Constants and enums for catalog filesystem paths.

use std::path::Path;

/// Name prefixes that mark a directory as private to the catalog tooling.
pub const RESERVED_PREFIXES: &[char] = &['.', '_'];

/// Directory names that are never categories or quizzes.
pub const EXCLUDED_DIR_NAMES: &[&str] = &["__pycache__", "node_modules"];

/// Well-known files inside a catalog tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPath {
    /// The `config.json` document at the catalog root
    ConfigFile,
    /// The `quiz.json` marker that makes a directory a quiz
    QuizMarker,
}

impl CatalogPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigFile => "config.json",
            Self::QuizMarker => "quiz.json",
        }
    }
}

impl AsRef<Path> for CatalogPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for CatalogPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a directory entry name is excluded from catalog discovery.
pub fn is_skipped_name(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIXES) || EXCLUDED_DIR_NAMES.contains(&name)
}
