//! Catalog scanner
//!
//! Walks exactly two directory levels below the catalog root:
//! `<root>/<category>/<quiz>/`. A quiz counts only when its directory holds
//! the marker file (`quiz.json`). Categories without a single valid quiz are
//! left out of the result entirely.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use quiz_fs::{CatalogPath, NormalizedPath, is_skipped_name};

use crate::{Error, Result};

/// Category key to quiz ids, as found on disk by one scan.
///
/// Every stored category has at least one quiz. Quiz ids are kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogScan {
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl CatalogScan {
    /// Create an empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a category. Empty quiz sets are ignored.
    pub fn insert(&mut self, category: impl Into<String>, quizzes: BTreeSet<String>) {
        if !quizzes.is_empty() {
            self.categories.insert(category.into(), quizzes);
        }
    }

    /// Quiz ids of a category, if the category was found.
    pub fn get(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories.get(category)
    }

    /// Whether the category was found with at least one quiz.
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Iterate categories in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.categories.iter()
    }

    /// Number of categories found.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of quizzes across all categories.
    pub fn quiz_count(&self) -> usize {
        self.categories.values().map(BTreeSet::len).sum()
    }
}

impl<K, Q, S> FromIterator<(K, Q)> for CatalogScan
where
    K: Into<String>,
    Q: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Q)>>(iter: I) -> Self {
        let mut scan = Self::new();
        for (category, quizzes) in iter {
            scan.insert(category, quizzes.into_iter().map(Into::into).collect());
        }
        scan
    }
}

/// Scanner for a catalog directory tree
#[derive(Debug, Clone)]
pub struct Scanner {
    marker: String,
}

impl Default for Scanner {
    fn default() -> Self {
        Self {
            marker: CatalogPath::QuizMarker.as_str().to_string(),
        }
    }
}

impl Scanner {
    /// Create a scanner that looks for `quiz.json`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scanner that looks for a different marker file name.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// The marker file name this scanner requires.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Scan `root` for categories and quizzes.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a directory or cannot be listed.
    /// Problems below the root are logged and skipped.
    pub fn scan(&self, root: &NormalizedPath) -> Result<CatalogScan> {
        if !root.is_dir() {
            return Err(Error::RootNotFound {
                path: root.to_native(),
            });
        }

        tracing::debug!("Scanning catalog at {}", root);

        let categories = child_dirs(root).map_err(|source| Error::ScanFailed {
            path: root.to_native(),
            source,
        })?;

        let mut scan = CatalogScan::new();
        for category in categories {
            tracing::info!("Found category: {}", category);
            let quizzes = self.scan_category(&root.join(&category), &category);
            if quizzes.is_empty() {
                tracing::debug!("Category {} has no valid quiz, leaving it out", category);
                continue;
            }
            scan.insert(category, quizzes);
        }

        tracing::debug!(
            "Scan found {} categories with {} quizzes",
            scan.len(),
            scan.quiz_count()
        );
        Ok(scan)
    }

    fn scan_category(&self, dir: &NormalizedPath, category: &str) -> BTreeSet<String> {
        let candidates = match child_dirs(dir) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("Cannot read category {}: {}", dir, e);
                return BTreeSet::new();
            }
        };

        let mut quizzes = BTreeSet::new();
        for quiz in candidates {
            if dir.join(&quiz).join(&self.marker).is_file() {
                tracing::info!("Found quiz: {}/{}", category, quiz);
                quizzes.insert(quiz);
            } else {
                tracing::warn!(
                    "Not a quiz ({} missing): {}/{}",
                    self.marker,
                    category,
                    quiz
                );
            }
        }
        quizzes
    }
}

/// Names of the immediate subdirectories of `dir` that take part in
/// discovery, sorted. Symlinked directories count as directories.
fn child_dirs(dir: &NormalizedPath) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir.to_native())? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", dir, e);
                continue;
            }
        };
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            tracing::warn!(
                "Skipping non UTF-8 name in {}: {:?}",
                dir,
                entry.file_name()
            );
            continue;
        };
        if !entry.path().is_dir() {
            continue;
        }
        if is_skipped_name(&name) {
            tracing::debug!("Skipping: {}/{}", dir, name);
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}
