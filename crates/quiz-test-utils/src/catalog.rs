//! [`TestCatalog`] builder for catalog sync test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Marker file name that makes a directory a quiz.
pub const MARKER: &str = "quiz.json";

/// Configuration document name at the catalog root.
pub const CONFIG: &str = "config.json";

/// A temporary catalog root with helpers to lay out categories and quizzes.
///
/// # Example
///
/// ```rust,no_run
/// use quiz_test_utils::TestCatalog;
///
/// let catalog = TestCatalog::new()
///     .with_quiz("sport", "basics")
///     .with_unmarked_quiz("ai", "intro");
/// catalog.assert_file_exists("sport/basics/quiz.json");
/// ```
pub struct TestCatalog {
    temp_dir: TempDir,
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalog {
    /// Create an empty catalog root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the catalog.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of `config.json` at the catalog root.
    pub fn config_path(&self) -> PathBuf {
        self.root().join(CONFIG)
    }

    /// Create `category/quiz/quiz.json`.
    pub fn add_quiz(&self, category: &str, quiz: &str) {
        let dir = self.root().join(category).join(quiz);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(MARKER),
            format!("{{\"title\": \"{quiz}\", \"questions\": []}}"),
        )
        .unwrap();
    }

    /// Create `category/quiz/` with content but without the marker file.
    pub fn add_unmarked_quiz(&self, category: &str, quiz: &str) {
        let dir = self.root().join(category).join(quiz);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("questions.json"), "[]").unwrap();
    }

    /// Write an arbitrary file relative to the root, creating parents.
    pub fn add_file(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Delete a quiz directory.
    pub fn remove_quiz(&self, category: &str, quiz: &str) {
        fs::remove_dir_all(self.root().join(category).join(quiz)).unwrap();
    }

    /// Builder form of [`add_quiz`](Self::add_quiz).
    pub fn with_quiz(self, category: &str, quiz: &str) -> Self {
        self.add_quiz(category, quiz);
        self
    }

    /// Builder form of [`add_unmarked_quiz`](Self::add_unmarked_quiz).
    pub fn with_unmarked_quiz(self, category: &str, quiz: &str) -> Self {
        self.add_unmarked_quiz(category, quiz);
        self
    }

    /// Write raw text to `config.json`.
    pub fn write_config(&self, content: &str) {
        fs::write(self.config_path(), content).unwrap();
    }

    /// Write a JSON value to `config.json`.
    pub fn write_config_json(&self, value: &serde_json::Value) {
        self.write_config(&serde_json::to_string_pretty(value).unwrap());
    }

    /// Read `config.json` as raw text.
    pub fn read_config(&self) -> String {
        fs::read_to_string(self.config_path())
            .unwrap_or_else(|_| panic!("Could not read {}", self.config_path().display()))
    }

    /// Read and parse `config.json`.
    pub fn read_config_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_config()).unwrap()
    }

    /// Assert that `path` (relative to the catalog root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the catalog root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }
}
