//! Scanner behaviour against real directory trees

use pretty_assertions::assert_eq;
use quiz_core::{Error, Scanner};
use quiz_fs::NormalizedPath;
use quiz_test_utils::TestCatalog;
use rstest::rstest;

fn quizzes_of(scan: &quiz_core::CatalogScan, category: &str) -> Vec<String> {
    scan.get(category)
        .map(|set| set.iter().cloned().collect())
        .unwrap_or_default()
}

#[test]
fn test_scan_finds_marked_quizzes_only() {
    let catalog = TestCatalog::new()
        .with_quiz("sport", "history")
        .with_quiz("sport", "basics")
        .with_unmarked_quiz("sport", "draft");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert_eq!(quizzes_of(&scan, "sport"), vec!["basics", "history"]);
}

#[test]
fn test_category_without_valid_quiz_is_omitted() {
    let catalog = TestCatalog::new()
        .with_quiz("sport", "basics")
        .with_unmarked_quiz("ai", "intro");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert_eq!(scan.len(), 1);
    assert!(!scan.contains_category("ai"));
}

#[rstest]
#[case(".git")]
#[case("_template")]
#[case("__pycache__")]
#[case("node_modules")]
fn test_reserved_category_names_are_skipped(#[case] name: &str) {
    let catalog = TestCatalog::new()
        .with_quiz(name, "anything")
        .with_quiz("sport", "basics");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert!(!scan.contains_category(name));
    assert!(scan.contains_category("sport"));
}

#[rstest]
#[case(".hidden")]
#[case("_draft")]
#[case("node_modules")]
fn test_reserved_quiz_names_are_skipped(#[case] name: &str) {
    let catalog = TestCatalog::new()
        .with_quiz("sport", name)
        .with_quiz("sport", "basics");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert_eq!(quizzes_of(&scan, "sport"), vec!["basics"]);
}

#[test]
fn test_files_are_not_categories_or_quizzes() {
    let catalog = TestCatalog::new().with_quiz("sport", "basics");
    catalog.add_file("README.md", "# Quiz");
    catalog.add_file("sport/notes.txt", "notes");
    catalog.write_config("{}");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert_eq!(scan.len(), 1);
    assert_eq!(quizzes_of(&scan, "sport"), vec!["basics"]);
}

#[test]
fn test_marker_must_be_at_quiz_top_level() {
    let catalog = TestCatalog::new();
    catalog.add_file("sport/nested/deeper/quiz.json", "{}");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert!(scan.is_empty());
}

#[test]
fn test_marker_directory_does_not_count() {
    let catalog = TestCatalog::new();
    std::fs::create_dir_all(catalog.root().join("sport/basics/quiz.json")).unwrap();

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert!(scan.is_empty());
}

#[test]
fn test_custom_marker() {
    let catalog = TestCatalog::new().with_quiz("sport", "basics");
    catalog.add_file("sport/yaml_quiz/quiz.yaml", "title: x");

    let scan = Scanner::with_marker("quiz.yaml")
        .scan(&NormalizedPath::new(catalog.root()))
        .unwrap();

    assert_eq!(quizzes_of(&scan, "sport"), vec!["yaml_quiz"]);
}

#[test]
fn test_missing_root_is_an_error() {
    let catalog = TestCatalog::new();
    let root = NormalizedPath::new(catalog.root().join("does-not-exist"));

    let result = Scanner::new().scan(&root);

    assert!(matches!(result, Err(Error::RootNotFound { .. })));
}

#[cfg(unix)]
#[test]
fn test_symlinked_category_is_followed_without_looping() {
    let catalog = TestCatalog::new().with_quiz("sport", "basics");
    // A link back to the root inside a category must not recurse
    std::os::unix::fs::symlink(catalog.root(), catalog.root().join("sport/loop")).unwrap();
    std::os::unix::fs::symlink(catalog.root().join("sport"), catalog.root().join("games")).unwrap();

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert_eq!(quizzes_of(&scan, "sport"), vec!["basics"]);
    assert_eq!(quizzes_of(&scan, "games"), vec!["basics"]);
}

#[cfg(unix)]
#[test]
fn test_backslash_in_names_is_kept() {
    let catalog = TestCatalog::new().with_quiz("sport\\ball", "rules\\v2");

    let scan = Scanner::new().scan(&NormalizedPath::new(catalog.root())).unwrap();

    assert_eq!(quizzes_of(&scan, "sport\\ball"), vec!["rules\\v2"]);
}
