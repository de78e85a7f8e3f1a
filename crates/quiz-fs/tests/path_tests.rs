use quiz_fs::NormalizedPath;

#[test]
fn test_normalize_forward_slashes() {
    let path = NormalizedPath::new("catalog/sport/basics");
    assert_eq!(path.as_str(), "catalog/sport/basics");
}

#[cfg(windows)]
#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("catalog\\sport\\basics");
    assert_eq!(path.as_str(), "catalog/sport/basics");
    assert_eq!(path.join("a\\b").as_str(), "catalog/sport/basics/a/b");
}

#[cfg(not(windows))]
#[test]
fn test_backslash_is_part_of_a_name() {
    let path = NormalizedPath::new("catalog").join("c\\d");
    assert_eq!(path.as_str(), "catalog/c\\d");
    assert_eq!(path.file_name(), Some("c\\d"));
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("catalog/sport");
    let joined = base.join("basics");
    assert_eq!(joined.as_str(), "catalog/sport/basics");
}

#[test]
fn test_join_onto_trailing_slash() {
    let base = NormalizedPath::new("catalog/");
    assert_eq!(base.join("sport").as_str(), "catalog/sport");
}

#[test]
fn test_join_empty_segment_is_identity() {
    let base = NormalizedPath::new("catalog");
    assert_eq!(base.join(""), base);
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("catalog/sport/basics/quiz.json");
    assert_eq!(path.file_name(), Some("quiz.json"));
}

#[test]
fn test_extension() {
    assert_eq!(NormalizedPath::new("root/config.json").extension(), Some("json"));
    assert_eq!(NormalizedPath::new("root/.hidden").extension(), None);
    assert_eq!(NormalizedPath::new("root/Makefile").extension(), None);
}

#[test]
fn test_exists_false_for_nonexistent() {
    let path = NormalizedPath::new("/nonexistent/path/that/does/not/exist");
    assert!(!path.exists());
    assert!(!path.is_dir());
    assert!(!path.is_file());
}
