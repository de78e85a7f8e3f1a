use proptest::prelude::*;
use quiz_fs::{NormalizedPath, is_skipped_name};

proptest! {
    #[test]
    fn test_normalization_survives_native_roundtrip(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        if cfg!(windows) {
            prop_assert!(!path.as_str().contains('\\'));
        }

        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_join_ends_with_segment(base in "[a-z]{1,8}", segment in "[a-z]{1,8}") {
        let joined = NormalizedPath::new(&base).join(&segment);
        prop_assert_eq!(joined.file_name(), Some(segment.as_str()));
    }

    #[test]
    fn test_reserved_prefix_always_skipped(name in "[._][a-zA-Z0-9_]*") {
        prop_assert!(is_skipped_name(&name));
    }
}
