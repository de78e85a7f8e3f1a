//! Invariants of the pure reconcile and validate functions

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use quiz_core::{CatalogScan, reconcile, validate};
use quiz_meta::{CatalogConfig, Category};

fn key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("sport".to_string()),
        Just("ai".to_string()),
        Just("history".to_string()),
        "[a-z]{1,6}",
    ]
}

fn scan_strategy() -> impl Strategy<Value = CatalogScan> {
    prop::collection::btree_map(key(), prop::collection::btree_set("[a-z0-9]{1,5}", 1..5), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

fn config_strategy() -> impl Strategy<Value = CatalogConfig> {
    prop::collection::btree_map(
        key(),
        (
            "[A-Za-z ]{0,8}",
            "fa-[a-z]{1,6}",
            prop::collection::vec("[a-z0-9]{1,5}", 0..5),
        ),
        0..5,
    )
    .prop_map(|entries| {
        let mut config = CatalogConfig::default();
        for (key, (name, icon, quiz)) in entries {
            let mut category = Category::with_defaults(&key, quiz);
            category.name = Some(name.into());
            category.icon = Some(icon.into());
            config.categories.insert(key, category);
        }
        config
    })
}

proptest! {
    #[test]
    fn reconciled_config_validates_clean(scan in scan_strategy(), previous in config_strategy()) {
        let result = reconcile(&scan, previous);
        prop_assert!(validate(&scan, &result.config).is_clean());
    }

    #[test]
    fn second_reconcile_changes_nothing(scan in scan_strategy(), previous in config_strategy()) {
        let first = reconcile(&scan, previous);
        let second = reconcile(&scan, first.config.clone());
        prop_assert!(second.is_unchanged());
        prop_assert_eq!(second.config, first.config);
    }

    #[test]
    fn absent_categories_are_pruned(scan in scan_strategy(), previous in config_strategy()) {
        let result = reconcile(&scan, previous);
        for key in result.config.categories.keys() {
            prop_assert!(scan.contains_category(key));
        }
        prop_assert_eq!(result.config.categories.len(), scan.len());
    }

    #[test]
    fn quiz_lists_are_sorted_and_unique(scan in scan_strategy(), previous in config_strategy()) {
        let result = reconcile(&scan, previous);
        for category in result.config.categories.values() {
            let mut expected = category.quiz.clone();
            expected.sort();
            expected.dedup();
            prop_assert_eq!(&category.quiz, &expected);
            prop_assert!(!category.quiz.is_empty());
        }
    }

    #[test]
    fn existing_metadata_is_untouched(scan in scan_strategy(), previous in config_strategy()) {
        let before: BTreeMap<String, Category> = previous.categories.clone();
        let result = reconcile(&scan, previous);
        for (key, category) in &result.config.categories {
            if let Some(old) = before.get(key) {
                prop_assert_eq!(&category.name, &old.name);
                prop_assert_eq!(&category.icon, &old.icon);
                prop_assert_eq!(&category.description, &old.description);
                prop_assert_eq!(&category.extra, &old.extra);
            }
        }
    }

    #[test]
    fn every_change_names_a_distinct_cause(scan in scan_strategy(), previous in config_strategy()) {
        let result = reconcile(&scan, previous);
        let mut seen = BTreeSet::new();
        for change in &result.changes {
            let kind = std::mem::discriminant(change);
            let inserted = seen.insert((change.category().to_string(), format!("{:?}", kind)));
            prop_assert!(inserted);
        }
    }
}
