//! Summary statistics for a configuration document

use quiz_meta::{CatalogConfig, defaults};
use serde::{Deserialize, Serialize};

/// One category line of the overview
///
/// `name` and `icon` fall back to the built-in values when the record does
/// not hold a string for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub key: String,
    pub name: String,
    pub icon: String,
    pub quizzes: Vec<String>,
}

/// Overview of the categories and quizzes in a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub categories: Vec<CategorySummary>,
    pub total_quizzes: usize,
}

impl CatalogStats {
    pub fn from_config(config: &CatalogConfig) -> Self {
        let categories: Vec<CategorySummary> = config
            .categories
            .iter()
            .map(|(key, category)| CategorySummary {
                key: key.clone(),
                name: category
                    .display_name()
                    .map_or_else(|| defaults::display_name_for(key), str::to_string),
                icon: category
                    .icon_id()
                    .map_or_else(|| defaults::icon_for(key), str::to_string),
                quizzes: category.quiz.clone(),
            })
            .collect();

        Self {
            total_quizzes: config.quiz_count(),
            categories,
        }
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_meta::Category;

    #[test]
    fn test_from_config() {
        let mut config = CatalogConfig::default();
        config.categories.insert(
            "sport".into(),
            Category::with_defaults("sport", vec!["basics".into(), "history".into()]),
        );
        config
            .categories
            .insert("ai".into(), Category::with_defaults("ai", vec!["intro".into()]));

        let stats = CatalogStats::from_config(&config);

        assert_eq!(stats.category_count(), 2);
        assert_eq!(stats.total_quizzes, 3);
        assert_eq!(stats.categories[0].key, "ai");
        assert_eq!(stats.categories[0].name, "Künstliche Intelligenz");
        assert_eq!(stats.categories[1].icon, "fa-football");
    }

    #[test]
    fn test_missing_metadata_falls_back_to_builtins() {
        let mut config = CatalogConfig::default();
        let mut category = Category::with_defaults("cooking", vec!["pasta".into()]);
        category.name = None;
        category.icon = Some(serde_json::json!(7));
        config.categories.insert("cooking".into(), category);

        let stats = CatalogStats::from_config(&config);

        assert_eq!(stats.categories[0].name, "Cooking");
        assert_eq!(stats.categories[0].icon, "fa-question-circle");
    }

    #[test]
    fn test_empty_config() {
        let stats = CatalogStats::from_config(&CatalogConfig::default());
        assert_eq!(stats, CatalogStats::default());
    }
}
