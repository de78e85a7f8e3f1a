//! Read-only validation of the configuration document against a scan

use std::collections::BTreeSet;
use std::fmt;

use quiz_meta::CatalogConfig;
use serde::{Deserialize, Serialize};

use crate::scanner::CatalogScan;

/// An inconsistency between `config.json` and the catalog tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// Listed in the document but not found on disk
    OrphanedQuizzes {
        category: String,
        quizzes: Vec<String>,
    },
    /// Found on disk but not listed in the document
    MissingQuizzes {
        category: String,
        quizzes: Vec<String>,
    },
    /// Category in the document without any quiz on disk
    OrphanedCategory { category: String },
    /// Category on disk without a record in the document
    NewCategory { category: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrphanedQuizzes { category, quizzes } => write!(
                f,
                "Category '{}': listed in config but not on disk: {}",
                category,
                quizzes.join(", ")
            ),
            Self::MissingQuizzes { category, quizzes } => write!(
                f,
                "Category '{}': on disk but not in config: {}",
                category,
                quizzes.join(", ")
            ),
            Self::OrphanedCategory { category } => {
                write!(f, "Category '{}' is in config but not on disk", category)
            }
            Self::NewCategory { category } => {
                write!(f, "Category '{}' is on disk but not in config", category)
            }
        }
    }
}

/// Report from [`validate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// A report without issues.
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn has_inconsistencies(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Compare `current` with a fresh scan without touching either.
///
/// Quiz-level issues are reported for categories present on both sides;
/// categories present on only one side are reported once, as a whole.
pub fn validate(scanned: &CatalogScan, current: &CatalogConfig) -> ValidationReport {
    let mut issues = Vec::new();

    for (key, category) in &current.categories {
        let Some(on_disk) = scanned.get(key) else {
            continue;
        };
        let listed: BTreeSet<&str> = category.quiz.iter().map(String::as_str).collect();

        let orphaned: Vec<String> = listed
            .iter()
            .filter(|quiz| !on_disk.contains(**quiz))
            .map(|quiz| quiz.to_string())
            .collect();
        if !orphaned.is_empty() {
            issues.push(Issue::OrphanedQuizzes {
                category: key.clone(),
                quizzes: orphaned,
            });
        }

        let missing: Vec<String> = on_disk
            .iter()
            .filter(|quiz| !listed.contains(quiz.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            issues.push(Issue::MissingQuizzes {
                category: key.clone(),
                quizzes: missing,
            });
        }
    }

    issues.extend(
        current
            .categories
            .keys()
            .filter(|key| !scanned.contains_category(key))
            .map(|key| Issue::OrphanedCategory {
                category: key.clone(),
            }),
    );

    issues.extend(
        scanned
            .iter()
            .filter(|(key, _)| !current.categories.contains_key(*key))
            .map(|(key, _)| Issue::NewCategory {
                category: key.clone(),
            }),
    );

    for issue in &issues {
        tracing::info!("{}", issue);
    }

    ValidationReport { issues }
}
