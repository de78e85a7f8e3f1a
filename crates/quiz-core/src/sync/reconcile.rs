//! Merge of a fresh scan into the previous configuration document

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use quiz_meta::{CatalogConfig, Category, defaults};
use serde::{Deserialize, Serialize};

use crate::scanner::CatalogScan;

/// A single structural change applied by [`reconcile`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    /// A category directory appeared and got a new record
    CategoryAdded {
        category: String,
        quizzes: Vec<String>,
    },
    /// A category disappeared from disk and its record was dropped
    CategoryRemoved { category: String },
    /// Quizzes appeared in an existing category
    QuizzesAdded {
        category: String,
        quizzes: Vec<String>,
    },
    /// Quizzes disappeared from an existing category
    QuizzesRemoved {
        category: String,
        quizzes: Vec<String>,
    },
}

impl Change {
    /// The category this change belongs to.
    pub fn category(&self) -> &str {
        match self {
            Self::CategoryAdded { category, .. }
            | Self::CategoryRemoved { category }
            | Self::QuizzesAdded { category, .. }
            | Self::QuizzesRemoved { category, .. } => category,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CategoryAdded { category, quizzes } => write!(
                f,
                "Added category '{}' with {} quiz(zes): {}",
                category,
                quizzes.len(),
                quizzes.join(", ")
            ),
            Self::CategoryRemoved { category } => {
                write!(f, "Removed category '{}' (no quiz found)", category)
            }
            Self::QuizzesAdded { category, quizzes } => {
                write!(f, "Added to '{}': {}", category, quizzes.join(", "))
            }
            Self::QuizzesRemoved { category, quizzes } => {
                write!(f, "Removed orphaned from '{}': {}", category, quizzes.join(", "))
            }
        }
    }
}

/// Result of [`reconcile`]: the merged document and what changed
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub config: CatalogConfig,
    pub changes: Vec<Change>,
}

impl Reconciliation {
    /// Whether the category structure is identical to the previous document.
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Merge `scanned` into `previous`.
///
/// - Known categories get their `quiz` list replaced by the sorted scan;
///   every other field is kept as-is, missing or not.
/// - New categories are built from the built-in name and icon tables.
/// - Categories missing from the scan are dropped.
/// - `categoryIcons` and `categoryNames` are refreshed by overlaying the
///   built-in tables onto the previous ones.
pub fn reconcile(scanned: &CatalogScan, previous: CatalogConfig) -> Reconciliation {
    let CatalogConfig {
        app,
        settings,
        categories: mut remaining,
        category_icons,
        category_names,
        extra,
    } = previous;

    let mut categories = BTreeMap::new();
    let mut changes = Vec::new();

    for (key, found) in scanned.iter() {
        let quizzes: Vec<String> = found.iter().cloned().collect();

        let category = match remaining.remove(key) {
            Some(mut category) => {
                let before: BTreeSet<&str> = category.quiz.iter().map(String::as_str).collect();
                let added: Vec<String> = found
                    .iter()
                    .filter(|quiz| !before.contains(quiz.as_str()))
                    .cloned()
                    .collect();
                let removed: Vec<String> = before
                    .iter()
                    .filter(|quiz| !found.contains(**quiz))
                    .map(|quiz| quiz.to_string())
                    .collect();

                tracing::debug!("Updated category {} ({} quizzes)", key, quizzes.len());
                if !added.is_empty() {
                    changes.push(Change::QuizzesAdded {
                        category: key.clone(),
                        quizzes: added,
                    });
                }
                if !removed.is_empty() {
                    changes.push(Change::QuizzesRemoved {
                        category: key.clone(),
                        quizzes: removed,
                    });
                }

                category.quiz = quizzes;
                category
            }
            None => {
                changes.push(Change::CategoryAdded {
                    category: key.clone(),
                    quizzes: quizzes.clone(),
                });
                Category::with_defaults(key, quizzes)
            }
        };

        categories.insert(key.clone(), category);
    }

    for key in remaining.into_keys() {
        changes.push(Change::CategoryRemoved { category: key });
    }

    for change in &changes {
        tracing::info!("{}", change);
    }

    Reconciliation {
        config: CatalogConfig {
            app,
            settings,
            categories,
            category_icons: defaults::overlay(&category_icons, defaults::CATEGORY_ICONS),
            category_names: defaults::overlay(&category_names, defaults::CATEGORY_NAMES),
            extra,
        },
        changes,
    }
}
