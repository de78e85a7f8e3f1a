//! Model of the catalog configuration document
//!
//! Mirrors the JSON layout of `config.json`:
//!
//! ```json
//! {
//!   "app": { "title": "...", "description": "...", "version": "...", "author": "...", "language": "de" },
//!   "settings": { "autoDiscovery": true, "defaultQuizSettings": { ... } },
//!   "categories": { "sport": { "name": "Sport", "icon": "fa-football", "description": "...", "quiz": ["basics"] } },
//!   "categoryIcons": { "sport": "fa-football" },
//!   "categoryNames": { "sport": "Sport" }
//! }
//! ```
//!
//! Only the parts the sync rewrites are typed: the category map, each
//! category's `quiz` list and the two lookup tables. Everything else is held
//! as raw JSON and written back as found, whatever its type. Sections missing
//! from a document fall back to their defaults.
//!
//! A document is rejected only when its top level is not an object or
//! `categories` is not a map of objects.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::defaults;

/// A category record.
///
/// `name`, `icon` and `description` belong to the user and are carried over
/// untouched, including when they are missing or not strings. `quiz` is
/// owned by the sync and rewritten on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    /// Quiz ids; anything that is not a string is dropped on load.
    #[serde(default, deserialize_with = "quiz_list")]
    pub quiz: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    /// Build a record for a newly discovered category from the built-in tables.
    pub fn with_defaults(key: &str, quizzes: Vec<String>) -> Self {
        let name = defaults::display_name_for(key);
        let description = defaults::description_for(&name);
        Self {
            icon: Some(Value::String(defaults::icon_for(key))),
            name: Some(Value::String(name)),
            description: Some(Value::String(description)),
            quiz: quizzes,
            extra: Map::new(),
        }
    }

    /// The `name` field, if it holds a string.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(Value::as_str)
    }

    /// The `icon` field, if it holds a string.
    pub fn icon_id(&self) -> Option<&str> {
        self.icon.as_ref().and_then(Value::as_str)
    }

    /// Number of quizzes listed in this category.
    pub fn quiz_count(&self) -> usize {
        self.quiz.len()
    }
}

/// The whole configuration document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    #[serde(default = "defaults::app_info")]
    pub app: Value,
    #[serde(default = "defaults::settings")]
    pub settings: Value,
    #[serde(default)]
    pub categories: BTreeMap<String, Category>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub category_icons: Map<String, Value>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub category_names: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CatalogConfig {
    /// The document used when no usable `config.json` exists.
    fn default() -> Self {
        Self {
            app: defaults::app_info(),
            settings: defaults::settings(),
            categories: BTreeMap::new(),
            category_icons: defaults::icon_table(),
            category_names: defaults::name_table(),
            extra: Map::new(),
        }
    }
}

impl CatalogConfig {
    /// Total number of quizzes across all categories.
    pub fn quiz_count(&self) -> usize {
        self.categories.values().map(Category::quiz_count).sum()
    }
}

/// Keep a present key even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn quiz_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let quizzes = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(quiz) => Some(quiz),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(quizzes)
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
