//! Built-in defaults for category metadata.
//!
//! The tables are static data. Nothing in the workspace mutates them; the
//! persisted `categoryIcons`/`categoryNames` maps are derived from them with
//! [`overlay`].

use serde_json::{Map, Value, json};

/// Key of the icon used when a category has no entry of its own.
pub const FALLBACK_ICON_KEY: &str = "default";

/// The `app` section of a new document.
pub fn app_info() -> Value {
    json!({
        "title": "Quiz Center",
        "description": "Entdecke und teste dein Wissen in verschiedenen Kategorien",
        "version": "1.0.0",
        "author": "Quiz Center Team",
        "language": "de"
    })
}

/// The `settings` section of a new document.
pub fn settings() -> Value {
    json!({
        "autoDiscovery": true,
        "defaultQuizSettings": {
            "shuffleQuestions": true,
            "shuffleOptions": true,
            "showExplanations": true,
            "timePerQuestionSec": 60
        }
    })
}

/// Built-in icon identifiers, keyed by category directory name.
pub const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("ai", "fa-robot"),
    ("sport", "fa-football"),
    ("science", "fa-microscope"),
    ("history", "fa-landmark"),
    ("geography", "fa-globe"),
    ("math", "fa-calculator"),
    ("literature", "fa-book"),
    ("music", "fa-music"),
    ("art", "fa-palette"),
    ("technology", "fa-laptop-code"),
    ("movies", "fa-film"),
    ("games", "fa-gamepad"),
    ("food", "fa-utensils"),
    ("nature", "fa-leaf"),
    ("languages", "fa-language"),
    ("business", "fa-briefcase"),
    ("medicine", "fa-stethoscope"),
    ("chemistry", "fa-flask"),
    ("physics", "fa-atom"),
    ("biology", "fa-dna"),
    (FALLBACK_ICON_KEY, "fa-question-circle"),
];

/// Built-in display names, keyed by category directory name.
pub const CATEGORY_NAMES: &[(&str, &str)] = &[
    ("ai", "Künstliche Intelligenz"),
    ("sport", "Sport"),
    ("science", "Wissenschaft"),
    ("history", "Geschichte"),
    ("geography", "Geographie"),
    ("math", "Mathematik"),
    ("literature", "Literatur"),
    ("music", "Musik"),
    ("art", "Kunst"),
    ("technology", "Technologie"),
    ("movies", "Film & TV"),
    ("games", "Spiele"),
    ("food", "Kulinarik"),
    ("nature", "Natur"),
    ("languages", "Sprachen"),
    ("business", "Business"),
    ("medicine", "Medizin"),
    ("chemistry", "Chemie"),
    ("physics", "Physik"),
    ("biology", "Biologie"),
];

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|(k, v)| (*k == key).then_some(*v))
}

/// The icon used for categories without a table entry.
pub fn fallback_icon() -> &'static str {
    lookup(CATEGORY_ICONS, FALLBACK_ICON_KEY).unwrap_or("fa-question-circle")
}

/// Icon for a newly created category.
pub fn icon_for(key: &str) -> String {
    lookup(CATEGORY_ICONS, key)
        .unwrap_or_else(fallback_icon)
        .to_string()
}

/// Display name for a newly created category.
///
/// Falls back to the title-cased directory name.
pub fn display_name_for(key: &str) -> String {
    lookup(CATEGORY_NAMES, key)
        .map(str::to_string)
        .unwrap_or_else(|| title_case(key))
}

/// Description for a newly created category.
pub fn description_for(display_name: &str) -> String {
    format!("Quiz und Wissen rund um {display_name}")
}

/// Uppercase the first letter of every run of letters and lowercase the rest.
///
/// Any non-letter character starts a new word, so `"world_war-2nd"` becomes
/// `"World_War-2Nd"`.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_word = false;
    for c in key.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Overlay a built-in table onto a previously persisted one.
///
/// Built-in entries win on key collision; custom keys survive.
/// Custom entries keep whatever value they held.
pub fn overlay(previous: &Map<String, Value>, builtin: &[(&str, &str)]) -> Map<String, Value> {
    let mut merged = previous.clone();
    for (key, value) in builtin {
        merged.insert((*key).to_string(), Value::from(*value));
    }
    merged
}

/// Built-in icon table as an owned map.
pub fn icon_table() -> Map<String, Value> {
    overlay(&Map::new(), CATEGORY_ICONS)
}

/// Built-in name table as an owned map.
pub fn name_table() -> Map<String, Value> {
    overlay(&Map::new(), CATEGORY_NAMES)
}
