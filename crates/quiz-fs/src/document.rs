//! Reading and atomically rewriting the catalog document

use std::fmt;

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// On-disk format of a document, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Pick the format for `path` from its extension, case-insensitively.
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    /// JSON is written with two-space indentation, non-ASCII characters
    /// unescaped and a trailing newline.
    fn render<T: Serialize>(self, value: &T) -> std::result::Result<String, String> {
        match self {
            Self::Json => serde_json::to_string_pretty(value)
                .map(|mut json| {
                    json.push('\n');
                    json
                })
                .map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
        }
    }
}

/// Loads a serde document and saves it back with an atomic replace.
#[derive(Debug, Default)]
pub struct DocumentStore {
    robustness: io::RobustnessConfig,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Read and parse the document at `path`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown extension, an unreadable file, or content that
    /// does not parse into `T`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = DocumentFormat::from_path(path)?;
        let content = io::read_text(path)?;
        format.parse(&content).map_err(|message| Error::Parse {
            path: path.to_native(),
            format,
            message,
        })
    }

    /// Serialize `value` and replace the document at `path` in one step.
    ///
    /// Nothing is written when serialization fails.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = DocumentFormat::from_path(path)?;
        let content = format.render(value).map_err(|message| Error::Serialize {
            path: path.to_native(),
            format,
            message,
        })?;

        tracing::debug!("Writing {} bytes of {} to {}", content.len(), format, path);
        io::write_atomic(path, content.as_bytes(), self.robustness)
    }
}
