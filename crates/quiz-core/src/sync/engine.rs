//! CatalogSync implementation
//!
//! The CatalogSync coordinates the catalog tree on disk with the
//! `config.json` document at its root.

use quiz_fs::{CatalogPath, DocumentStore, NormalizedPath, RobustnessConfig};
use quiz_meta::CatalogConfig;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::scanner::{CatalogScan, Scanner};
use crate::stats::CatalogStats;

use super::check::{Issue, ValidationReport, validate};
use super::reconcile::{Change, reconcile};

/// Where the document returned by [`CatalogSync::load_config`] came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Parsed from the existing file
    Existing,
    /// No file yet; built-in defaults
    Missing,
    /// The file could not be read or parsed; built-in defaults
    Corrupt { reason: String },
}

/// A configuration document plus its provenance
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CatalogConfig,
    pub source: ConfigSource,
}

/// Options for [`CatalogSync::sync`]
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Validate first and stop without writing when nothing is out of step.
    pub skip_if_clean: bool,
}

/// Outcome of a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncStatus {
    /// The document already matched the tree; nothing was written
    AlreadyConsistent,
    /// The scan found no category with a quiz; nothing was written
    NoCategoriesFound,
    /// The document was rewritten and now matches the tree
    Updated,
    /// The document was rewritten but still does not match the tree
    NeedsManualReview,
}

/// Report from a sync run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    pub status: SyncStatus,
    /// Inconsistencies found before reconciling (empty unless validated first)
    pub issues: Vec<Issue>,
    /// Structural changes written to the document
    pub changes: Vec<Change>,
    /// Inconsistencies left after the write
    pub remaining: Vec<Issue>,
    /// Overview of the document as it stands after the run
    pub stats: CatalogStats,
}

impl SyncReport {
    fn unwritten(status: SyncStatus, issues: Vec<Issue>, config: &CatalogConfig) -> Self {
        Self {
            status,
            issues,
            changes: Vec::new(),
            remaining: Vec::new(),
            stats: CatalogStats::from_config(config),
        }
    }

    /// Whether the run ended with the document matching the tree, or with
    /// nothing to do. False only for [`SyncStatus::NeedsManualReview`].
    pub fn is_clean(&self) -> bool {
        self.status != SyncStatus::NeedsManualReview
    }

    /// Whether `config.json` was rewritten.
    pub fn wrote_config(&self) -> bool {
        matches!(
            self.status,
            SyncStatus::Updated | SyncStatus::NeedsManualReview
        )
    }
}

/// Engine for synchronizing a catalog tree with its configuration document
///
/// Provides the building blocks (scan, load, save, check) and the full
/// [`sync`](Self::sync) cycle that combines them.
pub struct CatalogSync {
    /// Root of the catalog tree
    root: NormalizedPath,
    /// Location of the configuration document
    config_path: NormalizedPath,
    scanner: Scanner,
    store: DocumentStore,
}

impl CatalogSync {
    /// Create a CatalogSync for `root`, using `<root>/config.json`.
    pub fn new(root: NormalizedPath) -> Self {
        let config_path = root.join(CatalogPath::ConfigFile.as_str());
        Self {
            root,
            config_path,
            scanner: Scanner::new(),
            store: DocumentStore::new(),
        }
    }

    /// Use a different document location. The extension selects the format.
    pub fn with_config_path(mut self, config_path: NormalizedPath) -> Self {
        self.config_path = config_path;
        self
    }

    /// Use a scanner with a different marker file.
    pub fn with_scanner(mut self, scanner: Scanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Tune the atomic write used by [`save_config`](Self::save_config).
    pub fn with_robustness(mut self, robustness: RobustnessConfig) -> Self {
        self.store = DocumentStore::with_robustness(robustness);
        self
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn config_path(&self) -> &NormalizedPath {
        &self.config_path
    }

    /// Scan the catalog tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is missing or cannot be listed.
    pub fn scan(&self) -> Result<CatalogScan> {
        self.scanner.scan(&self.root)
    }

    /// Load the configuration document.
    ///
    /// Never fails: a missing, unreadable or unparseable document yields the
    /// built-in default document, and the reason is logged.
    pub fn load_config(&self) -> LoadedConfig {
        if !self.config_path.exists() {
            tracing::info!(
                "No configuration at {}, starting from defaults",
                self.config_path
            );
            return LoadedConfig {
                config: CatalogConfig::default(),
                source: ConfigSource::Missing,
            };
        }

        match self.store.load::<CatalogConfig>(&self.config_path) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", self.config_path);
                LoadedConfig {
                    config,
                    source: ConfigSource::Existing,
                }
            }
            Err(e) => {
                tracing::warn!("Ignoring unusable configuration: {}", e);
                LoadedConfig {
                    config: CatalogConfig::default(),
                    source: ConfigSource::Corrupt {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    /// Persist the configuration document atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized or written.
    pub fn save_config(&self, config: &CatalogConfig) -> Result<()> {
        self.store.save(&self.config_path, config)?;
        tracing::info!("Configuration saved: {}", self.config_path);
        Ok(())
    }

    /// Validate the stored document against a fresh scan.
    ///
    /// Read-only; calling it repeatedly without changes on disk yields the
    /// same report.
    pub fn check(&self) -> Result<ValidationReport> {
        let scan = self.scan()?;
        let loaded = self.load_config();
        Ok(validate(&scan, &loaded.config))
    }

    /// Run one reconciliation cycle.
    ///
    /// With `skip_if_clean`, the document is validated first and left
    /// untouched when it already matches. Otherwise the tree is scanned,
    /// merged into the document, written, and validated again. There is at
    /// most one write per call.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be scanned or the document cannot
    /// be written. A document that still disagrees with the tree after the
    /// write is reported as [`SyncStatus::NeedsManualReview`], not an error.
    pub fn sync(&self, options: SyncOptions) -> Result<SyncReport> {
        let issues = if options.skip_if_clean {
            let scan = self.scan()?;
            let loaded = self.load_config();
            let report = validate(&scan, &loaded.config);
            if report.is_clean() {
                tracing::info!("Configuration already matches the catalog");
                return Ok(SyncReport::unwritten(
                    SyncStatus::AlreadyConsistent,
                    Vec::new(),
                    &loaded.config,
                ));
            }
            report.issues
        } else {
            Vec::new()
        };

        let scan = self.scan()?;
        let loaded = self.load_config();

        if scan.is_empty() {
            tracing::warn!("No quiz categories found under {}", self.root);
            return Ok(SyncReport::unwritten(
                SyncStatus::NoCategoriesFound,
                issues,
                &loaded.config,
            ));
        }

        let reconciliation = reconcile(&scan, loaded.config);
        self.save_config(&reconciliation.config)?;

        let remaining = self.check()?.issues;
        let status = if remaining.is_empty() {
            SyncStatus::Updated
        } else {
            tracing::warn!(
                "{} inconsistencies remain after reconciling",
                remaining.len()
            );
            SyncStatus::NeedsManualReview
        };

        Ok(SyncReport {
            status,
            issues,
            changes: reconciliation.changes,
            remaining,
            stats: CatalogStats::from_config(&reconciliation.config),
        })
    }
}
