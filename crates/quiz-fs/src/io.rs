//! Atomic I/O operations for the catalog configuration

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::time::Duration;

use backoff::ExponentialBackoffBuilder;

use crate::{Error, NormalizedPath, Result};

/// Tuning knobs for [`write_atomic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobustnessConfig {
    /// How long a failing rename onto the target is retried before giving up.
    pub retry_timeout: Duration,
    /// Flush the temp file to disk before it replaces the target.
    pub enable_fsync: bool,
}

impl Default for RobustnessConfig {
    fn default() -> Self {
        Self {
            retry_timeout: Duration::from_secs(2),
            enable_fsync: true,
        }
    }
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename so readers only ever observe the old
/// document or the complete new one. The temp file lives next to the target
/// to stay on the same filesystem.
pub fn write_atomic(path: &NormalizedPath, content: &[u8], config: RobustnessConfig) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let written = temp_file.write_all(content).and_then(|()| {
        if config.enable_fsync {
            temp_file.sync_all()
        } else {
            Ok(())
        }
    });
    drop(temp_file);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    let policy = ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(10))
        .with_max_elapsed_time(Some(config.retry_timeout))
        .build();

    let renamed = backoff::retry(policy, || {
        fs::rename(&temp_path, &native_path).map_err(|e| {
            tracing::debug!("Rename onto {} failed, retrying: {}", native_path.display(), e);
            backoff::Error::transient(e)
        })
    });

    if let Err(e) = renamed {
        let _ = fs::remove_file(&temp_path);
        let source = match e {
            backoff::Error::Permanent(e) | backoff::Error::Transient { err: e, .. } => e,
        };
        return Err(Error::io(&native_path, source));
    }

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Write text content to a file atomically with default robustness settings.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes(), RobustnessConfig::default())
}
