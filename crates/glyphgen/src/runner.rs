//! One export run: discover, write, summarize.
//!
//! A run is a full re-scan and a full re-write; no state survives between
//! invocations. The only fatal condition is an output directory that
//! cannot be created; everything downstream of that degrades to per-icon
//! failures that are counted and reported.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use glyphgen_registry::IconRegistry;
use glyphgen_svg::{ExportResult, SvgWriter};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Package scanned when `--package` is not given.
pub const DEFAULT_PACKAGE: &str = "glyphgen.icons";

/// Output directory used when `--out` is not given.
pub const DEFAULT_OUT_DIR: &str = "build/icon-svgs";

/// Settings for one export run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Namespace to scan for icon declarations.
    pub package: String,
    /// Directory receiving one `.svg` file per icon.
    pub out_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_owned(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

/// Aggregate outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of icons written.
    pub succeeded: usize,
    /// Number of icons that failed to serialize or write.
    pub failed: usize,
    /// The output directory.
    pub out_dir: PathBuf,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Done. Success: {}, Failed: {}, Output: {}",
            self.succeeded,
            self.failed,
            self.out_dir.display()
        )
    }
}

/// Fatal run failures.
///
/// Per-icon problems are not in here: they are recovered locally and only
/// show up in the summary counts.
#[derive(Error, Debug)]
pub enum RunError {
    /// The output directory could not be created, so no output is possible.
    #[error("cannot create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Execute one export run against the given registry.
///
/// Creates the output directory, scans the configured package, and writes
/// every discovered icon in name-sorted order. An empty scan result is not
/// an error: the run reports zero successes and zero failures and the
/// caller exits normally.
pub fn run(registry: &IconRegistry, config: &RunConfig) -> Result<RunSummary, RunError> {
    fs::create_dir_all(&config.out_dir).map_err(|source| RunError::OutputDir {
        path: config.out_dir.clone(),
        source,
    })?;
    // Prefer the absolute path in reports; keep the configured one if the
    // filesystem refuses to resolve it.
    let out_dir = fs::canonicalize(&config.out_dir).unwrap_or_else(|_| config.out_dir.clone());

    let found = registry.discover(&config.package);
    if found.is_empty() {
        warn!("no vector icons found under {}", config.package);
        return Ok(RunSummary {
            succeeded: 0,
            failed: 0,
            out_dir,
        });
    }
    info!("discovered {} icons under {}", found.len(), config.package);

    let writer = SvgWriter::new();
    let mut succeeded = 0;
    let mut failed = 0;
    for (name, icon) in &found {
        match writer.export(name, icon, &out_dir) {
            ExportResult::Success { file } => {
                debug!("wrote {}", file.display());
                succeeded += 1;
            }
            ExportResult::Failure { name, reason } => {
                warn!("failed {}: {}", name, reason);
                failed += 1;
            }
        }
    }

    Ok(RunSummary {
        succeeded,
        failed,
        out_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.package, "glyphgen.icons");
        assert_eq!(config.out_dir, PathBuf::from("build/icon-svgs"));
    }

    #[test]
    fn test_summary_line_format() {
        let summary = RunSummary {
            succeeded: 7,
            failed: 1,
            out_dir: PathBuf::from("/tmp/out"),
        };
        assert_eq!(
            summary.to_string(),
            "Done. Success: 7, Failed: 1, Output: /tmp/out"
        );
    }

    #[test]
    fn test_empty_registry_is_not_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = IconRegistry::new();
        let config = RunConfig {
            package: "nothing.here".to_owned(),
            out_dir: dir.path().join("svgs"),
        };

        let summary = run(&registry, &config).expect("empty scan is a normal run");
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
        // The directory is still created before the scan.
        assert!(config.out_dir.is_dir());
    }
}
