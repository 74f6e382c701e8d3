use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::constants::RUN_TIMESTAMP_FORMAT;

/// Immutable per-invocation state: output directories plus the run timestamp
/// that namespaces every file this run produces.
///
/// Constructed once in `main` and passed by reference into every coordinator,
/// so two runs started in different seconds can never clobber each other's
/// output.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub evidence_dir: PathBuf,
    pub reports_dir: PathBuf,
    pub timestamp: String,
}

impl RunContext {
    /// Create a context stamped with the current time, ensuring both output
    /// directories exist.
    pub fn create(evidence_dir: PathBuf, reports_dir: PathBuf) -> Result<Self> {
        let timestamp = Utc::now().format(RUN_TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(evidence_dir, reports_dir, timestamp)
    }

    /// Create a context with an explicit timestamp. Used by tests that need
    /// deterministic file names.
    pub fn with_timestamp(
        evidence_dir: PathBuf,
        reports_dir: PathBuf,
        timestamp: String,
    ) -> Result<Self> {
        for dir in [&evidence_dir, &reports_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }

        Ok(RunContext {
            evidence_dir,
            reports_dir,
            timestamp,
        })
    }

    /// Path of a report file: `<reports>/<kind>_<image-stem>_<timestamp>[.ext]`.
    pub fn report_path(&self, kind: &str, image: &Path, extension: Option<&str>) -> PathBuf {
        let mut name = format!("{}_{}_{}", kind, image_stem(image), self.timestamp);
        if let Some(ext) = extension {
            name.push('.');
            name.push_str(ext);
        }
        self.reports_dir.join(name)
    }

    /// Default destination for an acquired image.
    pub fn default_image_path(&self) -> PathBuf {
        self.evidence_dir
            .join(format!("image_{}.dd", self.timestamp))
    }

    /// Default destination for a file extracted by inode.
    pub fn default_extract_path(&self, inode: u64) -> PathBuf {
        self.evidence_dir
            .join(format!("inode_{}_{}.bin", inode, self.timestamp))
    }
}

/// File stem of an image path, used to namespace its reports.
fn image_stem(image: &Path) -> String {
    image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| image.to_string_lossy().into_owned())
}
