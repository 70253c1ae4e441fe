//! Build Cache Analysis
//!
//! Recursively sums file sizes under the shared Gradle cache directory and
//! warns when the cache grows past a fixed threshold.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::{format_size, DiagnosticsError};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Warn once the cache exceeds this many gigabytes
pub const WARN_THRESHOLD_GB: f64 = 5.0;

/// Cache size report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheReport {
    /// The directory that was scanned
    pub cache_dir: PathBuf,
    /// Whether the directory existed
    pub present: bool,
    /// Total bytes under the directory
    pub size_bytes: u64,
    /// Total size in gigabytes
    pub size_gb: f64,
    /// Number of files counted
    pub file_count: usize,
}

impl CacheReport {
    /// Default Gradle cache location (`~/.gradle/caches`)
    pub fn default_cache_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".gradle").join("caches"))
    }

    /// Scan a cache directory. An absent directory yields an empty report.
    pub fn generate(cache_dir: &Path) -> Result<Self, DiagnosticsError> {
        if !cache_dir.exists() {
            debug!("Cache directory absent: {:?}", cache_dir);
            return Ok(Self {
                cache_dir: cache_dir.to_path_buf(),
                present: false,
                size_bytes: 0,
                size_gb: 0.0,
                file_count: 0,
            });
        }

        let mut size_bytes = 0u64;
        let mut file_count = 0usize;

        for entry in WalkDir::new(cache_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if let Ok(metadata) = entry.metadata() {
                size_bytes += metadata.len();
                file_count += 1;
            }
        }

        let size_gb = size_bytes as f64 / BYTES_PER_GB;
        if size_gb > WARN_THRESHOLD_GB {
            warn!(
                "Gradle cache at {:?} is {:.2} GB, consider pruning",
                cache_dir, size_gb
            );
        }

        Ok(Self {
            cache_dir: cache_dir.to_path_buf(),
            present: true,
            size_bytes,
            size_gb,
            file_count,
        })
    }

    /// Whether the cache exceeds the warning threshold
    pub fn over_threshold(&self) -> bool {
        self.size_gb > WARN_THRESHOLD_GB
    }

    /// Render the report as display lines
    pub fn render(&self) -> Vec<String> {
        if !self.present {
            return vec![format!("No build cache at {:?}", self.cache_dir)];
        }

        let mut lines = vec![format!(
            "Build cache: {} across {} files ({:?})",
            format_size(self.size_bytes),
            self.file_count,
            self.cache_dir
        )];
        if self.over_threshold() {
            lines.push(format!(
                "Warning: cache exceeds {:.0} GB - consider cleaning old entries",
                WARN_THRESHOLD_GB
            ));
        }
        lines
    }
}
