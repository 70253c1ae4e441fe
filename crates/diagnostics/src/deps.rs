//! Dependency Size Analysis
//!
//! Enumerates resolved artifact files for one configuration, keeps those
//! strictly larger than 1 MB, and reports name and size, largest first.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::WalkDir;

use crate::{format_size, DiagnosticsError};

/// Artifacts at or below this many bytes are not reported (strict `>`)
pub const SIZE_THRESHOLD_BYTES: u64 = 1024 * 1024;

/// Artifact extensions that count as resolved dependencies
const ARTIFACT_EXTENSIONS: &[&str] = &["jar", "aar"];

/// One artifact over the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeavyArtifact {
    /// File name of the artifact
    pub name: String,
    /// Full path
    pub path: PathBuf,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Dependency size report for one configuration directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyReport {
    /// Artifacts strictly over the threshold, largest first
    pub heavy: Vec<HeavyArtifact>,
    /// Total number of artifacts examined
    pub examined: usize,
}

impl DependencyReport {
    /// Scan a directory of resolved artifacts (jars/aars).
    pub fn generate(artifact_dir: &Path) -> Result<Self, DiagnosticsError> {
        let mut report = Self::default();

        for entry in WalkDir::new(artifact_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let is_artifact = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| ARTIFACT_EXTENSIONS.contains(&e))
                .unwrap_or(false);
            if !is_artifact {
                continue;
            }

            report.examined += 1;
            let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);

            if size_bytes > SIZE_THRESHOLD_BYTES {
                report.heavy.push(HeavyArtifact {
                    name: entry.file_name().to_string_lossy().to_string(),
                    path: entry.path().to_path_buf(),
                    size_bytes,
                });
            }
        }

        report.heavy.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        debug!(
            "Examined {} artifacts, {} over threshold",
            report.examined,
            report.heavy.len()
        );

        Ok(report)
    }

    /// Render the report as display lines
    pub fn render(&self) -> Vec<String> {
        if self.heavy.is_empty() {
            return vec![format!(
                "No dependencies over {} ({} artifacts examined)",
                format_size(SIZE_THRESHOLD_BYTES),
                self.examined
            )];
        }

        let mut lines = vec![format!(
            "Large dependencies (> {}):",
            format_size(SIZE_THRESHOLD_BYTES)
        )];
        for artifact in &self.heavy {
            lines.push(format!(
                "  {} - {}",
                artifact.name,
                format_size(artifact.size_bytes)
            ));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, size: usize) {
        std::fs::write(dir.join(name), vec![0u8; size]).unwrap();
    }

    #[test]
    fn test_exactly_one_mb_is_excluded() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "exactly.jar", 1024 * 1024);

        let report = DependencyReport::generate(dir.path()).unwrap();
        assert_eq!(report.examined, 1);
        assert!(report.heavy.is_empty());
    }

    #[test]
    fn test_just_over_one_mb_is_included() {
        let dir = tempfile::tempdir().unwrap();
        // 1.01 MB
        write_file(dir.path(), "over.jar", 1024 * 1024 + 10486);

        let report = DependencyReport::generate(dir.path()).unwrap();
        assert_eq!(report.heavy.len(), 1);
        assert_eq!(report.heavy[0].name, "over.jar");
    }

    #[test]
    fn test_sorted_largest_first_and_non_artifacts_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "mid.jar", 2 * 1024 * 1024);
        write_file(dir.path(), "big.aar", 4 * 1024 * 1024);
        write_file(dir.path(), "notes.txt", 8 * 1024 * 1024);

        let report = DependencyReport::generate(dir.path()).unwrap();
        assert_eq!(report.examined, 2);
        let names: Vec<&str> = report.heavy.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["big.aar", "mid.jar"]);
    }

    #[test]
    fn test_empty_directory_renders_summary() {
        let dir = tempfile::tempdir().unwrap();
        let report = DependencyReport::generate(dir.path()).unwrap();
        let lines = report.render();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No dependencies over"));
    }
}
