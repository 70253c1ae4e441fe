//! DroidForge Diagnostics
//!
//! On-demand, read-only reporting utilities: APK size classification,
//! dependency artifact sizes, Gradle cache usage, and the build-time note.
//! None of these affect build correctness.

pub mod apk;
pub mod build_time;
pub mod cache;
pub mod deps;

pub use apk::{ApkBreakdown, ApkSizeReport, SizeTier};
pub use build_time::BuildTimeReport;
pub use cache::CacheReport;
pub use deps::{DependencyReport, HeavyArtifact};

/// Diagnostics errors
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid archive: {0}")]
    InvalidArchive(String),
}

/// Render a byte count in human-readable units
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GB");
    }
}
