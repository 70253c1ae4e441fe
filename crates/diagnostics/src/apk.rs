//! APK Size Analysis
//!
//! Reads the built artifact's byte length, classifies it into one of four
//! ordered size tiers, and optionally breaks the archive down by content
//! category. A missing artifact is reported, not raised: producing the
//! release APK first is a precondition of this report.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use zip::ZipArchive;

use crate::{format_size, DiagnosticsError};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Ordered size tiers over [0, ∞) MB.
///
/// Boundaries at 25, 50 and 100 MB belong to the lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeTier {
    /// Up to 25 MB
    Lean,
    /// Over 25 MB, up to 50 MB
    Moderate,
    /// Over 50 MB, up to 100 MB
    Heavy,
    /// Over 100 MB
    Oversized,
}

impl SizeTier {
    /// Classify a size in megabytes. Exhaustive: every non-negative size
    /// maps to exactly one tier.
    pub fn classify(size_mb: f64) -> Self {
        if size_mb <= 25.0 {
            SizeTier::Lean
        } else if size_mb <= 50.0 {
            SizeTier::Moderate
        } else if size_mb <= 100.0 {
            SizeTier::Heavy
        } else {
            SizeTier::Oversized
        }
    }

    /// Fixed textual verdict for this tier
    pub fn verdict(&self) -> &'static str {
        match self {
            SizeTier::Lean => "Excellent! APK size is optimal",
            SizeTier::Moderate => "Good APK size",
            SizeTier::Heavy => "APK size is getting large - consider more optimization",
            SizeTier::Oversized => "APK is too large - aggressive optimization needed",
        }
    }
}

/// Result of the APK size analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ApkSizeReport {
    /// The artifact was not found; run the release build first
    Missing { path: PathBuf },
    /// The artifact was measured and classified
    Analyzed {
        path: PathBuf,
        size_bytes: u64,
        size_mb: f64,
        tier: SizeTier,
        breakdown: Option<ApkBreakdown>,
    },
}

impl ApkSizeReport {
    /// Analyze the artifact at `path`.
    pub fn generate(path: &Path) -> Result<Self, DiagnosticsError> {
        if !path.exists() {
            warn!("APK not found at {:?}", path);
            return Ok(ApkSizeReport::Missing {
                path: path.to_path_buf(),
            });
        }

        let size_bytes = std::fs::metadata(path)?.len();
        let size_mb = size_bytes as f64 / BYTES_PER_MB;
        let tier = SizeTier::classify(size_mb);
        debug!("APK {:?}: {} ({:?})", path, format_size(size_bytes), tier);

        // The breakdown is best-effort; an unreadable archive still yields
        // the size report.
        let breakdown = match ApkBreakdown::calculate(path) {
            Ok(b) => Some(b),
            Err(e) => {
                debug!("Skipping content breakdown: {}", e);
                None
            }
        };

        Ok(ApkSizeReport::Analyzed {
            path: path.to_path_buf(),
            size_bytes,
            size_mb,
            tier,
            breakdown,
        })
    }

    /// Render the report as display lines
    pub fn render(&self) -> Vec<String> {
        match self {
            ApkSizeReport::Missing { path } => vec![format!(
                "APK not found at {:?}. Run the release build first.",
                path
            )],
            ApkSizeReport::Analyzed {
                path,
                size_mb,
                tier,
                breakdown,
                ..
            } => {
                let mut lines = vec![
                    format!("APK: {:?}", path),
                    format!("Size: {:.2} MB", size_mb),
                    tier.verdict().to_string(),
                ];
                if let Some(breakdown) = breakdown {
                    lines.push("Contents:".to_string());
                    for (label, pct) in breakdown.percentages() {
                        lines.push(format!("  {:<12} {:>5.1}%", label, pct));
                    }
                }
                lines
            }
        }
    }
}

/// APK content breakdown by category (compressed sizes)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApkBreakdown {
    pub dex: u64,
    pub resources: u64,
    pub native_libs: u64,
    pub assets: u64,
    pub other: u64,
    pub total: u64,
}

impl ApkBreakdown {
    /// Walk the archive and bucket every entry
    pub fn calculate(path: &Path) -> Result<Self, DiagnosticsError> {
        let file = std::fs::File::open(path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| DiagnosticsError::InvalidArchive(e.to_string()))?;

        let mut breakdown = Self::default();

        for i in 0..archive.len() {
            if let Ok(entry) = archive.by_index(i) {
                let name = entry.name().to_string();
                let size = entry.compressed_size();

                if name.ends_with(".dex") {
                    breakdown.dex += size;
                } else if name.starts_with("res/") || name == "resources.arsc" {
                    breakdown.resources += size;
                } else if name.starts_with("lib/") {
                    breakdown.native_libs += size;
                } else if name.starts_with("assets/") {
                    breakdown.assets += size;
                } else {
                    breakdown.other += size;
                }

                breakdown.total += size;
            }
        }

        Ok(breakdown)
    }

    /// Category percentages of the total
    pub fn percentages(&self) -> Vec<(&'static str, f64)> {
        let total = self.total as f64;
        if total == 0.0 {
            return Vec::new();
        }

        vec![
            ("DEX", self.dex as f64 / total * 100.0),
            ("Resources", self.resources as f64 / total * 100.0),
            ("Native Libs", self.native_libs as f64 / total * 100.0),
            ("Assets", self.assets as f64 / total * 100.0),
            ("Other", self.other as f64 / total * 100.0),
        ]
    }
}
