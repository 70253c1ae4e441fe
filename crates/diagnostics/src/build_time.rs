//! Build Performance Report
//!
//! Developer-facing note pointing at the build tool's own profiling. Kept
//! deliberately thin; the heavy lifting belongs to `--scan`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Build performance note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildTimeReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
}

impl BuildTimeReport {
    /// Create a report stamped with the current time
    pub fn generate() -> Self {
        Self {
            generated_at: Utc::now(),
        }
    }

    /// Render the report as display lines
    pub fn render(&self) -> Vec<String> {
        vec![
            format!(
                "Build performance report ({})",
                self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            "Build performance monitoring available".to_string(),
            "Use --scan flag for detailed build insights".to_string(),
        ]
    }
}
