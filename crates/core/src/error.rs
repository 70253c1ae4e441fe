//! Error types for DroidForge
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for DroidForge
#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Properties error: {0}")]
    Properties(String),

    #[error("Dependency error: {0}")]
    Dependency(String),

    #[error("Build error: {0}")]
    Build(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for DroidForge operations
pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            ForgeError::Io(e) => format!("File operation failed: {}", e),
            ForgeError::Config(msg) => format!("Configuration error: {}", msg),
            ForgeError::Properties(msg) => format!("Property file issue: {}", msg),
            ForgeError::Dependency(msg) => format!("Dependency issue: {}", msg),
            ForgeError::Build(msg) => format!("Build configuration failed: {}", msg),
            ForgeError::NotFound(msg) => format!("Not found: {}", msg),
            _ => self.to_string(),
        }
    }
}
