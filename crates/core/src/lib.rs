//! DroidForge Core - Shared types and configuration
//!
//! This crate provides the pieces every other DroidForge crate builds on:
//! the error type, project configuration, property-file layering, and the
//! dependency-declaration model.

pub mod config;
pub mod dependency;
pub mod error;
pub mod properties;

pub use config::ProjectConfig;
pub use dependency::{detect_conflicts, Coordinate, Declaration};
pub use error::{ForgeError, Result};
pub use properties::PropertyStack;

/// DroidForge version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "DroidForge";
