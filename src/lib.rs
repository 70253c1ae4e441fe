//! DroidForge - Build configuration and optimization pipeline
//!
//! A CLI and library for configuring and analyzing Android Gradle builds:
//! layered secret resolution, the debug/release variant flag matrix,
//! task-graph suppression, and on-demand size diagnostics.
//!
//! ## Architecture
//!
//! DroidForge is organized into specialized crates:
//!
//! - `droidforge-core`: errors, project configuration, property layering,
//!   dependency declarations
//! - `droidforge-build-engine`: build variants, secret resolution,
//!   task-graph filtering
//! - `droidforge-diagnostics`: APK, dependency and cache size reports

#![warn(clippy::all)]

pub mod commands;

// Re-export main components for library usage
pub use droidforge_build_engine as build;
pub use droidforge_core as core;
pub use droidforge_diagnostics as diagnostics;

/// Prelude module for convenient imports
pub mod prelude {
    pub use droidforge_build_engine::{BuildVariant, SecretResolver, TaskGraph};
    pub use droidforge_core::{ProjectConfig, PropertyStack};
    pub use droidforge_diagnostics::{ApkSizeReport, CacheReport, DependencyReport};
}
