//! DroidForge Build Engine
//!
//! Models the build-variant configuration pipeline: the debug/release flag
//! matrix, layered secret resolution into generated build constants, and the
//! test/lint suppression filter over the task graph.

pub mod secrets;
pub mod taskgraph;
pub mod variant;

pub use secrets::{ResolvedSecrets, SecretResolver, SecretSpec, MAPS_PLACEHOLDER_SENTINEL};
pub use taskgraph::{is_suppressed, Task, TaskGraph, SUPPRESSED_PATTERNS};
pub use variant::{BuildVariant, VariantFlags};

/// Build configuration errors
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),
}
