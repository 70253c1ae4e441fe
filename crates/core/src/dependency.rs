//! Dependency Declarations
//!
//! Models library coordinates (`group:artifact:version`) and checks the
//! no-duplicate invariant: within one configuration, two declarations must
//! not name the same artifact with different versions.

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

/// A resolved Maven-style coordinate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl Coordinate {
    /// Parse a `group:artifact:version` string
    pub fn parse(spec: &str) -> Result<Self> {
        let parts: Vec<&str> = spec.split(':').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
            return Err(ForgeError::Dependency(format!(
                "Invalid coordinate '{}', expected group:artifact:version",
                spec
            )));
        }

        Ok(Self {
            group: parts[0].to_string(),
            artifact: parts[1].to_string(),
            version: parts[2].to_string(),
        })
    }

    /// The version-less module key (`group:artifact`)
    pub fn module_key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// A declared dependency: logical name plus coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    /// Logical library name (e.g. "play-services-auth")
    pub name: String,
    /// Resolved coordinate
    pub coordinate: Coordinate,
}

impl Declaration {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

/// A conflict: one module declared with more than one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub module: String,
    pub versions: Vec<String>,
}

/// Detect duplicate artifact declarations across a configuration.
///
/// Two declarations of the same `group:artifact` with the same version are
/// harmless redundancy; differing versions are a conflict.
pub fn detect_conflicts(declarations: &[Declaration]) -> Vec<Conflict> {
    use std::collections::BTreeMap;

    let mut by_module: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for decl in declarations {
        let versions = by_module.entry(decl.coordinate.module_key()).or_default();
        if !versions.contains(&decl.coordinate.version) {
            versions.push(decl.coordinate.version.clone());
        }
    }

    by_module
        .into_iter()
        .filter(|(_, versions)| versions.len() > 1)
        .map(|(module, versions)| Conflict { module, versions })
        .collect()
}
