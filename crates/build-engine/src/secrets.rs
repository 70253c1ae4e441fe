//! Secret Resolution
//!
//! Resolves API keys from layered property sources into generated build
//! constants and manifest placeholders. Lookup order per secret: primary
//! property key, then legacy key, then environment variable, then the empty
//! string. `secrets.properties` overlays `local.properties` per key.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use droidforge_core::{PropertyStack, Result};

/// Sentinel substituted into the manifest placeholder when the Maps key is
/// missing. Fail-loud: visibly distinguishable from a real key.
pub const MAPS_PLACEHOLDER_SENTINEL: &str = "YOUR_API_KEY_HERE";

/// Name of the Maps manifest placeholder
pub const MAPS_PLACEHOLDER_NAME: &str = "MAPS_API_KEY";

/// Lookup plan for a single secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretSpec {
    /// Generated build-constant name
    pub constant: &'static str,
    /// Primary property key
    pub primary_key: &'static str,
    /// Legacy/alternate property key
    pub legacy_key: &'static str,
    /// Environment-variable fallback
    pub env_var: &'static str,
}

/// The secrets the pipeline knows about
pub fn known_secrets() -> &'static [SecretSpec] {
    &[
        SecretSpec {
            constant: "OPENAI_API_KEY",
            primary_key: "openai.api.key",
            legacy_key: "OPENAI_API_KEY",
            env_var: "OPENAI_API_KEY",
        },
        SecretSpec {
            constant: "MAPS_API_KEY",
            primary_key: "maps.api.key",
            legacy_key: "MAPS_API_KEY",
            env_var: "MAPS_API_KEY",
        },
    ]
}

/// Resolves secrets against a property stack and a captured environment.
///
/// The environment is captured at construction (or injected by tests), so
/// resolution is deterministic for one resolver instance.
pub struct SecretResolver {
    stack: PropertyStack,
    env: HashMap<String, String>,
}

impl SecretResolver {
    /// Create a resolver over an existing property stack, capturing the
    /// current process environment.
    pub fn new(stack: PropertyStack) -> Self {
        Self {
            stack,
            env: std::env::vars().collect(),
        }
    }

    /// Load `local.properties` and `secrets.properties` from a project
    /// directory. Missing files are absent sources, not errors.
    pub fn from_project_dir(project_dir: &Path) -> Result<Self> {
        let stack = PropertyStack::from_project_dir(project_dir)?;
        Ok(Self::new(stack))
    }

    /// Replace the captured environment (test hook)
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = env;
        self
    }

    /// Resolve a single secret: primary key, legacy key, environment,
    /// then empty string.
    pub fn resolve(&self, spec: &SecretSpec) -> String {
        if let Some(value) = self.stack.get(spec.primary_key) {
            debug!("{} resolved from property '{}'", spec.constant, spec.primary_key);
            return value.to_string();
        }
        if let Some(value) = self.stack.get(spec.legacy_key) {
            debug!("{} resolved from legacy property '{}'", spec.constant, spec.legacy_key);
            return value.to_string();
        }
        if let Some(value) = self.env.get(spec.env_var) {
            debug!("{} resolved from environment", spec.constant);
            return value.clone();
        }
        debug!("{} not configured, defaulting to empty", spec.constant);
        String::new()
    }

    /// Resolve every known secret
    pub fn resolve_all(&self) -> ResolvedSecrets {
        let mut constants = Vec::new();
        for spec in known_secrets() {
            let value = self.resolve(spec);
            info!("{} = {}", spec.constant, mask(&value));
            constants.push((spec.constant.to_string(), value));
        }
        ResolvedSecrets { constants }
    }
}

/// The resolved secret values, ready for injection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedSecrets {
    /// Generated build constants, in declaration order
    constants: Vec<(String, String)>,
}

impl ResolvedSecrets {
    /// Look up one generated constant by name
    pub fn constant(&self, name: &str) -> Option<&str> {
        self.constants
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Generated string build constants (name, value)
    pub fn build_config_fields(&self) -> &[(String, String)] {
        &self.constants
    }

    /// Manifest placeholders. The Maps key falls back to the fail-loud
    /// sentinel when empty.
    pub fn manifest_placeholders(&self) -> HashMap<String, String> {
        let maps = self.constant("MAPS_API_KEY").unwrap_or("");
        let value = if maps.is_empty() {
            MAPS_PLACEHOLDER_SENTINEL.to_string()
        } else {
            maps.to_string()
        };

        let mut placeholders = HashMap::new();
        placeholders.insert(MAPS_PLACEHOLDER_NAME.to_string(), value);
        placeholders
    }
}

/// Mask a secret for log output
pub fn mask(value: &str) -> String {
    if value.is_empty() {
        "(empty)".to_string()
    } else if value.chars().count() <= 8 {
        "****".to_string()
    } else {
        let prefix: String = value.chars().take(4).collect();
        format!("{}****", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn openai_spec() -> &'static SecretSpec {
        &known_secrets()[0]
    }

    fn maps_spec() -> &'static SecretSpec {
        &known_secrets()[1]
    }

    fn write_props(dir: &Path, name: &str, lines: &[&str]) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        for line in lines {
            writeln!(f, "{}", line).unwrap();
        }
    }

    #[test]
    fn test_all_sources_absent_resolves_empty() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SecretResolver::from_project_dir(dir.path())
            .unwrap()
            .with_env(HashMap::new());

        let secrets = resolver.resolve_all();
        assert_eq!(secrets.constant("OPENAI_API_KEY"), Some(""));
        assert_eq!(secrets.constant("MAPS_API_KEY"), Some(""));

        let placeholders = secrets.manifest_placeholders();
        assert_eq!(
            placeholders.get(MAPS_PLACEHOLDER_NAME).map(String::as_str),
            Some(MAPS_PLACEHOLDER_SENTINEL)
        );
    }

    #[test]
    fn test_secrets_properties_wins_over_local() {
        let dir = tempfile::tempdir().unwrap();
        write_props(dir.path(), "local.properties", &["maps.api.key=from-local"]);
        write_props(dir.path(), "secrets.properties", &["maps.api.key=from-secrets"]);

        let resolver = SecretResolver::from_project_dir(dir.path())
            .unwrap()
            .with_env(HashMap::new());

        assert_eq!(resolver.resolve(maps_spec()), "from-secrets");
    }

    #[test]
    fn test_primary_key_beats_legacy_key() {
        let dir = tempfile::tempdir().unwrap();
        write_props(
            dir.path(),
            "local.properties",
            &["openai.api.key=primary", "OPENAI_API_KEY=legacy"],
        );

        let resolver = SecretResolver::from_project_dir(dir.path())
            .unwrap()
            .with_env(HashMap::new());

        assert_eq!(resolver.resolve(openai_spec()), "primary");
    }

    #[test]
    fn test_legacy_key_beats_environment() {
        let dir = tempfile::tempdir().unwrap();
        write_props(dir.path(), "local.properties", &["OPENAI_API_KEY=legacy"]);

        let mut env = HashMap::new();
        env.insert("OPENAI_API_KEY".to_string(), "from-env".to_string());

        let resolver = SecretResolver::from_project_dir(dir.path())
            .unwrap()
            .with_env(env);

        assert_eq!(resolver.resolve(openai_spec()), "legacy");
    }

    #[test]
    fn test_environment_fallback_scenario() {
        // Property files absent, OPENAI_API_KEY=sk-abc in the environment
        let dir = tempfile::tempdir().unwrap();

        let mut env = HashMap::new();
        env.insert("OPENAI_API_KEY".to_string(), "sk-abc".to_string());

        let resolver = SecretResolver::from_project_dir(dir.path())
            .unwrap()
            .with_env(env);

        let secrets = resolver.resolve_all();
        assert_eq!(secrets.constant("OPENAI_API_KEY"), Some("sk-abc"));
        assert_eq!(secrets.constant("MAPS_API_KEY"), Some(""));
        assert_eq!(
            secrets.manifest_placeholders().get(MAPS_PLACEHOLDER_NAME).map(String::as_str),
            Some(MAPS_PLACEHOLDER_SENTINEL)
        );
    }

    #[test]
    fn test_placeholder_uses_real_key_when_present() {
        let dir = tempfile::tempdir().unwrap();
        write_props(dir.path(), "secrets.properties", &["maps.api.key=AIzaRealKey12345"]);

        let resolver = SecretResolver::from_project_dir(dir.path())
            .unwrap()
            .with_env(HashMap::new());

        let secrets = resolver.resolve_all();
        assert_eq!(
            secrets.manifest_placeholders().get(MAPS_PLACEHOLDER_NAME).map(String::as_str),
            Some("AIzaRealKey12345")
        );
    }

    #[test]
    fn test_mask_never_reveals_full_value() {
        assert_eq!(mask(""), "(empty)");
        assert_eq!(mask("short"), "****");
        assert_eq!(mask("sk-abcdefghij"), "sk-a****");
    }
}
