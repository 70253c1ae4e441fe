//! Property File Handling
//!
//! Parses Java-style `key=value` property files (`local.properties`,
//! `secrets.properties`) and layers them into a single lookup store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::Result;

/// Parse the contents of a `.properties` file into key/value pairs.
///
/// Supports the subset of the Java properties format that Gradle secret
/// files actually use: `key=value` and `key: value` lines, `#`/`!` comments,
/// and surrounding whitespace. Later duplicates of a key win.
pub fn parse_properties(contents: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for raw_line in contents.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let split_at = line.find(['=', ':']);
        let Some(idx) = split_at else {
            debug!("Skipping malformed property line: {}", line);
            continue;
        };

        let key = line[..idx].trim();
        let value = line[idx + 1..].trim();
        if key.is_empty() {
            continue;
        }

        map.insert(key.to_string(), value.to_string());
    }

    map
}

/// A layered stack of property sources.
///
/// Files are loaded into one shared store in order, so a key defined by a
/// later file overwrites the same key from an earlier file while leaving
/// the earlier file's other keys intact. A missing file is an absent
/// source, never an error.
#[derive(Debug, Clone, Default)]
pub struct PropertyStack {
    values: HashMap<String, String>,
    loaded_files: Vec<PathBuf>,
}

impl PropertyStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay a property file onto the stack, if it exists.
    ///
    /// Returns whether the file was present and loaded.
    pub fn load_file(&mut self, path: &Path) -> Result<bool> {
        if !path.exists() {
            debug!("Property source absent: {:?}", path);
            return Ok(false);
        }

        let contents = std::fs::read_to_string(path)?;
        let parsed = parse_properties(&contents);
        debug!("Loaded {} properties from {:?}", parsed.len(), path);

        self.values.extend(parsed);
        self.loaded_files.push(path.to_path_buf());
        Ok(true)
    }

    /// Overlay already-parsed values (used by tests and programmatic setup)
    pub fn overlay(&mut self, values: HashMap<String, String>) {
        self.values.extend(values);
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of distinct keys currently visible
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Files that contributed to this stack, in load order
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    /// Load the conventional Gradle secret sources from a project directory:
    /// `local.properties` first, then `secrets.properties` on top.
    pub fn from_project_dir(project_dir: &Path) -> Result<Self> {
        let mut stack = Self::new();

        for name in ["local.properties", "secrets.properties"] {
            let path = project_dir.join(name);
            if !stack.load_file(&path)? && name == "local.properties" {
                warn!("No local.properties in {:?}", project_dir);
            }
        }

        Ok(stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_basic() {
        let map = parse_properties("foo=bar\nbaz = qux \n# comment\n! also comment\n\nempty=");
        assert_eq!(map.get("foo").map(String::as_str), Some("bar"));
        assert_eq!(map.get("baz").map(String::as_str), Some("qux"));
        assert_eq!(map.get("empty").map(String::as_str), Some(""));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_parse_colon_separator() {
        let map = parse_properties("maps.api.key: abc123");
        assert_eq!(map.get("maps.api.key").map(String::as_str), Some("abc123"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let map = parse_properties("key=first\nkey=second");
        assert_eq!(map.get("key").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_missing_file_is_absent_source() {
        let mut stack = PropertyStack::new();
        let loaded = stack
            .load_file(Path::new("/nonexistent/local.properties"))
            .unwrap();
        assert!(!loaded);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_layering_overwrites_per_key() {
        let dir = tempfile::tempdir().unwrap();

        let local = dir.path().join("local.properties");
        let mut f = std::fs::File::create(&local).unwrap();
        writeln!(f, "openai.api.key=local-openai").unwrap();
        writeln!(f, "maps.api.key=local-maps").unwrap();

        let secrets = dir.path().join("secrets.properties");
        let mut f = std::fs::File::create(&secrets).unwrap();
        writeln!(f, "maps.api.key=secret-maps").unwrap();

        let stack = PropertyStack::from_project_dir(dir.path()).unwrap();

        // secrets.properties wins only for the keys it defines
        assert_eq!(stack.get("maps.api.key"), Some("secret-maps"));
        assert_eq!(stack.get("openai.api.key"), Some("local-openai"));
        assert_eq!(stack.loaded_files().len(), 2);
    }
}
