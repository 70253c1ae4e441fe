//! Project Configuration
//!
//! Manages the build pipeline settings that the Gradle scripts used to carry:
//! - Repository resolution order (shared across modules)
//! - Cross-module compiler defaults (Java/Kotlin)
//! - App module identity (namespace, SDK versions)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Config file name inside the project directory
pub const CONFIG_FILE_NAME: &str = "droidforge.toml";

/// An artifact repository, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repository {
    Google,
    MavenCentral,
    GradlePluginPortal,
}

impl Repository {
    pub fn as_str(&self) -> &'static str {
        match self {
            Repository::Google => "google",
            Repository::MavenCentral => "mavenCentral",
            Repository::GradlePluginPortal => "gradlePluginPortal",
        }
    }
}

/// Repository configuration shared by every module.
///
/// Subprojects must not declare their own repositories; resolution always
/// follows this ordered list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Resolution order for plugin and dependency lookup
    pub resolution_order: Vec<Repository>,
    /// Fail the build if a subproject declares its own repositories
    pub fail_on_project_repos: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            resolution_order: vec![
                Repository::Google,
                Repository::MavenCentral,
                Repository::GradlePluginPortal,
            ],
            fail_on_project_repos: true,
        }
    }
}

/// Compiler defaults applied to all modules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// JVM bytecode target for both javac and kotlinc
    pub jvm_target: String,
    /// Incremental Java compilation
    pub incremental: bool,
    /// Fork javac into its own process
    pub fork: bool,
    /// Extra javac arguments
    pub javac_args: Vec<String>,
    /// Extra Kotlin compiler arguments
    pub kotlin_args: Vec<String>,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            jvm_target: "11".to_string(),
            incremental: true,
            fork: true,
            javac_args: vec!["-Xlint:none".to_string(), "-nowarn".to_string()],
            kotlin_args: vec![
                "-Xopt-in=kotlin.RequiresOptIn".to_string(),
                "-Xjvm-default=all".to_string(),
                "-Xuse-k2".to_string(),
            ],
        }
    }
}

/// App module identity and SDK levels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppModuleConfig {
    /// Package namespace
    pub namespace: String,
    /// Application id (usually equal to the namespace)
    pub application_id: String,
    /// SDK the app compiles against
    pub compile_sdk: u32,
    /// Minimum supported SDK
    pub min_sdk: u32,
    /// SDK the app targets
    pub target_sdk: u32,
    /// Monotonic version code
    pub version_code: u32,
    /// Human-readable version name
    pub version_name: String,
}

impl Default for AppModuleConfig {
    fn default() -> Self {
        Self {
            namespace: "com.example.app".to_string(),
            application_id: "com.example.app".to_string(),
            compile_sdk: 35,
            min_sdk: 33,
            target_sdk: 35,
            version_code: 1,
            version_name: "1.0".to_string(),
        }
    }
}

/// Main project configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Repository settings
    #[serde(default)]
    pub repositories: RepositoryConfig,
    /// Compiler defaults
    #[serde(default)]
    pub compiler: CompilerConfig,
    /// App module settings
    #[serde(default)]
    pub app: AppModuleConfig,
}

impl ProjectConfig {
    /// Config file path for a project directory
    pub fn config_file(project_dir: &Path) -> PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the project directory, falling back to
    /// defaults when no file exists. Never writes; persisting defaults is
    /// an explicit `save` call.
    pub async fn load(project_dir: &Path) -> Result<Self> {
        let config_file = Self::config_file(project_dir);

        if config_file.exists() {
            debug!("Loading config from {:?}", config_file);
            let contents = tokio::fs::read_to_string(&config_file).await?;
            let config: ProjectConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(ProjectConfig::default())
        }
    }

    /// Save configuration to the project directory
    pub async fn save(&self, project_dir: &Path) -> Result<()> {
        let config_file = Self::config_file(project_dir);

        if let Some(parent) = config_file.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = toml::to_string_pretty(self)?;
        tokio::fs::write(&config_file, contents).await?;

        debug!("Config saved to {:?}", config_file);
        Ok(())
    }
}
