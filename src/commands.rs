//! CLI commands for DroidForge
//!
//! Provides command-line interface functionality for automation and
//! scripting. Every command is an on-demand, read-only report; none of
//! them is part of any default build flow.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

/// APK size analysis
pub struct ApkCommand {
    pub apk_path: PathBuf,
}

impl ApkCommand {
    /// Execute the APK size report
    pub async fn execute(&self) -> Result<()> {
        use droidforge_diagnostics::ApkSizeReport;

        info!("Analyzing APK: {:?}", self.apk_path);
        let report = ApkSizeReport::generate(&self.apk_path)?;
        for line in report.render() {
            println!("{}", line);
        }

        Ok(())
    }
}

/// Dependency size analysis
pub struct DepsCommand {
    pub artifact_dir: PathBuf,
}

impl DepsCommand {
    /// Execute the dependency size report
    pub async fn execute(&self) -> Result<()> {
        use droidforge_diagnostics::DependencyReport;

        info!("Scanning artifacts under {:?}", self.artifact_dir);
        let report = DependencyReport::generate(&self.artifact_dir)?;
        for line in report.render() {
            println!("{}", line);
        }

        Ok(())
    }
}

/// Build cache analysis
pub struct CacheCommand {
    pub cache_dir: Option<PathBuf>,
}

impl CacheCommand {
    /// Execute the cache size report
    pub async fn execute(&self) -> Result<()> {
        use droidforge_diagnostics::CacheReport;

        let cache_dir = match &self.cache_dir {
            Some(dir) => dir.clone(),
            None => CacheReport::default_cache_dir()
                .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        };

        let report = CacheReport::generate(&cache_dir)?;
        for line in report.render() {
            println!("{}", line);
        }

        Ok(())
    }
}

/// Build performance note
pub struct BuildReportCommand;

impl BuildReportCommand {
    /// Execute the build-time report
    pub async fn execute(&self) -> Result<()> {
        use droidforge_diagnostics::BuildTimeReport;

        for line in BuildTimeReport::generate().render() {
            println!("{}", line);
        }

        Ok(())
    }
}

/// Secret resolution display
pub struct SecretsCommand {
    pub project_dir: PathBuf,
}

impl SecretsCommand {
    /// Resolve secrets and show the generated constants and manifest
    /// placeholders, masked.
    pub async fn execute(&self) -> Result<()> {
        use droidforge_build_engine::secrets::{mask, MAPS_PLACEHOLDER_SENTINEL};
        use droidforge_build_engine::SecretResolver;
        use droidforge_core::ProjectConfig;

        let config = ProjectConfig::load(&self.project_dir).await?;
        info!("Resolving secrets for {}", config.app.application_id);

        let resolver = SecretResolver::from_project_dir(&self.project_dir)?;
        let secrets = resolver.resolve_all();

        println!("Generated build constants:");
        for (name, value) in secrets.build_config_fields() {
            println!("  {} = {}", name, mask(value));
        }

        println!("Manifest placeholders:");
        for (name, value) in secrets.manifest_placeholders() {
            // The sentinel is the fail-loud marker; show it verbatim
            if value == MAPS_PLACEHOLDER_SENTINEL {
                println!("  {} = {}", name, value);
            } else {
                println!("  {} = {}", name, mask(&value));
            }
        }

        Ok(())
    }
}

/// Variant flag matrix display
pub struct VariantsCommand;

impl VariantsCommand {
    /// Print the flag matrix for every build variant
    pub async fn execute(&self) -> Result<()> {
        use droidforge_build_engine::BuildVariant;

        for variant in BuildVariant::all() {
            let flags = variant.flags();
            println!("{}:", variant.as_str());
            println!("  minify:          {}", flags.minify_enabled);
            println!("  shrinkResources: {}", flags.shrink_resources);
            println!("  debuggable:      {}", flags.debuggable);
            println!("  pseudoLocales:   {}", flags.pseudo_locales_enabled);
            println!("  crunchPngs:      {}", flags.crunch_pngs);
            println!("  crashlytics:     {}", flags.crashlytics_enabled);
            println!("  proguardFiles:   {}", flags.proguard_files().join(", "));
        }

        Ok(())
    }
}
