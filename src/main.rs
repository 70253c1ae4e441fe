//! DroidForge - Build configuration and optimization pipeline
//!
//! Main entry point: initializes logging and dispatches the on-demand
//! diagnostic and configuration commands.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use droidforge::commands::{
    ApkCommand, BuildReportCommand, CacheCommand, DepsCommand, SecretsCommand, VariantsCommand,
};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "DroidForge";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("apk") => {
            let path = require_arg(&args, 1, "apk <path-to-apk>")?;
            ApkCommand { apk_path: path }.execute().await
        }
        Some("deps") => {
            let dir = require_arg(&args, 1, "deps <artifact-dir>")?;
            DepsCommand { artifact_dir: dir }.execute().await
        }
        Some("cache") => {
            let dir = args.get(1).map(PathBuf::from);
            CacheCommand { cache_dir: dir }.execute().await
        }
        Some("build-report") => BuildReportCommand.execute().await,
        Some("secrets") => {
            let dir = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            SecretsCommand { project_dir: dir }.execute().await
        }
        Some("variants") => VariantsCommand.execute().await,
        Some(other) => {
            print_usage();
            Err(anyhow::anyhow!("Unknown command: {}", other))
        }
        None => {
            print_usage();
            Ok(())
        }
    };

    if let Err(ref e) = result {
        error!("{}", e);
    }

    result
}

/// Fetch a required positional argument
fn require_arg(args: &[String], index: usize, usage: &str) -> Result<PathBuf> {
    args.get(index)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("Usage: droidforge {}", usage))
}

fn print_usage() {
    println!("{} v{}", APP_NAME, VERSION);
    println!();
    println!("Usage: droidforge <command>");
    println!();
    println!("Commands:");
    println!("  apk <path>            Analyze the built APK's size");
    println!("  deps <dir>            Report dependency artifacts over 1 MB");
    println!("  cache [dir]           Report Gradle build-cache size");
    println!("  build-report          Print the build performance note");
    println!("  secrets [project]     Resolve API keys from layered sources");
    println!("  variants              Show the build-variant flag matrix");
}
