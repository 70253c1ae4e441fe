//! Build Variants
//!
//! The fixed debug/release enumeration and the static flag matrix each
//! variant carries. Selection happens at invocation time; there is no
//! runtime state.

use serde::{Deserialize, Serialize};

use crate::BuildError;

/// ProGuard rule files shared by every variant
pub const PROGUARD_FILES: &[&str] = &["proguard-android-optimize.txt", "proguard-rules.pro"];

/// Build variant (debug/release)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuildVariant {
    #[default]
    Debug,
    Release,
}

impl BuildVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "debug",
            BuildVariant::Release => "release",
        }
    }

    pub fn gradle_task_suffix(&self) -> &'static str {
        match self {
            BuildVariant::Debug => "Debug",
            BuildVariant::Release => "Release",
        }
    }

    /// Gradle assemble task for this variant (e.g. `assembleRelease`)
    pub fn assemble_task(&self) -> String {
        format!("assemble{}", self.gradle_task_suffix())
    }

    /// Parse a variant name
    pub fn parse(name: &str) -> Result<Self, BuildError> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildVariant::Debug),
            "release" => Ok(BuildVariant::Release),
            other => Err(BuildError::UnknownVariant(other.to_string())),
        }
    }

    /// All variants, in declaration order
    pub fn all() -> &'static [BuildVariant] {
        &[BuildVariant::Debug, BuildVariant::Release]
    }

    /// The flag set this variant carries
    pub fn flags(&self) -> VariantFlags {
        match self {
            BuildVariant::Debug => VariantFlags {
                minify_enabled: false,
                shrink_resources: false,
                debuggable: true,
                pseudo_locales_enabled: true,
                crunch_pngs: false,
                crashlytics_enabled: false,
            },
            BuildVariant::Release => VariantFlags {
                minify_enabled: true,
                shrink_resources: true,
                debuggable: false,
                pseudo_locales_enabled: false,
                crunch_pngs: true,
                crashlytics_enabled: true,
            },
        }
    }
}

/// The static flag set of one variant.
///
/// Direct lookup, no computation. Misconfiguration here surfaces only as a
/// larger or slower APK, never as a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantFlags {
    /// R8 code minification
    pub minify_enabled: bool,
    /// Resource shrinking (requires minification)
    pub shrink_resources: bool,
    /// Debuggable build
    pub debuggable: bool,
    /// Pseudo-locales for localization testing
    pub pseudo_locales_enabled: bool,
    /// Legacy PNG crunching
    pub crunch_pngs: bool,
    /// Crashlytics collection
    pub crashlytics_enabled: bool,
}

impl VariantFlags {
    /// ProGuard rule files (shared across variants)
    pub fn proguard_files(&self) -> &'static [&'static str] {
        PROGUARD_FILES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_flags() {
        let flags = BuildVariant::Debug.flags();
        assert!(!flags.minify_enabled);
        assert!(!flags.shrink_resources);
        assert!(flags.debuggable);
        assert!(flags.pseudo_locales_enabled);
        assert!(!flags.crashlytics_enabled);
    }

    #[test]
    fn test_release_flags() {
        let flags = BuildVariant::Release.flags();
        assert!(flags.minify_enabled);
        assert!(flags.shrink_resources);
        assert!(!flags.debuggable);
        assert!(flags.crunch_pngs);
        assert!(flags.crashlytics_enabled);
    }

    #[test]
    fn test_shrink_implies_minify() {
        // Resource shrinking without minification is rejected by AGP
        for variant in BuildVariant::all() {
            let flags = variant.flags();
            if flags.shrink_resources {
                assert!(flags.minify_enabled);
            }
        }
    }

    #[test]
    fn test_parse_and_task_names() {
        assert_eq!(BuildVariant::parse("Release").unwrap(), BuildVariant::Release);
        assert_eq!(BuildVariant::parse("debug").unwrap(), BuildVariant::Debug);
        assert_eq!(BuildVariant::Release.assemble_task(), "assembleRelease");
    }

    #[test]
    fn test_parse_unknown_variant_error() {
        let err = BuildVariant::parse("staging").unwrap_err();
        let BuildError::UnknownVariant(name) = err;
        assert_eq!(name, "staging");
    }

    #[test]
    fn test_proguard_files_shared() {
        assert_eq!(
            BuildVariant::Debug.flags().proguard_files(),
            BuildVariant::Release.flags().proguard_files()
        );
        assert!(PROGUARD_FILES.contains(&"proguard-rules.pro"));
    }
}
