//! Build configuration resolution

use std::env;
use std::path::PathBuf;

use tracing::debug;

use hparse_platform::Platform;

use crate::flags::toolchain_flags;
use crate::layout::MemoryLayout;
use crate::{CoreError, Result};

/// Environment override for the repository root.
pub const SOURCE_ROOT_ENV: &str = "HPARSE_SOURCE_ROOT";
/// Environment override for the artifact output directory.
pub const OUTPUT_ROOT_ENV: &str = "HPARSE_OUTPUT_ROOT";
/// Fixed filename of the produced wasm module.
pub const ARTIFACT_NAME: &str = "hparse.wasm";

/// Immutable per-invocation build configuration.
///
/// Resolved once at process start and passed by reference from there on;
/// nothing re-reads the environment after resolution.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Target platform; present whenever a mode argument was given.
    pub platform: Option<Platform>,
    /// Repository root holding generated and native support sources.
    pub source_root: PathBuf,
    /// Directory receiving the artifact and companion assets.
    pub output_root: PathBuf,
    /// Memory layout consumed by every flag-construction site.
    pub layout: MemoryLayout,
    /// Ordered toolchain flags shared by local and containerized builds.
    pub toolchain_flags: Vec<String>,
}

impl BuildConfig {
    /// Resolve the configuration from the environment and the invocation
    /// argument.
    ///
    /// Platform resolution only happens when a mode argument was given; a
    /// plain local build does not need one. When it does happen, the env
    /// override wins and the container runtime is only queried as a
    /// fallback; either source failing to produce a valid `<os>/<arch>`
    /// pair is fatal.
    pub fn resolve(mode: Option<&str>) -> Result<Self> {
        let platform = match mode {
            Some(_) => Some(Platform::resolve()?),
            None => None,
        };

        let source_root = match env::var_os(SOURCE_ROOT_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir()?,
        };
        let source_root = dunce::canonicalize(&source_root)?;

        let output_root = match env::var_os(OUTPUT_ROOT_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => source_root.join("build").join("wasm"),
        };

        let layout = MemoryLayout::DEFAULT;
        let config = Self {
            platform,
            source_root,
            output_root,
            layout,
            toolchain_flags: toolchain_flags(&layout),
        };

        debug!(
            platform = ?config.platform,
            source_root = %config.source_root.display(),
            output_root = %config.output_root.display(),
            flags = %config.toolchain_flags.join(" "),
            "resolved build configuration"
        );
        Ok(config)
    }

    /// The platform, required by the docker-backed modes.
    pub fn require_platform(&self) -> Result<&Platform> {
        self.platform.as_ref().ok_or(CoreError::PlatformUnresolved)
    }

    /// Directory the upstream generator writes C sources into.
    pub fn generated_sources_dir(&self) -> PathBuf {
        self.source_root.join("build").join("c")
    }

    /// Include path for the generated headers.
    pub fn include_dir(&self) -> PathBuf {
        self.source_root.join("build")
    }

    /// Fixed native support sources within the repository.
    pub fn native_sources_dir(&self) -> PathBuf {
        self.source_root.join("src").join("native")
    }

    /// Generated-library directory holding the companion glue files.
    pub fn glue_dir(&self) -> PathBuf {
        self.source_root.join("lib").join("gen")
    }

    /// Full path of the wasm artifact.
    pub fn artifact_path(&self) -> PathBuf {
        self.output_root.join(ARTIFACT_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hparse_platform::PLATFORM_ENV;
    use std::ffi::OsStr;
    use tempfile::TempDir;

    fn with_roots<F: FnOnce(&TempDir)>(f: F) {
        let temp = TempDir::new().unwrap();
        temp_env::with_vars(
            [
                (SOURCE_ROOT_ENV, Some(temp.path().as_os_str())),
                (OUTPUT_ROOT_ENV, Some(temp.path().join("out").as_os_str())),
            ],
            || f(&temp),
        );
    }

    #[test]
    fn local_resolution_skips_platform() {
        with_roots(|_| {
            let config = BuildConfig::resolve(None).unwrap();
            assert!(config.platform.is_none());
            assert!(config.require_platform().is_err());
        });
    }

    #[test]
    fn mode_argument_triggers_platform_resolution() {
        let temp = TempDir::new().unwrap();
        temp_env::with_vars(
            [
                (SOURCE_ROOT_ENV, Some(temp.path().as_os_str())),
                (OUTPUT_ROOT_ENV, Some(temp.path().join("out").as_os_str())),
                (PLATFORM_ENV, Some(OsStr::new("linux/arm64"))),
            ],
            || {
                let config = BuildConfig::resolve(Some("setup")).unwrap();
                let platform = config.require_platform().unwrap();
                assert_eq!(platform.to_string(), "linux/arm64");
            },
        );
    }

    #[test]
    fn fixed_directories_hang_off_the_source_root() {
        with_roots(|temp| {
            let config = BuildConfig::resolve(None).unwrap();
            let root = dunce::canonicalize(temp.path()).unwrap();
            assert_eq!(config.generated_sources_dir(), root.join("build/c"));
            assert_eq!(config.native_sources_dir(), root.join("src/native"));
            assert_eq!(config.glue_dir(), root.join("lib/gen"));
            assert_eq!(config.include_dir(), root.join("build"));
            assert_eq!(config.artifact_path(), temp.path().join("out/hparse.wasm"));
        });
    }

    #[test]
    fn output_root_defaults_under_the_source_root() {
        let temp = TempDir::new().unwrap();
        temp_env::with_vars(
            [
                (SOURCE_ROOT_ENV, Some(temp.path().as_os_str())),
                (OUTPUT_ROOT_ENV, None),
            ],
            || {
                let config = BuildConfig::resolve(None).unwrap();
                let root = dunce::canonicalize(temp.path()).unwrap();
                assert_eq!(config.output_root, root.join("build/wasm"));
            },
        );
    }

    #[test]
    fn toolchain_flags_are_built_from_the_config_layout() {
        with_roots(|_| {
            let config = BuildConfig::resolve(None).unwrap();
            let joined = config.toolchain_flags.join(" ");
            assert!(joined.contains(&format!("--initial-memory={}", config.layout.linear_memory)));
            assert!(joined.contains(&format!("--max-memory={}", config.layout.linear_memory)));
            assert!(joined.contains(&format!("stack-size={}", config.layout.stack_size)));
        });
    }
}
