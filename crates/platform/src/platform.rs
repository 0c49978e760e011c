//! Target platform resolution

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::process::Command;
use tracing::debug;

use crate::error::PlatformError;

/// Environment variable that overrides platform detection.
///
/// When set, the container runtime is never queried.
pub const PLATFORM_ENV: &str = "HPARSE_PLATFORM";

/// Target platform identifier in container-runtime form (e.g. "linux/arm64")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    /// Parse a `<os>/<arch>` pair.
    ///
    /// Rejects anything that does not split into exactly two non-empty tokens.
    pub fn parse(s: &str) -> Result<Self, PlatformError> {
        let trimmed = s.trim();
        let mut parts = trimmed.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(os), Some(arch), None) if !os.is_empty() && !arch.is_empty() => Ok(Self {
                os: os.to_string(),
                arch: arch.to_string(),
            }),
            _ => Err(PlatformError::Malformed(trimmed.to_string())),
        }
    }

    /// Resolve the target platform.
    ///
    /// Resolution order:
    /// 1. The `HPARSE_PLATFORM` environment override.
    /// 2. The active container runtime (`docker info`).
    ///
    /// The runtime query is a hard requirement when reached: a build that
    /// needs a platform cannot proceed without one, so failures propagate.
    pub fn resolve() -> Result<Self, PlatformError> {
        if let Ok(value) = env::var(PLATFORM_ENV) {
            debug!(platform = %value, "using platform from {}", PLATFORM_ENV);
            return Self::parse(&value);
        }
        Self::query_runtime()
    }

    /// Ask the container runtime for its OS/architecture pair.
    fn query_runtime() -> Result<Self, PlatformError> {
        let output = Command::new("docker")
            .args(["info", "-f", "{{.OSType}}/{{.Architecture}}"])
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlatformError::Query(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!(reported = %stdout.trim(), "container runtime platform");
        Self::parse(&stdout)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
