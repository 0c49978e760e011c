//! Error types for hparse-core

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during build orchestration
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Platform error: {0}")]
    Platform(#[from] hparse_platform::PlatformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{program}' failed (exit code {})", .code.unwrap_or(-1))]
    CommandFailed { program: String, code: Option<i32> },

    #[error("No platform resolved; set HPARSE_PLATFORM or start the container runtime")]
    PlatformUnresolved,

    #[error("No C sources found under {}", .0.display())]
    NoSources(PathBuf),

    #[error("Missing companion asset: {}", .0.display())]
    MissingAsset(PathBuf),

    #[error("Generator command is empty")]
    EmptyGenerator,
}

impl CoreError {
    /// Exit code for the orchestrator process.
    ///
    /// Failed external steps terminate the orchestrator with their own
    /// exit code; everything else maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::CommandFailed { code, .. } => code.unwrap_or(1),
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failures_propagate_child_exit_code() {
        let err = CoreError::CommandFailed {
            program: "docker".to_string(),
            code: Some(125),
        };
        assert_eq!(err.exit_code(), 125);
    }

    #[test]
    fn killed_children_map_to_one() {
        let err = CoreError::CommandFailed {
            program: "clang".to_string(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn other_errors_map_to_one() {
        let err = CoreError::NoSources(PathBuf::from("/tmp/src"));
        assert_eq!(err.exit_code(), 1);
    }
}
