//! Error types for hparse-platform

use thiserror::Error;

/// Errors that can occur in platform operations
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Malformed platform string '{0}', expected <os>/<arch>")]
    Malformed(String),

    #[error("Failed to query container runtime: {0}")]
    Query(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
