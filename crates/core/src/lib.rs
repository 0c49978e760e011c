//! hparse-core: build orchestration for the hparse wasm module
//!
//! This crate provides configuration resolution, the docker build driver,
//! the native compiler driver, and companion asset assembly.

mod assets;
mod compile;
mod config;
mod docker;
mod error;
mod exec;
mod flags;
mod layout;
mod pipeline;

pub use assets::assemble;
pub use compile::compile;
pub use config::{ARTIFACT_NAME, BuildConfig, OUTPUT_ROOT_ENV, SOURCE_ROOT_ENV};
pub use docker::{IMAGE_TAG, build_image, run_containerized};
pub use error::CoreError;
pub use flags::toolchain_flags;
pub use layout::MemoryLayout;
pub use pipeline::{GENERATOR_ENV, ensure_output_dir, run_generator, run_local};

// Re-export the platform surface for convenience
pub use hparse_platform::{PLATFORM_ENV, Platform};

/// Result type for orchestration operations
pub type Result<T> = std::result::Result<T, CoreError>;
