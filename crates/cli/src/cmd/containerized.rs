//! Implementation of the `hparse-build containerized` mode.

use anyhow::Result;

use hparse_core::{BuildConfig, run_containerized};

use crate::output;

/// Execute the containerized mode.
///
/// Runs the full pipeline inside the builder image with the output
/// directory bind-mounted, so artifacts land on the host owned by the
/// invoking user. The container's exit code becomes this process's exit
/// code on failure.
pub fn cmd_containerized(config: &BuildConfig) -> Result<()> {
  run_containerized(config)?;
  output::print_success("Containerized build finished");
  Ok(())
}
