//! Implementation of the `hparse-build setup` mode.

use anyhow::{Context, Result};

use hparse_core::{BuildConfig, ensure_output_dir};

use crate::output;

/// Execute the setup mode.
///
/// Ensures the output base directory exists. Idempotent: an existing
/// directory is success, anything else is fatal.
pub fn cmd_setup(config: &BuildConfig) -> Result<()> {
  ensure_output_dir(config).context("Failed to create the output directory")?;
  output::print_success(&format!(
    "Output directory ready: {}",
    config.output_root.display()
  ));
  Ok(())
}
