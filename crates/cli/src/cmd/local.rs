//! Implementation of the local (default) build mode.
//!
//! Runs the pipeline on the host: generate sources, compile the wasm
//! module, assemble companion assets. Any step's failure aborts the rest.

use std::time::Instant;

use anyhow::{Context, Result};

use hparse_core::{BuildConfig, run_local};

use crate::output::{self, format_duration};

/// Execute the local pipeline.
pub fn cmd_local(config: &BuildConfig) -> Result<()> {
  let start = Instant::now();
  output::print_info(&format!(
    "Building {} from {}",
    hparse_core::ARTIFACT_NAME,
    config.source_root.display()
  ));

  run_local(config).context("Build failed")?;

  output::print_success(&format!(
    "Built {} in {}",
    config.artifact_path().display(),
    format_duration(start.elapsed())
  ));
  Ok(())
}
