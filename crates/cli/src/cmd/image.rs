//! Implementation of the `hparse-build image` mode.
//!
//! Builds the reproducible builder image for the resolved platform under
//! the fixed tag.

use anyhow::{Context, Result};

use hparse_core::{BuildConfig, IMAGE_TAG, build_image};

use crate::output;

/// Execute the image mode.
///
/// The exact docker command is printed before it runs so an operator can
/// replay it by hand; docker's own output streams through live.
pub fn cmd_image(config: &BuildConfig) -> Result<()> {
  build_image(config).context("Failed to build the builder image")?;
  output::print_success(&format!("Built image {IMAGE_TAG}"));
  Ok(())
}
