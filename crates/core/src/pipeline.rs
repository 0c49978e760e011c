//! The local build pipeline
//!
//! Generate sources, compile, assemble: three synchronous steps in a
//! fixed order, each run to completion before the next starts. Any
//! failure aborts the remaining steps.

use std::env;
use std::fs;
use std::process::Command;

use tracing::info;

use crate::config::BuildConfig;
use crate::exec;
use crate::{CoreError, Result, assets, compile};

/// Environment override for the upstream source generator command.
pub const GENERATOR_ENV: &str = "HPARSE_GENERATOR";

/// Default generator invocation, run from the source root.
const DEFAULT_GENERATOR: &str = "npm run build";

/// Idempotent creation of the output directory.
///
/// An already-existing directory is success; any other creation failure
/// propagates.
pub fn ensure_output_dir(config: &BuildConfig) -> Result<()> {
    fs::create_dir_all(&config.output_root)?;
    Ok(())
}

/// Run the upstream generator that produces the C source tree.
///
/// The generator is an opaque external collaborator; only its exit
/// status matters here. Its command line is overridable through the
/// environment and split on whitespace.
pub fn run_generator(config: &BuildConfig) -> Result<()> {
    let raw = env::var(GENERATOR_ENV).unwrap_or_else(|_| DEFAULT_GENERATOR.to_string());
    let mut words = raw.split_whitespace();
    let Some(program) = words.next() else {
        return Err(CoreError::EmptyGenerator);
    };

    let mut cmd = Command::new(program);
    cmd.current_dir(&config.source_root).args(words);
    exec::run(cmd)
}

/// The full local pipeline, in its fixed order.
pub fn run_local(config: &BuildConfig) -> Result<()> {
    ensure_output_dir(config)?;
    run_generator(config)?;
    compile::compile(config)?;
    assets::assemble(config)?;
    info!(output = %config.output_root.display(), "build pipeline finished");
    Ok(())
}
