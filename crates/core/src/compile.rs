//! Native compiler driver
//!
//! Invokes the wasi-targeting clang once over every generated and native
//! support source, producing the single wasm artifact.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::config::BuildConfig;
use crate::exec;
use crate::{CoreError, Result};

/// Compiler entry point; expected to be a wasi-enabled clang.
const COMPILER: &str = "clang";

/// Linker flags for the reactor export/import contract.
///
/// No entry point: the module is activated by its embedder. Undefined
/// symbols stay unresolved at link time; the embedder satisfies them at
/// instantiation.
const EXPORT_CONTRACT: &[&str] = &[
    "-Wl,--no-entry",
    "-Wl,--allow-undefined",
    "-Wl,--export-dynamic",
    "-Wl,--export-table",
    "-Wl,--export=malloc",
    "-Wl,--export=free",
];

/// Compile the wasm artifact.
///
/// The compiler writes to a scratch file inside the output directory and
/// the result is renamed onto the target filename only after a successful
/// exit, so a failed build never leaves a plausible-looking module behind.
pub fn compile(config: &BuildConfig) -> Result<()> {
    let mut sources = collect_sources(&config.generated_sources_dir())?;
    sources.extend(collect_sources(&config.native_sources_dir())?);
    if sources.is_empty() {
        return Err(CoreError::NoSources(config.source_root.clone()));
    }

    let scratch = tempfile::Builder::new()
        .prefix(".hparse-")
        .suffix(".wasm")
        .tempfile_in(&config.output_root)?;

    let mut cmd = Command::new(COMPILER);
    cmd.current_dir(&config.source_root)
        .args(&config.toolchain_flags)
        .args(EXPORT_CONTRACT)
        .arg("-I")
        .arg(config.include_dir())
        .args(&sources)
        .arg("-o")
        .arg(scratch.path());
    exec::run(cmd)?;

    let artifact = config.artifact_path();
    scratch
        .persist(&artifact)
        .map_err(|err| CoreError::Io(err.error))?;
    info!(artifact = %artifact.display(), "wrote wasm module");
    Ok(())
}

/// Collect `*.c` files from one directory, sorted so the compiler command
/// line is reproducible across filesystems.
fn collect_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "c") {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}
