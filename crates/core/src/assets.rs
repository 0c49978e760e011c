//! Companion asset assembly
//!
//! The compiled module ships with a small set of runtime-glue files owned
//! by the upstream generator. They are copied byte-for-byte next to the
//! artifact, followed by a descriptor declaring the output directory's
//! module convention.

use std::fs;

use serde_json::json;
use tracing::info;

use crate::config::BuildConfig;
use crate::{CoreError, Result};

/// Logical glue assets; each ships as implementation, source map, and
/// type declarations.
const GLUE_ASSETS: &[&str] = &["constants", "utils"];
const GLUE_FORMS: &[&str] = &[".js", ".js.map", ".d.ts"];

/// Descriptor declaring the module convention of the output directory.
const DESCRIPTOR_NAME: &str = "package.json";

/// Copy the companion files into the output directory and write the
/// module-type descriptor.
///
/// Copies are fresh every run and preserve filenames; a missing source
/// file is fatal with the offending path named.
pub fn assemble(config: &BuildConfig) -> Result<()> {
    let glue_dir = config.glue_dir();
    for asset in GLUE_ASSETS {
        for form in GLUE_FORMS {
            let name = format!("{asset}{form}");
            let source = glue_dir.join(&name);
            if !source.is_file() {
                return Err(CoreError::MissingAsset(source));
            }
            fs::copy(&source, config.output_root.join(&name))?;
        }
    }
    write_descriptor(config)?;

    info!(
        assets = GLUE_ASSETS.len() * GLUE_FORMS.len(),
        output = %config.output_root.display(),
        "assembled companion assets"
    );
    Ok(())
}

/// The produced directory is consumed as plain synchronous CommonJS.
fn write_descriptor(config: &BuildConfig) -> Result<()> {
    let descriptor = json!({ "type": "commonjs" });
    let body = serde_json::to_vec(&descriptor)?;
    fs::write(config.output_root.join(DESCRIPTOR_NAME), body)?;
    Ok(())
}
