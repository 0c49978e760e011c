//! Toolchain flag construction
//!
//! One ordered flag sequence is built per invocation and reused by both
//! the local and the containerized compile path.

use crate::layout::MemoryLayout;

/// wasi sysroot location, as laid out in the builder image.
const SYSROOT: &str = "/usr/share/wasi-sysroot";

/// Baseline flags independent of the memory layout.
///
/// The module targets a minimal POSIX-like 32-bit runtime with no
/// exception unwinding. This is a hot-path parser, so optimization
/// deliberately trades build time and code size for speed: full LTO plus
/// an inlining threshold far above the default.
const BASE_FLAGS: &[&str] = &[
    "-target",
    "wasm32-unknown-wasi",
    "-Ofast",
    "-flto",
    "-fno-exceptions",
    "-fvisibility=hidden",
    "-mexec-model=reactor",
    "-msimd128",
    "-mbulk-memory",
    "-mmultivalue",
    "-mnontrapping-fptoint",
    "-msign-ext",
    "-mreference-types",
    "-mtail-call",
    "-mllvm",
    "-inline-threshold=1000",
    "-Wl,-error-limit=0",
    "-Wl,-O3",
    "-Wl,--lto-O3",
    "-Wl,--strip-all",
];

/// Construct the shared toolchain flag sequence.
///
/// Order: sysroot and target, optimization and codegen, hardware feature
/// baseline, linker optimization, then the memory layout.
pub fn toolchain_flags(layout: &MemoryLayout) -> Vec<String> {
    let mut flags = Vec::with_capacity(BASE_FLAGS.len() + 8);
    flags.push(format!("--sysroot={SYSROOT}"));
    flags.extend(BASE_FLAGS.iter().map(|f| f.to_string()));
    flags.extend(layout.link_flags());
    flags
}
