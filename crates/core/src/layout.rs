//! Linear memory layout of the wasm module

const MIB: u64 = 1024 * 1024;

/// Memory layout baked into the artifact.
///
/// Every flag that sizes or positions the module's linear memory derives
/// from this struct, so the flag sequence and the compiler invocation
/// cannot drift apart. The layout is fixed: the artifact must be a
/// drop-in replacement across builds and host platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    /// Initial and maximum linear memory size in bytes.
    pub linear_memory: u64,
    /// Shadow stack size in bytes; the stack sits first in the address space.
    pub stack_size: u64,
    /// Address where linker-assigned globals begin.
    pub global_base: u64,
}

impl MemoryLayout {
    /// Layout shared by every build of the module.
    pub const DEFAULT: Self = Self {
        linear_memory: 16 * MIB,
        stack_size: 2 * MIB,
        global_base: 4 * MIB,
    };

    /// Linker flags fixing the memory layout.
    ///
    /// The module imports its memory, so initial/max constrain the
    /// host-provided memory rather than defining one here.
    pub fn link_flags(&self) -> Vec<String> {
        vec![
            "-Wl,--import-memory".to_string(),
            format!("-Wl,--initial-memory={}", self.linear_memory),
            format!("-Wl,--max-memory={}", self.linear_memory),
            format!("-Wl,-z,stack-size={}", self.stack_size),
            "-Wl,--stack-first".to_string(),
            format!("-Wl,--global-base={}", self.global_base),
        ]
    }
}
