//! UE1 command-line tools.
//!
//! - `ue1asm <input> <output>` assembles a source file to a raw binary and
//!   prints the opcode usage report.
//! - `ue1emu run <tape>` / `ue1emu disassemble <tape>` run or list a binary.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/assembly/output error
//! - 2: Usage error
//! - 3: Runtime error

pub mod commands;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Levels come from `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
