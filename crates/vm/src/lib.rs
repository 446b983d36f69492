//! UE1 emulator: runs assembled tapes on a model of the one-bit processor.
//!
//! The machine has:
//! - a one-bit result register (RR) and carry
//! - eight scratch bits (SR0-SR7), seven input bits (IR1-IR7) and eight
//!   output bits (OR0-OR7)
//! - input and output enable latches, and a skip flag
//!
//! # Usage
//!
//! ```
//! use ue1_common::Program;
//! use ue1_vm::{run, ScriptedInputs, StopReason};
//!
//! // ONE; IEN RR; OEN RR; STO OR0; NOPF
//! let program = Program::decode(&[0x40, 0xA8, 0xB8, 0x88, 0xF0]);
//! let outcome = run(&program, &mut ScriptedInputs::default()).unwrap();
//! assert_eq!(outcome.stop, StopReason::Halted);
//! assert!(outcome.machine.or[0]);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use execute::{InputSource, RunOutcome, ScriptedInputs, StopReason, Vm, VmConfig, MAX_TAPE};
pub use machine::Machine;

use ue1_common::Program;

/// Run a tape with the default step budget.
///
/// # Errors
///
/// Returns [`RuntimeError`] for an empty or oversized tape, or when no
/// halt is reached within the budget.
pub fn run(program: &Program, inputs: &mut dyn InputSource) -> Result<RunOutcome, RuntimeError> {
    run_with(program, inputs, VmConfig::default())
}

/// Run a tape with explicit limits.
pub fn run_with(
    program: &Program,
    inputs: &mut dyn InputSource,
    config: VmConfig,
) -> Result<RunOutcome, RuntimeError> {
    Vm::new(program, config).execute(inputs)
}
