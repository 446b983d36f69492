//! Runtime errors for the UE1 emulator.

use thiserror::Error;

/// Errors that stop a tape from running to completion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The tape holds no instructions.
    #[error("empty tape")]
    EmptyTape,

    /// The tape is longer than the emulated reader holds.
    #[error("tape of {len} instructions exceeds the maximum of {max}")]
    TapeTooLong { len: usize, max: usize },

    /// The run did not reach a final NOPF within the step budget.
    #[error("no halt after {limit} steps")]
    StepLimitExceeded { limit: u64 },
}
