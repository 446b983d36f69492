//! Error types for the UE1 assembler.

use thiserror::Error;

/// Errors produced while assembling one source line.
///
/// Every variant carries the 1-based line number, the trimmed line text and
/// the offending token, enough to find and fix the line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// An unrecognized opcode mnemonic was encountered.
    #[error("line {line}: unknown opcode '{token}' in \"{text}\"")]
    UnknownOpcode {
        line: usize,
        text: String,
        token: String,
    },

    /// An unrecognized register mnemonic was encountered.
    #[error("line {line}: unknown operand '{token}' in \"{text}\"")]
    UnknownOperand {
        line: usize,
        text: String,
        token: String,
    },

    /// A token appeared after the operand.
    #[error("line {line}: unexpected token '{token}' in \"{text}\"")]
    UnexpectedToken {
        line: usize,
        text: String,
        token: String,
    },
}

impl AsmError {
    /// The 1-based source line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            AsmError::UnknownOpcode { line, .. }
            | AsmError::UnknownOperand { line, .. }
            | AsmError::UnexpectedToken { line, .. } => *line,
        }
    }

    /// The token that could not be assembled.
    pub fn token(&self) -> &str {
        match self {
            AsmError::UnknownOpcode { token, .. }
            | AsmError::UnknownOperand { token, .. }
            | AsmError::UnexpectedToken { token, .. } => token,
        }
    }
}
