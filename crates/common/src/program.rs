//! Program representation for UE1 instruction streams.
//!
//! A program is a sequence of one-byte instructions. Binary files are raw
//! concatenations of those bytes with no header, footer or padding.

use crate::instruction::Instruction;

/// A UE1 program: a sequence of instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Encode the entire program to bytes, one per instruction.
    pub fn encode(&self) -> Vec<u8> {
        self.instructions.iter().map(Instruction::encode).collect()
    }

    /// Decode a byte slice into a program.
    pub fn decode(bytes: &[u8]) -> Self {
        Self {
            instructions: bytes.iter().copied().map(Instruction::decode).collect(),
        }
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
