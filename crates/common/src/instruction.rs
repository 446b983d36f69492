//! Instruction encoding and decoding for the UE1 instruction set.
//!
//! Every instruction is exactly one byte:
//! ```text
//! Bits 7-4: opcode
//! Bits 3-0: operand (register select)
//! ```
//! Both fields cover their full 4-bit range, so every byte is a valid
//! instruction and decoding cannot fail.

use std::fmt;

use crate::opcode::{Opcode, ALL_OPCODES};
use crate::register::{Register, ALL_REGISTERS};

/// A single UE1 instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// The input or output selected by the operand nibble.
    pub register: Register,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, register: Register) -> Self {
        Self { opcode, register }
    }

    /// Encode this instruction to its byte: `opcode * 16 + register`.
    pub fn encode(&self) -> u8 {
        (self.opcode.value() << 4) | self.register.value()
    }

    /// Decode a byte into an instruction.
    pub fn decode(byte: u8) -> Self {
        Self {
            opcode: ALL_OPCODES[usize::from(byte >> 4)],
            register: ALL_REGISTERS[usize::from(byte & 0x0F)],
        }
    }

    /// The operand mnemonic as it reads for this opcode.
    ///
    /// Stores name their target with the output family (`OR0`-`OR7`);
    /// every other opcode reads from the input family.
    pub fn operand_mnemonic(&self) -> &'static str {
        if self.opcode.writes_output() {
            if let Some(name) = self.register.output_mnemonic() {
                return name;
            }
        }
        self.register.mnemonic()
    }
}

impl From<u8> for Instruction {
    fn from(byte: u8) -> Self {
        Instruction::decode(byte)
    }
}

impl From<Instruction> for u8 {
    fn from(instr: Instruction) -> Self {
        instr.encode()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode.mnemonic(), self.operand_mnemonic())
    }
}
