//! Opcode definitions for the UE1 instruction set.
//!
//! The opcode occupies the high nibble of every instruction byte, so there
//! are exactly 16 of them. `HLT` is accepted as an alternative spelling of
//! `NOPF` and has no variant of its own.

use crate::error::DecodeError;

/// Identifies the operation to perform.
///
/// The `#[repr(u8)]` discriminant is the 4-bit opcode value.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// No operation, flag 0.
    Nop0 = 0x0,
    /// Load the selected input into RR.
    Ld = 0x1,
    /// Add the selected input and carry to RR.
    Add = 0x2,
    /// Subtract the selected input from RR, with carry.
    Sub = 0x3,
    /// Force RR to 1 and clear carry.
    One = 0x4,
    /// RR = NOT (RR AND input).
    Nand = 0x5,
    /// RR = RR OR input.
    Or = 0x6,
    /// RR = RR XOR input.
    Xor = 0x7,
    /// Store RR to the selected output.
    Sto = 0x8,
    /// Store the complement of RR to the selected output.
    Stoc = 0x9,
    /// Latch input enable from the selected input.
    Ien = 0xA,
    /// Latch output enable from the selected input.
    Oen = 0xB,
    /// Ring the bell.
    Ioc = 0xC,
    /// Skip the next instruction unconditionally.
    Rtn = 0xD,
    /// Skip the next instruction if RR is zero.
    Skz = 0xE,
    /// No operation, flag F. Written `HLT` when used to end a tape.
    Nopf = 0xF,
}

/// All opcodes, in declared (numeric) order.
pub const ALL_OPCODES: [Opcode; 16] = [
    Opcode::Nop0,
    Opcode::Ld,
    Opcode::Add,
    Opcode::Sub,
    Opcode::One,
    Opcode::Nand,
    Opcode::Or,
    Opcode::Xor,
    Opcode::Sto,
    Opcode::Stoc,
    Opcode::Ien,
    Opcode::Oen,
    Opcode::Ioc,
    Opcode::Rtn,
    Opcode::Skz,
    Opcode::Nopf,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_OPCODES
            .get(usize::from(value))
            .copied()
            .ok_or(DecodeError::OpcodeOutOfRange(value))
    }
}

impl Opcode {
    /// The 4-bit opcode value.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the canonical assembly mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop0 => "NOP0",
            Opcode::Ld => "LD",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::One => "ONE",
            Opcode::Nand => "NAND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Sto => "STO",
            Opcode::Stoc => "STOC",
            Opcode::Ien => "IEN",
            Opcode::Oen => "OEN",
            Opcode::Ioc => "IOC",
            Opcode::Rtn => "RTN",
            Opcode::Skz => "SKZ",
            Opcode::Nopf => "NOPF",
        }
    }

    /// Look up an upper-case mnemonic, including the `HLT` pseudo-opcode.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Opcode> {
        let opcode = match mnemonic {
            "NOP0" => Opcode::Nop0,
            "LD" => Opcode::Ld,
            "ADD" => Opcode::Add,
            "SUB" => Opcode::Sub,
            "ONE" => Opcode::One,
            "NAND" => Opcode::Nand,
            "OR" => Opcode::Or,
            "XOR" => Opcode::Xor,
            "STO" => Opcode::Sto,
            "STOC" => Opcode::Stoc,
            "IEN" => Opcode::Ien,
            "OEN" => Opcode::Oen,
            "IOC" => Opcode::Ioc,
            "RTN" => Opcode::Rtn,
            "SKZ" => Opcode::Skz,
            "NOPF" | "HLT" => Opcode::Nopf,
            _ => return None,
        };
        Some(opcode)
    }

    /// True for opcodes whose operand names a write target (`STO`, `STOC`).
    ///
    /// Operand values 8-15 select an output register for these and an
    /// input (or RR) for everything else.
    pub fn writes_output(self) -> bool {
        matches!(self, Opcode::Sto | Opcode::Stoc)
    }
}
