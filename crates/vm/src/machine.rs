//! UE1 processor state: latches, result register and the bit files.

use std::fmt;

use ue1_common::{Instruction, Opcode, Register};

/// Register and latch state of the one-bit processor.
///
/// Every register holds a single bit. All state starts cleared, including
/// the enable latches, so a tape must raise IEN and OEN before it can read
/// inputs or store results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Machine {
    /// Input enable. While clear, data reads as 0 for logic opcodes.
    pub ien: bool,
    /// Output enable. While clear, STO and STOC do nothing.
    pub oen: bool,
    /// Set when the next instruction is to be skipped.
    pub skip: bool,
    /// Result register.
    pub rr: bool,
    /// Carry out of the last ADD or SUB.
    pub carry: bool,
    /// Scratch registers SR0-SR7.
    pub sr: [bool; 8],
    /// Output registers OR0-OR7.
    pub or: [bool; 8],
    /// Input registers; index 0 is unused since value 8 reads RR.
    pub ir: [bool; 8],
}

impl Machine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the bit an operand selects on the input side.
    pub fn read(&self, register: Register) -> bool {
        if let Some(i) = register.scratch_index() {
            return self.sr[i];
        }
        match register {
            Register::Rr => self.rr,
            _ => register.port_index().is_some_and(|i| self.ir[i]),
        }
    }

    /// Write the bit an operand selects on the output side.
    pub fn write(&mut self, register: Register, value: bool) {
        if let Some(i) = register.scratch_index() {
            self.sr[i] = value;
        } else if let Some(i) = register.port_index() {
            self.or[i] = value;
        }
    }

    /// Load IR1-IR7 from bits 0-6 of `bits`.
    pub fn set_inputs(&mut self, bits: u8) {
        for i in 1..8 {
            self.ir[i] = (bits >> (i - 1)) & 1 != 0;
        }
    }

    /// Carry out one instruction, given the bit its operand reads.
    ///
    /// NOPF is a no-op here; input requests and halting belong to the
    /// tape loop.
    pub fn apply(&mut self, instr: Instruction, data_in: bool) {
        let gated = data_in && self.ien;
        match instr.opcode {
            Opcode::Nop0 | Opcode::Ioc | Opcode::Nopf => {}
            Opcode::Ld => self.rr = gated,
            Opcode::Add => self.add(gated),
            Opcode::Sub => self.add(!gated),
            Opcode::One => {
                self.rr = true;
                self.carry = false;
            }
            Opcode::Nand => self.rr = !(self.rr && gated),
            Opcode::Or => self.rr |= gated,
            Opcode::Xor => self.rr ^= gated,
            Opcode::Sto => {
                if self.oen {
                    self.write(instr.register, self.rr);
                }
            }
            Opcode::Stoc => {
                if self.oen {
                    self.write(instr.register, !self.rr);
                }
            }
            Opcode::Ien => self.ien = data_in,
            Opcode::Oen => self.oen = data_in,
            Opcode::Rtn => self.skip = true,
            Opcode::Skz => self.skip = !self.rr,
        }
    }

    fn add(&mut self, operand: bool) {
        let sum = u8::from(self.rr) + u8::from(operand) + u8::from(self.carry);
        self.rr = sum & 1 != 0;
        self.carry = sum & 2 != 0;
    }

    /// SR7-SR0 in the high byte, OR7-OR0 in the low byte.
    pub fn output_word(&self) -> u16 {
        let pack = |bits: &[bool; 8]| {
            bits.iter()
                .rev()
                .fold(0u16, |acc, &bit| (acc << 1) | u16::from(bit))
        };
        (pack(&self.sr) << 8) | pack(&self.or)
    }
}

impl fmt::Display for Machine {
    /// Output word as four groups of four bits, most significant first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.output_word();
        write!(
            f,
            "{:04b} {:04b} {:04b} {:04b}",
            (word >> 12) & 0xF,
            (word >> 8) & 0xF,
            (word >> 4) & 0xF,
            word & 0xF
        )
    }
}
