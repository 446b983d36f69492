//! Register (operand) definitions for the UE1 instruction set.
//!
//! The operand nibble selects one of 16 locations:
//!
//! ```text
//! 0-7    SR0-SR7   scratch registers (read and write)
//! 8      RR        result register (read) / OR0 (write)
//! 9-15   IR1-IR7   input registers (read) / OR1-OR7 (write)
//! ```
//!
//! Input select and output select share the same field, so `OR0`-`OR7`
//! are a second set of names for values 8-15. Which one an instruction
//! means depends on the opcode, never on the encoding.

use crate::error::DecodeError;

/// A 4-bit operand value, named after its input-side meaning.
///
/// The default is `SR0`, the operand used when a line names none.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Register {
    #[default]
    Sr0 = 0x0,
    Sr1 = 0x1,
    Sr2 = 0x2,
    Sr3 = 0x3,
    Sr4 = 0x4,
    Sr5 = 0x5,
    Sr6 = 0x6,
    Sr7 = 0x7,
    /// Result register. Also `OR0` when written.
    Rr = 0x8,
    Ir1 = 0x9,
    Ir2 = 0xA,
    Ir3 = 0xB,
    Ir4 = 0xC,
    Ir5 = 0xD,
    Ir6 = 0xE,
    Ir7 = 0xF,
}

/// All registers, in numeric order.
pub const ALL_REGISTERS: [Register; 16] = [
    Register::Sr0,
    Register::Sr1,
    Register::Sr2,
    Register::Sr3,
    Register::Sr4,
    Register::Sr5,
    Register::Sr6,
    Register::Sr7,
    Register::Rr,
    Register::Ir1,
    Register::Ir2,
    Register::Ir3,
    Register::Ir4,
    Register::Ir5,
    Register::Ir6,
    Register::Ir7,
];

impl TryFrom<u8> for Register {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_REGISTERS
            .get(usize::from(value))
            .copied()
            .ok_or(DecodeError::RegisterOutOfRange(value))
    }
}

impl Register {
    /// The 4-bit operand value.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the input-side mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Register::Sr0 => "SR0",
            Register::Sr1 => "SR1",
            Register::Sr2 => "SR2",
            Register::Sr3 => "SR3",
            Register::Sr4 => "SR4",
            Register::Sr5 => "SR5",
            Register::Sr6 => "SR6",
            Register::Sr7 => "SR7",
            Register::Rr => "RR",
            Register::Ir1 => "IR1",
            Register::Ir2 => "IR2",
            Register::Ir3 => "IR3",
            Register::Ir4 => "IR4",
            Register::Ir5 => "IR5",
            Register::Ir6 => "IR6",
            Register::Ir7 => "IR7",
        }
    }

    /// Returns the output-side mnemonic for values 8-15.
    ///
    /// Scratch registers have no separate output name.
    pub fn output_mnemonic(self) -> Option<&'static str> {
        let name = match self {
            Register::Rr => "OR0",
            Register::Ir1 => "OR1",
            Register::Ir2 => "OR2",
            Register::Ir3 => "OR3",
            Register::Ir4 => "OR4",
            Register::Ir5 => "OR5",
            Register::Ir6 => "OR6",
            Register::Ir7 => "OR7",
            _ => return None,
        };
        Some(name)
    }

    /// Look up an upper-case mnemonic from either naming family.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Register> {
        let register = match mnemonic {
            "SR0" => Register::Sr0,
            "SR1" => Register::Sr1,
            "SR2" => Register::Sr2,
            "SR3" => Register::Sr3,
            "SR4" => Register::Sr4,
            "SR5" => Register::Sr5,
            "SR6" => Register::Sr6,
            "SR7" => Register::Sr7,
            "RR" | "OR0" => Register::Rr,
            "IR1" | "OR1" => Register::Ir1,
            "IR2" | "OR2" => Register::Ir2,
            "IR3" | "OR3" => Register::Ir3,
            "IR4" | "OR4" => Register::Ir4,
            "IR5" | "OR5" => Register::Ir5,
            "IR6" | "OR6" => Register::Ir6,
            "IR7" | "OR7" => Register::Ir7,
            _ => return None,
        };
        Some(register)
    }

    /// Index into the scratch register file, for `SR0`-`SR7`.
    pub fn scratch_index(self) -> Option<usize> {
        let value = usize::from(self.value());
        (value < 8).then_some(value)
    }

    /// Index into the input or output port bank, for values 8-15.
    ///
    /// Value 8 maps to index 0, which is RR on the input side and `OR0`
    /// on the output side.
    pub fn port_index(self) -> Option<usize> {
        let value = usize::from(self.value());
        (value >= 8).then_some(value & 0x07)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_order() {
        for (i, &reg) in ALL_REGISTERS.iter().enumerate() {
            assert_eq!(usize::from(reg.value()), i);
            assert_eq!(Register::try_from(i as u8), Ok(reg));
        }
    }

    #[test]
    fn out_of_range_values_rejected() {
        assert_eq!(
            Register::try_from(16),
            Err(DecodeError::RegisterOutOfRange(16))
        );
    }

    #[test]
    fn default_is_sr0() {
        assert_eq!(Register::default(), Register::Sr0);
        assert_eq!(Register::default().value(), 0);
    }

    #[test]
    fn output_family_overlaps_rr_and_inputs() {
        for n in 0..8u8 {
            let out = Register::from_mnemonic(&format!("OR{n}")).unwrap();
            assert_eq!(out.value(), 8 + n);
        }
        assert_eq!(Register::from_mnemonic("OR0"), Register::from_mnemonic("RR"));
        assert_eq!(
            Register::from_mnemonic("OR7"),
            Register::from_mnemonic("IR7")
        );
    }

    #[test]
    fn twenty_four_mnemonics_resolve() {
        let families = ["SR", "IR", "OR"];
        let mut count = 0;
        for family in families {
            for n in 0..8 {
                if Register::from_mnemonic(&format!("{family}{n}")).is_some() {
                    count += 1;
                }
            }
        }
        if Register::from_mnemonic("RR").is_some() {
            count += 1;
        }
        // IR0 does not exist.
        assert_eq!(count, 24);
        assert_eq!(Register::from_mnemonic("IR0"), None);
    }

    #[test]
    fn mnemonics_roundtrip() {
        for &reg in &ALL_REGISTERS {
            assert_eq!(Register::from_mnemonic(reg.mnemonic()), Some(reg));
            if let Some(out) = reg.output_mnemonic() {
                assert_eq!(Register::from_mnemonic(out), Some(reg));
            }
        }
    }

    #[test]
    fn scratch_and_port_indices_partition_the_field() {
        for &reg in &ALL_REGISTERS {
            assert!(reg.scratch_index().is_some() != reg.port_index().is_some());
        }
        assert_eq!(Register::Sr5.scratch_index(), Some(5));
        assert_eq!(Register::Rr.port_index(), Some(0));
        assert_eq!(Register::Ir7.port_index(), Some(7));
    }
}
