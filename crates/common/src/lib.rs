//! UE1 common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the UE1
//! instruction set:
//!
//! - [`Opcode`]: the 16 opcodes, plus the `HLT` alias for `NOPF`
//! - [`Register`]: the 16 operand values and their two naming families
//! - [`Instruction`]: the one-byte instruction with encode/decode
//! - [`Program`]: a sequence of instructions
//! - [`DecodeError`]: errors from out-of-range nibble values
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;

// Re-export commonly used types at the crate root.
pub use error::DecodeError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;
pub use register::Register;

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy that generates a random Opcode.
    fn arb_opcode() -> impl Strategy<Value = Opcode> {
        prop::sample::select(&opcode::ALL_OPCODES[..])
    }

    /// Strategy that generates a random Register.
    fn arb_register() -> impl Strategy<Value = Register> {
        prop::sample::select(&register::ALL_REGISTERS[..])
    }

    /// Strategy that generates a random Instruction.
    fn arb_instruction() -> impl Strategy<Value = Instruction> {
        (arb_opcode(), arb_register()).prop_map(|(op, reg)| Instruction::new(op, reg))
    }

    proptest! {
        /// The high nibble is the opcode, the low nibble is the register.
        #[test]
        fn nibbles_identify_fields(instr in arb_instruction()) {
            let byte = instr.encode();
            prop_assert_eq!(Opcode::try_from(byte >> 4), Ok(instr.opcode));
            prop_assert_eq!(Register::try_from(byte & 0x0F), Ok(instr.register));
        }

        /// Program encode/decode roundtrip with random programs.
        #[test]
        fn program_roundtrip(
            instrs in prop::collection::vec(arb_instruction(), 0..64)
        ) {
            let program = Program::new(instrs);
            let bytes = program.encode();
            prop_assert_eq!(bytes.len(), program.len());
            prop_assert_eq!(Program::decode(&bytes), program);
        }
    }
}
