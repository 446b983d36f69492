//! UE1 assembler: text to binary translation, and back.
//!
//! The assembler is a single forward pass: one source line becomes at most
//! one byte, with no labels, expressions or directives.
//!
//! # Usage
//!
//! ```
//! use ue1_assembler::{assemble, disassemble};
//!
//! let assembly = assemble("LD SR1\nADD SR2\nSTO RR\nHLT\n").unwrap();
//! assert_eq!(assembly.bytes(), vec![0x11, 0x22, 0x88, 0xF0]);
//! assert_eq!(assembly.histogram.total(), 4);
//!
//! let text = disassemble(&assembly.program);
//! assert_eq!(text, "LD SR1\nADD SR2\nSTO OR0\nNOPF SR0\n");
//! ```
//!
//! # Errors
//!
//! Assembly does not stop at the first bad line. Every line is checked and
//! all errors come back together; no program is produced unless there are
//! none.
//!
//! # Roundtrip Guarantee
//!
//! `assemble(disassemble(program)) == program` holds for all programs.

pub mod error;
pub mod histogram;
pub mod lexer;
pub mod listing;
pub mod session;

mod disassembler;
mod encoder;

pub use error::AsmError;
pub use histogram::Histogram;
pub use listing::ListingLine;
pub use session::{Assembly, AssemblerOptions, Session};

use lexer::SourceLine;
use ue1_common::Program;

/// Assemble text with default options (no listing).
pub fn assemble(text: &str) -> Result<Assembly, Vec<AsmError>> {
    assemble_with(text, AssemblerOptions::default())
}

/// Assemble text.
///
/// Returns every error found, in line order.
pub fn assemble_with(text: &str, options: AssemblerOptions) -> Result<Assembly, Vec<AsmError>> {
    let mut session = Session::new(options);
    for (idx, raw) in text.lines().enumerate() {
        session.feed(SourceLine::new(idx + 1, raw));
    }
    session.finish()
}

/// Disassemble a binary program into canonical assembly text.
///
/// One instruction per line, operand always written out, no comments.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ue1_common::{Instruction, Opcode, Register};

    #[test]
    fn assemble_minimal() {
        let assembly = assemble("LD SR1\nHLT\n").unwrap();
        let instrs = &assembly.program.instructions;
        assert_eq!(instrs.len(), 2);
        assert_eq!(instrs[0], Instruction::new(Opcode::Ld, Register::Sr1));
        assert_eq!(instrs[1], Instruction::new(Opcode::Nopf, Register::Sr0));
    }

    #[test]
    fn assemble_with_comments_and_blanks() {
        let text = "\
; Add two bits
LD SR1      ; first operand

ADD SR2
";
        let assembly = assemble(text).unwrap();
        assert_eq!(assembly.bytes(), vec![0x11, 0x22]);
    }

    #[test]
    fn crlf_line_endings() {
        let assembly = assemble("LD SR1\r\nHLT\r\n").unwrap();
        assert_eq!(assembly.bytes(), vec![0x11, 0xF0]);
    }

    #[test]
    fn only_skip_lines_produce_nothing() {
        let assembly = assemble("\n; nothing\n   \n\t; here\n").unwrap();
        assert!(assembly.bytes().is_empty());
        assert_eq!(assembly.histogram.report(), None);
    }

    #[test]
    fn empty_input() {
        let assembly = assemble("").unwrap();
        assert!(assembly.program.is_empty());
    }

    #[test]
    fn error_unknown_opcode() {
        let errors = assemble("FOO SR0\n").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], AsmError::UnknownOpcode { line: 1, .. }));
    }

    #[test]
    fn error_reports_correct_line() {
        let errors = assemble("HLT\n; comment\nFOOBAR\n").unwrap_err();
        assert!(matches!(errors[0], AsmError::UnknownOpcode { line: 3, .. }));
    }

    #[test]
    fn listing_enabled_through_options() {
        let assembly = assemble_with("LD SR1\n", AssemblerOptions { listing: true }).unwrap();
        assert_eq!(assembly.listing.len(), 1);
    }

    #[test]
    fn roundtrip_disassemble_then_assemble() {
        let original = Program::new(vec![
            Instruction::new(Opcode::One, Register::Sr0),
            Instruction::new(Opcode::Ien, Register::Rr),
            Instruction::new(Opcode::Oen, Register::Rr),
            Instruction::new(Opcode::Stoc, Register::Ir3),
            Instruction::new(Opcode::Nopf, Register::Sr0),
        ]);
        let text = disassemble(&original);
        let reassembled = assemble(&text).unwrap();
        assert_eq!(original, reassembled.program);
    }

    #[test]
    fn every_byte_roundtrips_through_text() {
        let bytes: Vec<u8> = (0..=255u8).collect();
        let program = Program::decode(&bytes);
        let reassembled = assemble(&disassemble(&program)).unwrap();
        assert_eq!(reassembled.bytes(), bytes);
    }
}
