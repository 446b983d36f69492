//! Disassembler: binary program → canonical assembly text.
//!
//! Output is flat text, one instruction per line, always with an explicit
//! operand. Stores name their target with the output family, so `0x88`
//! reads `STO OR0` and `0x18` reads `LD RR`.

use ue1_common::Program;

/// Disassemble a program into canonical assembly text.
///
/// The output is guaranteed to reassemble to an identical binary
/// (`assemble(disassemble(program)) == program`).
pub fn disassemble(program: &Program) -> String {
    let mut text = String::with_capacity(program.len() * 8);
    for instr in &program.instructions {
        text.push_str(instr.opcode.mnemonic());
        text.push(' ');
        text.push_str(instr.operand_mnemonic());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        assert_eq!(disassemble(&Program::default()), "");
    }

    #[test]
    fn canonical_names() {
        let program = Program::decode(&[0x11, 0x22, 0x88, 0xF0, 0x18, 0x9F]);
        assert_eq!(
            disassemble(&program),
            "LD SR1\nADD SR2\nSTO OR0\nNOPF SR0\nLD RR\nSTOC OR7\n"
        );
    }
}
