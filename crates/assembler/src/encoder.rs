//! Resolve the fields of one line into an instruction.

use crate::error::AsmError;
use crate::lexer::{Fields, SourceLine};
use ue1_common::{Instruction, Opcode, Register};

/// Resolve an opcode token, matching case-insensitively.
fn lookup_opcode(token: &str) -> Option<Opcode> {
    Opcode::from_mnemonic(&token.to_uppercase())
}

/// Resolve an operand token from either register family.
fn lookup_register(token: &str) -> Option<Register> {
    Register::from_mnemonic(&token.to_uppercase())
}

/// Encode the fields of a decoded line.
///
/// A missing operand selects `SR0`. A third field is rejected.
pub(crate) fn encode_line(
    fields: &Fields<'_>,
    line: &SourceLine<'_>,
) -> Result<Instruction, AsmError> {
    let opcode = lookup_opcode(fields.opcode).ok_or_else(|| AsmError::UnknownOpcode {
        line: line.number,
        text: line.text.to_string(),
        token: fields.opcode.to_string(),
    })?;

    let register = match fields.operand {
        Some(token) => lookup_register(token).ok_or_else(|| AsmError::UnknownOperand {
            line: line.number,
            text: line.text.to_string(),
            token: token.to_string(),
        })?,
        None => Register::default(),
    };

    expect_end(fields, line)?;

    Ok(Instruction::new(opcode, register))
}

fn expect_end(fields: &Fields<'_>, line: &SourceLine<'_>) -> Result<(), AsmError> {
    match fields.extra {
        Some(token) => Err(AsmError::UnexpectedToken {
            line: line.number,
            text: line.text.to_string(),
            token: token.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{classify, LineKind};

    fn encode(raw: &str) -> Result<u8, AsmError> {
        let line = SourceLine::new(1, raw);
        match classify(&line) {
            LineKind::Decoded(fields) => encode_line(&fields, &line).map(|i| i.encode()),
            LineKind::Skip => panic!("line was skipped: {raw:?}"),
        }
    }

    #[test]
    fn opcode_and_operand() {
        assert_eq!(encode("LD SR1"), Ok(0x11));
        assert_eq!(encode("ADD SR2"), Ok(0x22));
        assert_eq!(encode("IEN IR7"), Ok(0xAF));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(encode("ld sr1"), Ok(0x11));
        assert_eq!(encode("LD SR1"), Ok(0x11));
        assert_eq!(encode("Ld Sr1"), Ok(0x11));
    }

    #[test]
    fn missing_operand_defaults_to_sr0() {
        assert_eq!(encode("LD"), encode("LD SR0"));
        assert_eq!(encode("LD"), Ok(0x10));
    }

    #[test]
    fn hlt_matches_nopf() {
        assert_eq!(encode("HLT"), Ok(0xF0));
        assert_eq!(encode("NOPF"), Ok(0xF0));
        assert_eq!(encode("hlt ir2"), encode("NOPF IR2"));
    }

    #[test]
    fn rr_and_or0_share_a_value() {
        assert_eq!(encode("STO RR"), Ok(0x88));
        assert_eq!(encode("STO OR0"), Ok(0x88));
    }

    #[test]
    fn output_family_overlaps_inputs() {
        for n in 1..8 {
            assert_eq!(encode(&format!("OR IR{n}")), encode(&format!("OR OR{n}")));
        }
    }

    #[test]
    fn unknown_opcode() {
        let err = encode("FOO SR0").unwrap_err();
        assert_eq!(
            err,
            AsmError::UnknownOpcode {
                line: 1,
                text: "FOO SR0".to_string(),
                token: "FOO".to_string(),
            }
        );
    }

    #[test]
    fn unknown_operand_keeps_written_case() {
        let err = encode("  sto xr1 ; bad  ").unwrap_err();
        assert_eq!(
            err,
            AsmError::UnknownOperand {
                line: 1,
                text: "sto xr1 ; bad".to_string(),
                token: "xr1".to_string(),
            }
        );
    }

    #[test]
    fn ir0_is_not_a_register() {
        assert!(matches!(
            encode("LD IR0"),
            Err(AsmError::UnknownOperand { .. })
        ));
    }

    #[test]
    fn trailing_token_rejected() {
        let err = encode("LD SR1 SR2").unwrap_err();
        assert!(matches!(err, AsmError::UnexpectedToken { ref token, .. } if token == "SR2"));
    }

    #[test]
    fn unknown_opcode_reported_before_operand() {
        assert!(matches!(
            encode("FOO BAR"),
            Err(AsmError::UnknownOpcode { .. })
        ));
    }
}
