//! Decode errors for UE1 nibble conversions.

use thiserror::Error;

/// Errors from converting a raw value into an opcode or register.
///
/// Both fields of an instruction byte are 4 bits wide, so these only occur
/// when a caller hands over a value that did not come from a nibble.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Opcode value does not fit in the 4-bit opcode field.
    #[error("opcode value out of range: {0:#04x} (must be 0x00-0x0f)")]
    OpcodeOutOfRange(u8),

    /// Register value does not fit in the 4-bit operand field.
    #[error("register value out of range: {0:#04x} (must be 0x00-0x0f)")]
    RegisterOutOfRange(u8),
}
