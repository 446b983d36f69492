//! Assembly listing lines.
//!
//! ```text
//! 0000: 11        1       LD SR1
//!                 2       ; comment
//! 0001: 22        3       ADD SR2
//! ```

use std::fmt;

use crate::lexer::SourceLine;

/// One line of the listing, built from the source line it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingLine {
    /// A line that produced an instruction byte.
    Emitted {
        address: usize,
        byte: u8,
        line: usize,
        /// Trimmed source text.
        text: String,
    },
    /// A blank or comment-only line.
    Skipped {
        line: usize,
        /// Source text as read.
        raw: String,
    },
}

impl ListingLine {
    pub fn emitted(address: usize, byte: u8, source: &SourceLine<'_>) -> Self {
        ListingLine::Emitted {
            address,
            byte,
            line: source.number,
            text: source.text.to_string(),
        }
    }

    pub fn skipped(source: &SourceLine<'_>) -> Self {
        ListingLine::Skipped {
            line: source.number,
            raw: source.raw.to_string(),
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingLine::Emitted {
                address,
                byte,
                line,
                text,
            } => write!(f, "{address:04X}: {byte:02X}        {line:<8}{text}"),
            ListingLine::Skipped { line, raw } => write!(f, "{:16}{line:<8}{raw}", ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_line_format() {
        let source = SourceLine::new(1, "LD SR1");
        let line = ListingLine::emitted(0, 0x11, &source);
        assert_eq!(line.to_string(), "0000: 11        1       LD SR1");
    }

    #[test]
    fn emitted_line_uses_trimmed_text() {
        let source = SourceLine::new(12, "   sto or3   ; bit 3  ");
        let line = ListingLine::emitted(0x1A, 0x8B, &source);
        assert_eq!(line.to_string(), "001A: 8B        12      sto or3   ; bit 3");
    }

    #[test]
    fn skipped_line_has_blank_address_and_byte() {
        let source = SourceLine::new(2, "; multiply");
        let line = ListingLine::skipped(&source);
        assert_eq!(line.to_string(), "                2       ; multiply");
    }

    #[test]
    fn skipped_blank_line() {
        let source = SourceLine::new(3, "");
        assert_eq!(ListingLine::skipped(&source).to_string(), format!("{:16}3{:7}", "", ""));
    }

    #[test]
    fn wide_line_numbers_are_not_truncated() {
        let source = SourceLine::new(123456789, "NOP0");
        let line = ListingLine::emitted(0xFFFF, 0x00, &source);
        assert_eq!(line.to_string(), "FFFF: 00        123456789NOP0");
    }
}
