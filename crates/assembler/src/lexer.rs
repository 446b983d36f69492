//! Line classification for UE1 assembly text.

/// Comments start with `;` and extend to end of line.
pub const COMMENT_MARKER: char = ';';

/// One line of source text with its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// The line as read, without its terminator.
    pub raw: &'a str,
    /// `raw` with leading and trailing whitespace removed.
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self {
            number,
            raw,
            text: raw.trim(),
        }
    }
}

/// The fields of a line that produces an instruction.
///
/// Tokens keep the case they were written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields<'a> {
    pub opcode: &'a str,
    pub operand: Option<&'a str>,
    /// The first field after the operand, if any.
    pub extra: Option<&'a str>,
}

/// How a line takes part in assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank or comment-only: no byte, no address.
    Skip,
    /// Holds an instruction.
    Decoded(Fields<'a>),
}

/// Classify a line and split out its fields.
///
/// A line is skipped if it is blank or its first non-blank character is the
/// comment marker. Otherwise everything from the first marker on is dropped
/// and the rest is split on runs of whitespace.
pub fn classify<'a>(line: &SourceLine<'a>) -> LineKind<'a> {
    let text = line.text;
    if text.is_empty() || text.starts_with(COMMENT_MARKER) {
        return LineKind::Skip;
    }

    let code = match text.find(COMMENT_MARKER) {
        Some(pos) => &text[..pos],
        None => text,
    };

    let mut words = code.split_whitespace();
    let Some(opcode) = words.next() else {
        return LineKind::Skip;
    };

    LineKind::Decoded(Fields {
        opcode,
        operand: words.next(),
        extra: words.next(),
    })
}
