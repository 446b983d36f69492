//! Assembler session: the state threaded through one run.
//!
//! Lines are fed in order. Each one is classified, then either skipped or
//! encoded. The session owns everything that crosses line boundaries: the
//! address counter, the emitted instructions, the histogram, the listing
//! and every error found so far.

use tracing::debug;

use crate::encoder::encode_line;
use crate::error::AsmError;
use crate::histogram::Histogram;
use crate::lexer::{classify, LineKind, SourceLine};
use crate::listing::ListingLine;
use ue1_common::{Instruction, Program};

/// Options for one assembly run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblerOptions {
    /// Record a listing line for every source line.
    pub listing: bool,
}

/// The result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    pub program: Program,
    pub histogram: Histogram,
    /// Empty unless listing was enabled.
    pub listing: Vec<ListingLine>,
}

impl Assembly {
    /// The output binary: one byte per instruction, no framing.
    pub fn bytes(&self) -> Vec<u8> {
        self.program.encode()
    }
}

/// State for one pass over a source file.
#[derive(Debug, Default)]
pub struct Session {
    options: AssemblerOptions,
    address: usize,
    instructions: Vec<Instruction>,
    histogram: Histogram,
    listing: Vec<ListingLine>,
    errors: Vec<AsmError>,
}

impl Session {
    pub fn new(options: AssemblerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Address the next emitted instruction will occupy.
    pub fn address(&self) -> usize {
        self.address
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    pub fn errors(&self) -> &[AsmError] {
        &self.errors
    }

    /// Process one source line.
    ///
    /// Errors are recorded and the session moves on, so one pass reports
    /// every bad line.
    pub fn feed(&mut self, line: SourceLine<'_>) {
        match classify(&line) {
            LineKind::Skip => {
                debug!(line = line.number, "skip");
                if self.options.listing {
                    self.listing.push(ListingLine::skipped(&line));
                }
            }
            LineKind::Decoded(fields) => match encode_line(&fields, &line) {
                Ok(instr) => self.emit(instr, &line),
                Err(err) => {
                    debug!(line = line.number, error = %err, "rejected line");
                    self.errors.push(err);
                }
            },
        }
    }

    fn emit(&mut self, instr: Instruction, line: &SourceLine<'_>) {
        let byte = instr.encode();
        debug!(
            address = self.address,
            byte,
            line = line.number,
            instr = %instr,
            "emit"
        );
        if self.options.listing {
            self.listing.push(ListingLine::emitted(self.address, byte, line));
        }
        self.histogram.record(instr.opcode);
        self.instructions.push(instr);
        self.address += 1;
    }

    /// End the pass. Fails with every collected error if there were any.
    pub fn finish(self) -> Result<Assembly, Vec<AsmError>> {
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        Ok(Assembly {
            program: Program::new(self.instructions),
            histogram: self.histogram,
            listing: self.listing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ue1_common::Opcode;

    fn run(text: &str, options: AssemblerOptions) -> Session {
        let mut session = Session::new(options);
        for (idx, raw) in text.lines().enumerate() {
            session.feed(SourceLine::new(idx + 1, raw));
        }
        session
    }

    #[test]
    fn address_counts_only_emitted_lines() {
        let session = run("; header\n\nLD SR1\n; mid\nHLT\n", AssemblerOptions::default());
        assert_eq!(session.address(), 2);
        assert_eq!(session.histogram().total(), 2);
    }

    #[test]
    fn errors_do_not_advance_address() {
        let session = run("LD SR1\nFOO\nHLT\n", AssemblerOptions::default());
        assert_eq!(session.address(), 2);
        assert_eq!(session.errors().len(), 1);
        assert_eq!(session.histogram().count(Opcode::Ld), 1);
    }

    #[test]
    fn finish_collects_every_error() {
        let errors = run("FOO\nLD XX\nSTO RR\nLD SR1 SR2\n", AssemblerOptions::default())
            .finish()
            .unwrap_err();
        let lines: Vec<usize> = errors.iter().map(AsmError::line).collect();
        assert_eq!(lines, vec![1, 2, 4]);
    }

    #[test]
    fn listing_off_by_default() {
        let assembly = run("LD SR1\n", AssemblerOptions::default()).finish().unwrap();
        assert!(assembly.listing.is_empty());
    }

    #[test]
    fn listing_uses_each_lines_own_text() {
        let assembly = run("LD SR1\n; note\nADD SR2\n", AssemblerOptions { listing: true })
            .finish()
            .unwrap();
        let rendered: Vec<String> = assembly.listing.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "0000: 11        1       LD SR1".to_string(),
                "                2       ; note".to_string(),
                "0001: 22        3       ADD SR2".to_string(),
            ]
        );
    }

    #[test]
    fn finish_returns_program_and_histogram() {
        let assembly = run("LD SR1\nHLT\n", AssemblerOptions::default())
            .finish()
            .unwrap();
        assert_eq!(assembly.bytes(), vec![0x11, 0xF0]);
        assert_eq!(assembly.histogram.count(Opcode::Nopf), 1);
    }
}
