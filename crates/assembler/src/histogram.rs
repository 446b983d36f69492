//! Per-opcode usage counts.

use ue1_common::opcode::ALL_OPCODES;
use ue1_common::Opcode;

/// Counts of emitted instructions by opcode.
///
/// `HLT` and `NOPF` share a bucket since they are the same opcode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: [usize; 16],
    total: usize,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one emitted instruction.
    pub fn record(&mut self, opcode: Opcode) {
        self.counts[usize::from(opcode.value())] += 1;
        self.total += 1;
    }

    pub fn count(&self, opcode: Opcode) -> usize {
        self.counts[usize::from(opcode.value())]
    }

    /// Total number of instructions recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Share of the total for `opcode`, in percent. `None` when empty.
    pub fn percentage(&self, opcode: Opcode) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.count(opcode) as f64 * 100.0 / self.total as f64)
    }

    /// Every opcode in declared order with its count.
    pub fn iter(&self) -> impl Iterator<Item = (Opcode, usize)> + '_ {
        ALL_OPCODES.iter().map(|&op| (op, self.count(op)))
    }

    /// Render the usage report, or `None` if nothing was recorded.
    ///
    /// ```text
    /// Opcode usage:
    ///   NOP0        0    0.00%
    ///   LD          1   25.00%
    ///   ...
    ///   Total       4
    /// ```
    pub fn report(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }

        let mut out = String::from("Opcode usage:\n");
        for (opcode, count) in self.iter() {
            let pct = self.percentage(opcode).unwrap_or(0.0);
            out.push_str(&format!("  {:<6}{:>6} {:>7.2}%\n", opcode.mnemonic(), count, pct));
        }
        out.push_str(&format!("  {:<6}{:>6}\n", "Total", self.total));
        Some(out)
    }
}
