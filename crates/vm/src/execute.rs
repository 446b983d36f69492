//! Tape loop for the UE1 emulator.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::RuntimeError;
use crate::machine::Machine;
use ue1_common::{Opcode, Program};

/// The longest tape the emulated reader holds.
pub const MAX_TAPE: usize = 4096;

/// Limits for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmConfig {
    /// Instructions fetched before giving up, skipped ones included.
    pub max_steps: u64,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_steps: 10_000_000,
        }
    }
}

/// Supplies input register values when the tape asks for them.
///
/// Bits 0-6 of each value load IR1-IR7. `None` ends the run.
pub trait InputSource {
    fn next_inputs(&mut self) -> Option<u8>;
}

/// A fixed queue of input values.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInputs {
    values: VecDeque<u8>,
}

impl ScriptedInputs {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInputs {
    fn next_inputs(&mut self) -> Option<u8> {
        self.values.pop_front()
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// NOPF executed as the last instruction on the tape.
    Halted,
    /// The tape asked for inputs and none were left.
    InputExhausted,
}

/// The result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub stop: StopReason,
    /// Instructions fetched, skipped ones included.
    pub steps: u64,
    /// Final processor state.
    pub machine: Machine,
}

/// Runs a tape on a [`Machine`].
///
/// Execution wraps from the last instruction back to the first. A NOPF
/// anywhere but the last position requests new inputs; a NOPF in the last
/// position halts.
pub struct Vm<'a> {
    program: &'a Program,
    config: VmConfig,
    machine: Machine,
    pc: usize,
    steps: u64,
}

impl<'a> Vm<'a> {
    pub fn new(program: &'a Program, config: VmConfig) -> Self {
        Self {
            program,
            config,
            machine: Machine::new(),
            pc: 0,
            steps: 0,
        }
    }

    /// Current processor state.
    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Execute the tape until it halts, runs out of inputs or exceeds the
    /// step budget.
    pub fn execute(&mut self, inputs: &mut dyn InputSource) -> Result<RunOutcome, RuntimeError> {
        let program = self.program;
        let tape = &program.instructions;
        if tape.is_empty() {
            return Err(RuntimeError::EmptyTape);
        }
        if tape.len() > MAX_TAPE {
            return Err(RuntimeError::TapeTooLong {
                len: tape.len(),
                max: MAX_TAPE,
            });
        }

        loop {
            if self.steps >= self.config.max_steps {
                return Err(RuntimeError::StepLimitExceeded {
                    limit: self.config.max_steps,
                });
            }

            let at = self.pc;
            let instr = tape[at];
            self.pc = (self.pc + 1) % tape.len();
            self.steps += 1;

            if self.machine.skip {
                trace!(pc = at, instr = %instr, "skipped");
                self.machine.skip = false;
                continue;
            }

            let data_in = self.machine.read(instr.register);

            if instr.opcode == Opcode::Nopf {
                if self.pc == 0 {
                    debug!(steps = self.steps, "halt");
                    return Ok(self.outcome(StopReason::Halted));
                }
                match inputs.next_inputs() {
                    Some(bits) => {
                        debug!(pc = at, bits, "inputs loaded");
                        self.machine.set_inputs(bits);
                    }
                    None => {
                        debug!(pc = at, "inputs exhausted");
                        return Ok(self.outcome(StopReason::InputExhausted));
                    }
                }
                continue;
            }

            trace!(pc = at, instr = %instr, data_in, "step");
            self.machine.apply(instr, data_in);
        }
    }

    fn outcome(&self, stop: StopReason) -> RunOutcome {
        RunOutcome {
            stop,
            steps: self.steps,
            machine: self.machine,
        }
    }
}
