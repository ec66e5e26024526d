//! Simulator: owns the machine state and the program side-by-side.
//!
//! The simulator is the driver that the presentation layer talks to. It performs the following:
//! 1. **Loading:** Assembles program text and resets the machine for it.
//! 2. **Stepping:** Fetches the instruction under the cursor (or at `pc`, see
//!    [`FetchMode`]), executes it, and records the trace.
//! 3. **Running:** Steps continuously with a pause between steps until the program
//!    completes, the cancel token fires, or the cycle cap is reached.
//! 4. **Reporting:** Keeps the execution log, statistics, and snapshots.

use tracing::debug;

use crate::config::{Config, FetchMode};
use crate::core::engine::ExecutionEngine;
use crate::core::memory::MemoryRow;
use crate::core::state::MachineState;
use crate::sim::control::{CancelToken, RunOutcome, StepObserver, StepOutcome};
use crate::sim::program::{Program, SAMPLE_PROGRAM};
use crate::sim::trace::{ExecutionLog, StateSnapshot, StepReport};
use crate::stats::SimStats;

/// Top-level simulator: machine state + program + execution log.
#[derive(Clone, Debug)]
pub struct Simulator {
    config: Config,
    state: MachineState,
    program: Program,
    stats: SimStats,
    log: ExecutionLog,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Simulator {
    /// Creates a simulator with an empty program and zeroed machine.
    pub fn new(config: Config) -> Self {
        let state = MachineState::new(config.memory.size);
        Self {
            config,
            state,
            program: Program::default(),
            stats: SimStats::default(),
            log: ExecutionLog::default(),
        }
    }

    /// Assembles `text`, replaces the program, and resets the machine.
    ///
    /// # Returns
    ///
    /// The number of instructions loaded.
    ///
    /// # Examples
    ///
    /// ```
    /// use armsim_core::Simulator;
    ///
    /// let mut sim = Simulator::default();
    /// assert_eq!(sim.load("MOV R0, #4\n; comment\nADD R1, R0, #2"), 2);
    /// assert_eq!(sim.log().messages(), ["Simulator reset", "Loaded 2 instructions"]);
    /// ```
    pub fn load(&mut self, text: &str) -> usize {
        self.program = Program::assemble(text);
        self.reset();
        let count = self.program.len();
        debug!(instructions = count, "program loaded");
        self.log.info(format!("Loaded {count} instructions"));
        count
    }

    /// Loads the demonstration program.
    pub fn load_sample(&mut self) -> usize {
        self.load(SAMPLE_PROGRAM)
    }

    /// Drops the program and resets the machine.
    pub fn clear(&mut self) {
        self.program = Program::default();
        self.reset();
    }

    /// Zeroes the machine, rewinds the program, and restarts the log.
    pub fn reset(&mut self) {
        self.state.reset();
        self.program.rewind();
        self.stats.reset();
        self.log.clear();
        self.log.info("Simulator reset");
        debug!("simulator reset");
    }

    /// Empties the execution log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Executes the next instruction.
    ///
    /// When nothing is left to execute the machine is not touched and
    /// [`StepOutcome::Finished`] is returned; calling `step` again is always safe.
    pub fn step(&mut self) -> StepOutcome {
        if self.program.is_complete() {
            self.log.info("No more instructions to execute");
            return StepOutcome::Finished;
        }

        if self.follows_pc() && !self.seek_pc() {
            return StepOutcome::Finished;
        }

        let index = self.program.cursor();
        let cycle = self.program.cycle_count();
        let Some(inst) = self.program.current() else {
            return StepOutcome::Finished;
        };

        debug!(cycle, line = inst.line_number(), op = %inst.op(), "step");
        let outcome = ExecutionEngine::step(&mut self.state, inst);
        self.stats.record(inst, outcome.fault.is_some());

        let report = StepReport {
            cycle,
            index,
            line_number: inst.line_number(),
            text: inst.display_text(),
            changes: outcome.changes,
            registers: self.state.registers(),
            flags: self.state.flags(),
            pc: self.state.pc(),
            cycle_count: cycle + 1,
            fault: outcome.fault,
        };
        self.program.advance();

        for line in report.log_lines() {
            self.log.push(line);
        }
        if self.follows_pc() {
            let _ = self.seek_pc();
        }
        StepOutcome::Executed(Box::new(report))
    }

    fn follows_pc(&self) -> bool {
        self.config.general.fetch == FetchMode::ProgramCounter
    }

    /// Points the cursor at the instruction starting at `pc`.
    ///
    /// When no instruction starts there the program is finished and `false` is returned.
    fn seek_pc(&mut self) -> bool {
        let pc = self.state.pc();
        if let Some(index) = self.program.index_for_pc(pc) {
            self.program.seek(index);
            return true;
        }
        debug!(pc, "pc outside program");
        self.program.finish();
        self.log.info("PC out of instruction bounds. Halting.");
        false
    }

    /// Steps until the program completes, `cancel` fires, or the cycle cap is reached.
    ///
    /// Between steps the loop sleeps for the configured run delay; cancellation is
    /// checked before every step and during the sleep, never mid-instruction.
    ///
    /// # Arguments
    ///
    /// * `cancel`   - Cooperative cancellation signal.
    /// * `observer` - Called with the report of every executed instruction.
    pub fn run(&mut self, cancel: &CancelToken, observer: &mut impl StepObserver) -> RunOutcome {
        let delay = self.config.general.run_delay();
        loop {
            if let Some(outcome) = self.run_gate(cancel) {
                return outcome;
            }
            if let StepOutcome::Executed(report) = self.step() {
                observer.on_step(&report);
            }
            if !self.program.is_complete() {
                let _ = cancel.wait(delay);
            }
        }
    }

    /// Decides whether a continuous run stops before the next step, logging the reason.
    pub(crate) fn run_gate(&mut self, cancel: &CancelToken) -> Option<RunOutcome> {
        if cancel.is_cancelled() {
            self.log.info("Execution paused");
            return Some(RunOutcome::Cancelled);
        }
        if self.program.is_complete() {
            self.log.info("Program execution completed");
            return Some(RunOutcome::Completed);
        }
        if self
            .config
            .general
            .max_cycles
            .is_some_and(|max| self.program.cycle_count() >= max)
        {
            self.log.info("Max cycle count reached; simulation halted.");
            return Some(RunOutcome::CycleLimit);
        }
        None
    }

    /// Captures registers, flags, `pc`, cycle count, and the next instruction.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            registers: self.state.registers(),
            flags: self.state.flags(),
            pc: self.state.pc(),
            cycle_count: self.program.cycle_count(),
            cursor: self.program.cursor(),
            current_line: self.program.current().map(|inst| inst.display_text()),
        }
    }

    /// Hex-dump rows of `len` bytes of memory starting at `start`.
    pub fn memory_rows(&self, start: usize, len: usize) -> Vec<MemoryRow> {
        self.state.memory().rows(start, len)
    }

    /// Active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Machine state.
    pub const fn state(&self) -> &MachineState {
        &self.state
    }

    /// Mutable machine state, for presetting registers or memory.
    pub const fn state_mut(&mut self) -> &mut MachineState {
        &mut self.state
    }

    /// Loaded program and its cursor.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Execution statistics since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Execution log since the last reset.
    pub const fn log(&self) -> &ExecutionLog {
        &self.log
    }

    /// Returns `true` when no instruction is left to execute.
    pub const fn is_complete(&self) -> bool {
        self.program.is_complete()
    }
}
