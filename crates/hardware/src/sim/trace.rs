//! Execution log and per-step reports.
//!
//! This module defines the observable output of the simulator:
//! 1. **Execution log:** The user-facing list of [`LogEntry`] lines (loads, resets,
//!    executed instructions, register and flag changes, run-loop status).
//! 2. **Step reports:** A [`StepReport`] per executed instruction, carrying the full
//!    register file, flags, `pc`, cycle count, and the change-set.
//! 3. **Snapshots:** A [`StateSnapshot`] of the machine for presentation layers.

use serde::Serialize;

use crate::common::MemoryError;
use crate::common::constants::NUM_REGISTERS;
use crate::core::arch::{Flag, Flags};
use crate::core::state::StepChanges;
use crate::isa::abi::reg_name;

/// Category of an execution log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LogKind {
    /// Status and per-cycle messages.
    Info,
    /// `R{i} = {value}` lines.
    RegisterChange,
    /// `{flag} = {0|1}` lines.
    FlagChange,
}

/// One execution log line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Literal message text.
    pub message: String,
    /// Message category.
    pub kind: LogKind,
}

impl LogEntry {
    /// Creates an entry.
    pub fn new(message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Creates an [`LogKind::Info`] entry.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, LogKind::Info)
    }
}

/// Append-only list of log lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExecutionLog {
    entries: Vec<LogEntry>,
}

impl ExecutionLog {
    /// Appends an entry.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Appends an [`LogKind::Info`] line.
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogEntry::info(message));
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Message texts, oldest first.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the log is empty.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything observable about one executed instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepReport {
    /// Cycles executed before this step; the first step of a program is cycle 0.
    pub cycle: u64,
    /// Index of the executed instruction in the program.
    pub index: usize,
    /// 1-based source line of the executed instruction.
    pub line_number: usize,
    /// Source text (or disassembly) of the executed instruction.
    pub text: String,
    /// Registers and flags this instruction changed.
    pub changes: StepChanges,
    /// Register file after the step.
    pub registers: [u32; NUM_REGISTERS],
    /// Flags after the step.
    pub flags: Flags,
    /// Program counter after the step.
    pub pc: u32,
    /// Cycles executed so far, including this one.
    pub cycle_count: u64,
    /// Out-of-bounds access skipped by this instruction.
    pub fault: Option<MemoryError>,
}

impl StepReport {
    /// Builds the trace lines for this step.
    ///
    /// The first line is `Cycle {n}: Executing {text}`, followed by one `R{i} = {value}`
    /// line per changed register (ascending) and one `{flag} = {0|1}` line per changed
    /// flag (`Z`, `N`, `C`, `V` order).
    pub fn log_lines(&self) -> Vec<LogEntry> {
        let mut lines = Vec::with_capacity(1 + self.changes.registers.len() + self.changes.flags.len());
        lines.push(LogEntry::info(format!("Cycle {}: Executing {}", self.cycle, self.text)));
        for &idx in &self.changes.registers {
            let value = self.registers.get(idx).copied().unwrap_or_default();
            lines.push(LogEntry::new(
                format!("{} = {value}", reg_name(idx)),
                LogKind::RegisterChange,
            ));
        }
        for &flag in &self.changes.flags {
            lines.push(LogEntry::new(
                format!("{flag} = {}", u8::from(self.flags.get(flag))),
                LogKind::FlagChange,
            ));
        }
        lines
    }

    /// Value of one flag after the step.
    pub const fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }
}

/// Point-in-time view of the simulator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// Register file.
    pub registers: [u32; NUM_REGISTERS],
    /// Condition flags.
    pub flags: Flags,
    /// Program counter.
    pub pc: u32,
    /// Cycles executed since the last reset.
    pub cycle_count: u64,
    /// Index of the next instruction.
    pub cursor: usize,
    /// Source text of the next instruction, if any.
    pub current_line: Option<String>,
}
