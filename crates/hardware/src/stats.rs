//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the simulator. It provides:
//! 1. **Progress:** Total cycles and retired instructions.
//! 2. **Instruction mix:** Counts by category (ALU, flag-setting, load, store, branch).
//! 3. **Memory:** Out-of-bounds accesses absorbed as no-ops.

use std::fmt::Write;

use serde::Serialize;

use crate::isa::instruction::{Instruction, InstructionClass};

/// Simulation statistics structure tracking the instruction mix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions executed.
    pub instructions_retired: u64,

    /// Count of moves, arithmetic, logic, and compares.
    pub inst_alu: u64,
    /// Count of `MOVS`, `ADDS`, `SUBS`, and `CMP`.
    pub inst_flag_setting: u64,
    /// Count of `LDR`.
    pub inst_load: u64,
    /// Count of `STR`.
    pub inst_store: u64,
    /// Count of `B`, `BL`, and `BX`.
    pub inst_branch: u64,

    /// Loads and stores skipped because the address was outside memory.
    pub memory_faults: u64,
}

impl SimStats {
    /// Records one executed instruction.
    ///
    /// # Arguments
    ///
    /// * `inst`    - The instruction that was executed.
    /// * `faulted` - Whether its memory access was skipped as out of bounds.
    pub fn record(&mut self, inst: &Instruction, faulted: bool) {
        self.cycles += 1;
        self.instructions_retired += 1;
        match inst.op().class() {
            InstructionClass::Alu => self.inst_alu += 1,
            InstructionClass::Load => self.inst_load += 1,
            InstructionClass::Store => self.inst_store += 1,
            InstructionClass::Branch => self.inst_branch += 1,
        }
        if inst.op().sets_flags() {
            self.inst_flag_setting += 1;
        }
        if faulted {
            self.memory_faults += 1;
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Renders a plain-text report of the counters.
    #[allow(clippy::cast_precision_loss)]
    pub fn summary(&self) -> String {
        let total = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / total) * 100.0;
        let mut out = String::new();

        let _ = writeln!(out, "sim_cycles               {}", self.cycles);
        let _ = writeln!(out, "sim_insts                {}", self.instructions_retired);
        let _ = writeln!(out, "INSTRUCTION MIX");
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.flag_setting", self.inst_flag_setting),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
        ] {
            let _ = writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count));
        }
        let _ = writeln!(out, "  mem.faults             {}", self.memory_faults);
        out
    }
}
