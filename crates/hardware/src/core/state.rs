//! Machine State.
//!
//! This module defines [`MachineState`], the container for all programmer-visible
//! state. It provides:
//! 1. **State Management:** Registers, program counter, condition flags, and memory.
//! 2. **Mutation Primitives:** Register and flag writes that mask and track changes.
//! 3. **Change Tracking:** The sets of registers and flags changed since the last clear,
//!    exported as a [`StepChanges`] value.
//!
//! A register or flag is recorded as changed only when the written value differs
//! from the value it replaces.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::common::constants::{DEFAULT_MEMORY_SIZE, NUM_REGISTERS, REGISTER_MASK};
use crate::core::arch::{Flag, Flags, Gpr};
use crate::core::memory::Memory;

/// Registers and flags changed by one step.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepChanges {
    /// Changed register indices, ascending.
    pub registers: BTreeSet<usize>,
    /// Changed flags, in `Z`, `N`, `C`, `V` order.
    pub flags: BTreeSet<Flag>,
}

impl StepChanges {
    /// Returns `true` when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.registers.is_empty() && self.flags.is_empty()
    }
}

/// Complete architectural state of the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineState {
    regs: Gpr,
    pc: u32,
    flags: Flags,
    memory: Memory,
    changes: StepChanges,
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_SIZE)
    }
}

impl MachineState {
    /// Creates a zeroed machine with `memory_size` bytes of memory.
    pub fn new(memory_size: usize) -> Self {
        Self {
            regs: Gpr::new(),
            pc: 0,
            flags: Flags::default(),
            memory: Memory::new(memory_size),
            changes: StepChanges::default(),
        }
    }

    /// Zeroes registers, `pc`, flags, and memory, and clears change tracking.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.pc = 0;
        self.flags = Flags::default();
        self.memory.clear();
        self.clear_change_tracking();
    }

    /// Reads a register (0 for an index outside `R0`-`R15`).
    pub fn register(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Returns all sixteen registers.
    pub const fn registers(&self) -> [u32; NUM_REGISTERS] {
        self.regs.snapshot()
    }

    /// Writes `value & 0xFFFF_FFFF` to a register and records the change.
    ///
    /// Accepts a 64-bit value so that raw arithmetic results can be written directly;
    /// the register only ever holds the low 32 bits. Writes to indices outside
    /// `R0`-`R15` are ignored.
    pub fn set_register(&mut self, idx: usize, value: u64) {
        let masked = (value & REGISTER_MASK) as u32;
        if self.regs.write(idx, value).is_some_and(|old| old != masked) {
            let _ = self.changes.registers.insert(idx);
        }
    }

    /// Program counter.
    pub const fn pc(&self) -> u32 {
        self.pc
    }

    /// Overwrites the program counter. The program counter is not change-tracked.
    pub const fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// All four flags.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Reads one flag.
    pub const fn flag(&self, flag: Flag) -> bool {
        self.flags.get(flag)
    }

    /// Writes one flag and records the change.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if self.flags.set(flag, value) != value {
            let _ = self.changes.flags.insert(flag);
        }
    }

    /// Read-only access to memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to memory. Memory writes are not change-tracked.
    pub const fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Registers changed since the last clear.
    pub const fn changed_registers(&self) -> &BTreeSet<usize> {
        &self.changes.registers
    }

    /// Flags changed since the last clear.
    pub const fn changed_flags(&self) -> &BTreeSet<Flag> {
        &self.changes.flags
    }

    /// Current change-set.
    pub const fn changes(&self) -> &StepChanges {
        &self.changes
    }

    /// Empties both change-sets.
    pub fn clear_change_tracking(&mut self) {
        self.changes.registers.clear();
        self.changes.flags.clear();
    }
}
