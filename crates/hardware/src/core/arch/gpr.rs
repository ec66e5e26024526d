//! General-Purpose Register File.
//!
//! This module implements the sixteen 32-bit general-purpose registers. It performs the following:
//! 1. **Storage:** Maintains registers `R0`-`R15`.
//! 2. **Invariant Enforcement:** Masks every write to 32 bits.
//! 3. **Debugging:** Formats the complete register state for diagnostics.

use crate::common::constants::{NUM_REGISTERS, REGISTER_MASK};

/// General-Purpose Register file.
///
/// No register is hardwired; `R14` is the link register by convention only and
/// `R15` is an ordinary register (the program counter is held separately).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the register, or 0 for an index outside the file.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-15). Writes outside the file are ignored.
    /// * `val` - The value to write; bits above 31 are discarded.
    ///
    /// # Returns
    ///
    /// The value previously held by the register, or `None` if `idx` is out of range.
    pub fn write(&mut self, idx: usize, val: u64) -> Option<u32> {
        let slot = self.regs.get_mut(idx)?;
        let old = *slot;
        *slot = (val & REGISTER_MASK) as u32;
        Some(old)
    }

    /// Returns a copy of all sixteen registers.
    pub const fn snapshot(&self) -> [u32; NUM_REGISTERS] {
        self.regs
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_REGISTERS];
    }

    /// Formats all registers, four per line.
    pub fn dump(&self) -> String {
        self.regs
            .chunks(4)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, val)| format!("R{:<2}={val:#010x}", row * 4 + col))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
