//! Global System Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Register count, width mask, and sign bit position.
//! 2. **Instruction Constants:** Fixed instruction size and decoder defaults.
//! 3. **Memory Constants:** Default memory size, word size, and inspection row width.

/// Number of general-purpose registers (`R0`-`R15`).
pub const NUM_REGISTERS: usize = 16;

/// Mask applied to every register write to keep values within 32 bits.
pub const REGISTER_MASK: u64 = 0xFFFF_FFFF;

/// Bit position of the sign bit in a 32-bit two's-complement value.
pub const SIGN_BIT: u32 = 31;

/// Size of every instruction in bytes; `pc` advances by this amount.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Branch offset used when a `B`/`BL` operand is missing or unparseable.
pub const DEFAULT_BRANCH_OFFSET: i32 = 4;

/// Load/store offset used when the `[Rn]` form omits the immediate.
pub const DEFAULT_MEMORY_OFFSET: i32 = 0;

/// Default size of the byte-addressable memory (64 KiB).
pub const DEFAULT_MEMORY_SIZE: usize = 65536;

/// Width of a load/store access in bytes.
pub const WORD_SIZE: usize = 4;

/// Number of bytes per row returned by memory inspection.
pub const MEMORY_ROW_WIDTH: usize = 16;

/// Default pause between steps of a continuous run, in milliseconds.
pub const DEFAULT_RUN_DELAY_MS: u64 = 500;
