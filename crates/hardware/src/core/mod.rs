//! Core machine implementation.
//!
//! This module contains the architectural state (registers, flags, memory), the
//! execution units, and the engine that applies one instruction at a time.

/// Architecture-specific components (register file, condition flags).
pub mod arch;

/// Single-instruction execution.
pub mod engine;

/// Byte-addressed little-endian memory.
pub mod memory;

/// Complete machine state with change tracking.
pub mod state;

/// Execution units (ALU, LSU).
pub mod units;

pub use self::engine::{ExecOutcome, ExecutionEngine};
pub use self::memory::{Memory, MemoryRow};
pub use self::state::{MachineState, StepChanges};
