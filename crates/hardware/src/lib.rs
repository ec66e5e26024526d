//! ARM-style teaching processor simulator library.
//!
//! This crate implements a small 32-bit register machine that executes a textual
//! ARM-like assembly dialect one instruction at a time:
//! 1. **ISA:** A lenient line decoder, the instruction model, and a disassembler for
//!    `MOV`, `MOVS`, `ADD`, `ADDS`, `SUB`, `SUBS`, `CMP`, `AND`, `ORR`, `EOR`, `LDR`,
//!    `STR`, `B`, `BL`, `BX`.
//! 2. **Core:** Sixteen 32-bit registers, a program counter, `Z`/`N`/`C`/`V` flags,
//!    byte-addressed little-endian memory, and the execution engine.
//! 3. **Simulation:** Program loading, stepping with change tracking, a cancellable run
//!    loop, the execution log, and statistics.
//!
//! # Usage
//!
//! ```
//! use armsim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(Config::default());
//! let _ = sim.load_sample();
//! while !sim.step().is_finished() {}
//! assert_eq!(sim.state().register(5), 6);
//! ```

/// Common types and constants (registers, access types, errors).
pub mod common;
/// Simulator configuration (defaults, fetch policy, memory size).
pub mod config;
/// Machine core (registers, flags, memory, ALU, LSU, execution engine).
pub mod core;
/// Instruction set (instruction model, decoder, disassembler, register names).
pub mod isa;
/// Program loading, stepping, run control, and tracing.
pub mod sim;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Complete architectural state.
pub use crate::core::MachineState;
/// Assembled program with its cursor.
pub use crate::sim::Program;
/// Main driver type; owns the machine state, program, and log.
pub use crate::sim::Simulator;
