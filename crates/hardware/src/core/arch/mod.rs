//! Architectural state components.
//!
//! This module contains the programmer-visible register state of the machine.
//! It includes the following modules:
//! 1. **GPRs:** General-Purpose Register file implementation.
//! 2. **Flags:** The `Z`/`N`/`C`/`V` condition flags.

/// Condition flag register and flag names.
pub mod flags;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use flags::{Flag, Flags};
pub use gpr::Gpr;
