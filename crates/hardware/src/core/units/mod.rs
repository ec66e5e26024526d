//! Execution units.
//!
//! This module contains the functional units the execution engine dispatches to:
//! the ALU for data processing and flag derivation, and the load/store unit for
//! address generation and word transfers.

/// Arithmetic Logic Unit for data-processing operations.
pub mod alu;

/// Load/Store Unit for memory access operations.
pub mod lsu;
