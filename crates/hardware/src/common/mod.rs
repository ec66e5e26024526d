//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register, instruction, and memory constants.
//! 2. **Memory Access:** Classification of data accesses (Read/Write).
//! 3. **Error Handling:** Memory access and configuration error types.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, NUM_REGISTERS};
pub use data::AccessType;
pub use error::{ConfigError, MemoryError};
