//! Error definitions.
//!
//! This module defines the error types of the simulator. It provides:
//! 1. **Memory Errors:** Out-of-range load/store addresses. The execution engine absorbs
//!    these as documented no-ops and only reports them to the observer.
//! 2. **Configuration Errors:** JSON parse and validation failures for [`Config`](crate::Config).
//!
//! Nothing in the core is fatal: no error here ever aborts a step.

use serde::Serialize;
use thiserror::Error;

use super::data::AccessType;

/// Failure of a checked memory access.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
pub enum MemoryError {
    /// The access `[addr, addr + len)` does not fit inside memory.
    #[error("{access} of {len} bytes at {addr:#x} is outside memory of {size} bytes")]
    OutOfBounds {
        /// First byte address of the access.
        addr: u64,
        /// Access width in bytes.
        len: usize,
        /// Total memory size in bytes.
        size: usize,
        /// Whether the access was a load or a store.
        access: AccessType,
    },

    /// `base + offset` produced an address below zero.
    #[error("{access} at base {base:#x} with offset {offset} underflows address zero")]
    NegativeAddress {
        /// Base register value.
        base: u32,
        /// Signed immediate offset.
        offset: i32,
        /// Whether the access was a load or a store.
        access: AccessType,
    },
}

impl MemoryError {
    /// Returns the access type that faulted.
    pub const fn access(&self) -> AccessType {
        match self {
            Self::OutOfBounds { access, .. } | Self::NegativeAddress { access, .. } => *access,
        }
    }
}

/// Failure to build a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a configuration.
    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Memory must hold at least one 32-bit word.
    #[error("memory size {size} is too small; at least {min} bytes are required")]
    MemoryTooSmall {
        /// Requested size in bytes.
        size: usize,
        /// Minimum accepted size in bytes.
        min: usize,
    },

    /// Memory addresses must fit in the 32-bit address space of the registers.
    #[error("memory size {size} exceeds the 32-bit address space")]
    MemoryTooLarge {
        /// Requested size in bytes.
        size: usize,
    },
}
