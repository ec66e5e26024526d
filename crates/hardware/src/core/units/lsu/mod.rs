//! Load/Store Unit (LSU).
//!
//! This module provides the Load/Store Unit, responsible for data memory accesses.
//! It performs the following:
//! 1. **Address Generation:** `base + offset` with a signed offset, computed without
//!    wrapping so that an address past the top of the 32-bit space stays out of bounds.
//! 2. **Word Transfers:** Little-endian 32-bit loads and stores through [`Memory`].
//!
//! Any access whose last byte falls outside memory fails without side effects; the
//! caller decides how to absorb the error.

use crate::common::{AccessType, MemoryError};
use crate::core::memory::Memory;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes `base + offset`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::NegativeAddress`] when the sum is below zero.
    pub fn effective_address(base: u32, offset: i32, access: AccessType) -> Result<u64, MemoryError> {
        u64::from(base)
            .checked_add_signed(i64::from(offset))
            .ok_or(MemoryError::NegativeAddress {
                base,
                offset,
                access,
            })
    }

    /// Loads the word at `base + offset`.
    ///
    /// # Errors
    ///
    /// Fails when the address is negative or `addr + 3` is outside memory.
    pub fn load(mem: &Memory, base: u32, offset: i32) -> Result<u32, MemoryError> {
        let addr = Self::effective_address(base, offset, AccessType::Read)?;
        mem.read_u32(addr)
    }

    /// Stores `value` at `base + offset`.
    ///
    /// # Errors
    ///
    /// Fails when the address is negative or `addr + 3` is outside memory; memory is
    /// untouched in that case.
    pub fn store(mem: &mut Memory, base: u32, offset: i32, value: u32) -> Result<(), MemoryError> {
        let addr = Self::effective_address(base, offset, AccessType::Write)?;
        mem.write_u32(addr, value)
    }
}
