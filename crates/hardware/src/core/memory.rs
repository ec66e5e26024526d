//! Byte-Addressable Memory.
//!
//! This module implements the flat data memory of the machine. It provides:
//! 1. **Storage:** A zero-initialized byte array of fixed size.
//! 2. **Checked Word Access:** Little-endian 32-bit loads and stores that fail with
//!    [`MemoryError`] instead of touching anything when the access does not fit.
//! 3. **Inspection:** Read-only byte views and 16-byte rows for hex-dump style display.

use serde::Serialize;

use crate::common::constants::{MEMORY_ROW_WIDTH, WORD_SIZE};
use crate::common::{AccessType, MemoryError};

/// One row of a memory dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryRow {
    /// Address of the first byte in the row.
    pub address: usize,
    /// Row contents; shorter than [`MEMORY_ROW_WIDTH`] only at the end of memory.
    pub bytes: Vec<u8>,
}

/// Flat byte-addressable memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory of `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Memory size in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for a zero-sized memory.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Zeroes every byte.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Reads one byte, or `None` outside memory.
    pub fn read_u8(&self, addr: usize) -> Option<u8> {
        self.bytes.get(addr).copied()
    }

    /// Reads a little-endian 32-bit word.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the least significant byte.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] when `addr + 3` is not inside memory.
    pub fn read_u32(&self, addr: u64) -> Result<u32, MemoryError> {
        let start = self.word_start(addr, AccessType::Read)?;
        let mut buf = [0u8; WORD_SIZE];
        buf.copy_from_slice(&self.bytes[start..start + WORD_SIZE]);
        Ok(u32::from_le_bytes(buf))
    }

    /// Writes a little-endian 32-bit word.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the least significant byte.
    /// * `val`  - Value to store.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] when `addr + 3` is not inside memory; memory
    /// is left untouched in that case.
    pub fn write_u32(&mut self, addr: u64, val: u32) -> Result<(), MemoryError> {
        let start = self.word_start(addr, AccessType::Write)?;
        self.bytes[start..start + WORD_SIZE].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Returns the bytes in `[start, start + len)`, clamped to the end of memory.
    pub fn view(&self, start: usize, len: usize) -> &[u8] {
        let begin = start.min(self.bytes.len());
        let end = start.saturating_add(len).min(self.bytes.len());
        &self.bytes[begin..end]
    }

    /// Splits `[start, start + len)` into rows of [`MEMORY_ROW_WIDTH`] bytes.
    pub fn rows(&self, start: usize, len: usize) -> Vec<MemoryRow> {
        let begin = start.min(self.bytes.len());
        self.view(start, len)
            .chunks(MEMORY_ROW_WIDTH)
            .enumerate()
            .map(|(i, chunk)| MemoryRow {
                address: begin + i * MEMORY_ROW_WIDTH,
                bytes: chunk.to_vec(),
            })
            .collect()
    }

    /// Full memory contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn word_start(&self, addr: u64, access: AccessType) -> Result<usize, MemoryError> {
        let fits = addr
            .checked_add(WORD_SIZE as u64)
            .is_some_and(|end| end <= self.bytes.len() as u64);
        if fits {
            Ok(addr as usize)
        } else {
            Err(MemoryError::OutOfBounds {
                addr,
                len: WORD_SIZE,
                size: self.bytes.len(),
                access,
            })
        }
    }
}
