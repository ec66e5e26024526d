//! Memory Access Types.
//!
//! This module defines the classification of data memory accesses, used in fault
//! reports to tell whether an absorbed out-of-bounds access was a load or a store.

use serde::Serialize;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum AccessType {
    /// Data read access, issued by `LDR`.
    Read,

    /// Data write access, issued by `STR`.
    Write,
}

impl AccessType {
    /// Lower-case name used in log fields and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
