//! Condition Flags.
//!
//! The four condition flags (`Z`, `N`, `C`, `V`) produced by flag-setting
//! instructions, and the [`Flag`] name used for change tracking and trace output.

use std::fmt;

use serde::Serialize;

/// Name of a single condition flag.
///
/// The declaration order (`Z`, `N`, `C`, `V`) is the order in which changed flags
/// are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Flag {
    /// Zero: the result was zero.
    Z,
    /// Negative: bit 31 of the result was set.
    N,
    /// Carry: unsigned carry out of an addition, or no borrow in a subtraction.
    C,
    /// Overflow: signed overflow.
    V,
}

impl Flag {
    /// All flags in reporting order.
    pub const ALL: [Self; 4] = [Self::Z, Self::N, Self::C, Self::V];

    /// Single-letter name of the flag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Z => "Z",
            Self::N => "N",
            Self::C => "C",
            Self::V => "V",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The condition flag register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Flags {
    /// Zero flag.
    pub z: bool,
    /// Negative flag.
    pub n: bool,
    /// Carry flag.
    pub c: bool,
    /// Overflow flag.
    pub v: bool,
}

impl Flags {
    /// Reads one flag.
    pub const fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Z => self.z,
            Flag::N => self.n,
            Flag::C => self.c,
            Flag::V => self.v,
        }
    }

    /// Writes one flag and returns its previous value.
    pub const fn set(&mut self, flag: Flag, value: bool) -> bool {
        let slot = match flag {
            Flag::Z => &mut self.z,
            Flag::N => &mut self.n,
            Flag::C => &mut self.c,
            Flag::V => &mut self.v,
        };
        let old = *slot;
        *slot = value;
        old
    }
}
