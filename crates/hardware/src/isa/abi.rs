//! Register conventions.
//!
//! Only the link register carries meaning for the execution engine. `R15` is an
//! ordinary register here: the program counter is held outside the register file.

/// Link register, written by `BL` with the return address.
pub const REG_LR: usize = 14;

/// Register names `R0`-`R15`.
pub const REG_NAMES: [&str; 16] = [
    "R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7", "R8", "R9", "R10", "R11", "R12", "R13",
    "R14", "R15",
];

/// Returns the name of a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("R??")
}
