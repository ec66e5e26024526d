//! ALU arithmetic operations.
//!
//! Implements 32-bit addition and subtraction. The carry of an addition is taken
//! from the unmasked 33-bit sum; the carry of a subtraction means "no borrow"
//! (`a >= b`). Overflow is the sign bit of the usual two-operand overflow terms.

use super::AluResult;
use crate::common::constants::{REGISTER_MASK, SIGN_BIT};

/// Adds two 32-bit operands.
///
/// * `C` - set when `a + b` exceeds `0xFFFF_FFFF`.
/// * `V` - sign bit of `(a ^ result) & (b ^ result)`.
pub fn add(a: u32, b: u32) -> AluResult {
    let wide = u64::from(a) + u64::from(b);
    let value = (wide & REGISTER_MASK) as u32;
    AluResult {
        value,
        carry: wide > REGISTER_MASK,
        overflow: sign((a ^ value) & (b ^ value)),
    }
}

/// Subtracts `b` from `a`.
///
/// * `C` - set when no borrow occurs (`a >= b`).
/// * `V` - sign bit of `(a ^ b) & (a ^ result)`.
pub fn sub(a: u32, b: u32) -> AluResult {
    let value = a.wrapping_sub(b);
    AluResult {
        value,
        carry: a >= b,
        overflow: sign((a ^ b) & (a ^ value)),
    }
}

#[inline]
const fn sign(v: u32) -> bool {
    (v >> SIGN_BIT) & 1 == 1
}
