//! ALU logical operations.
//!
//! Bitwise AND, OR, and exclusive OR. None of them produce carry or overflow.

use super::AluOp;

/// Executes a logical operation.
///
/// # Returns
///
/// The 32-bit result, or `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Orr => a | b,
        AluOp::Eor => a ^ b,
        AluOp::Add | AluOp::Sub => 0,
    }
}
