//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit ALU used by the execution engine. Every
//! operation returns the 32-bit result together with the carry and overflow it
//! produced, so flag-setting instructions can update `Z`/`N`/`C`/`V` from a single
//! [`AluResult`] while plain instructions simply ignore the extra bits.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Orr, Eor

/// Integer addition and subtraction with carry/overflow detection.
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

use crate::common::constants::SIGN_BIT;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a & b`
    And,
    /// `a | b`
    Orr,
    /// `a ^ b`
    Eor,
}

/// Output of one ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluResult {
    /// The 32-bit result.
    pub value: u32,
    /// Carry out: unsigned overflow for additions, "no borrow" for subtractions.
    /// Always `false` for logical operations.
    pub carry: bool,
    /// Signed overflow. Always `false` for logical operations.
    pub overflow: bool,
}

impl AluResult {
    /// Wraps a value produced without carry or overflow (moves, logic).
    pub const fn from_value(value: u32) -> Self {
        Self {
            value,
            carry: false,
            overflow: false,
        }
    }

    /// `Z`: the result is zero.
    pub const fn zero(&self) -> bool {
        self.value == 0
    }

    /// `N`: bit 31 of the result is set.
    pub const fn negative(&self) -> bool {
        (self.value >> SIGN_BIT) & 1 == 1
    }
}

/// Arithmetic Logic Unit for 32-bit data processing.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand (the `Rn` value)
    /// * `b`  - Second operand (immediate or `Rm` value)
    ///
    /// # Examples
    ///
    /// ```
    /// use armsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// let r = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1);
    /// assert_eq!(r.value, 0);
    /// assert!(r.carry && r.zero() && !r.overflow);
    ///
    /// let r = Alu::execute(AluOp::Sub, 6, 4);
    /// assert_eq!(r.value, 2);
    /// assert!(r.carry); // no borrow
    ///
    /// let r = Alu::execute(AluOp::Eor, 0xF0, 0xFF);
    /// assert_eq!(r.value, 0x0F);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32) -> AluResult {
        match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::And | AluOp::Orr | AluOp::Eor => AluResult::from_value(logic::execute(op, a, b)),
        }
    }
}
