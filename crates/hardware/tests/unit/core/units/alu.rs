//! # ALU Tests
//!
//! Results and carry/overflow for every operation, including the boundary cases of
//! 32-bit two's-complement arithmetic.

use armsim_core::core::units::alu::{Alu, AluOp, AluResult};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::add(AluOp::Add, 4, 2, 6)]
#[case::add_wraps(AluOp::Add, 0xFFFF_FFFF, 1, 0)]
#[case::sub(AluOp::Sub, 6, 4, 2)]
#[case::sub_wraps(AluOp::Sub, 0, 1, 0xFFFF_FFFF)]
#[case::and(AluOp::And, 6, 15, 6)]
#[case::orr(AluOp::Orr, 6, 240, 246)]
#[case::eor(AluOp::Eor, 0xFF00_FF00, 0x0FF0_0FF0, 0xF0F0_F0F0)]
fn test_alu_values(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] expected: u32) {
    assert_eq!(Alu::execute(op, a, b).value, expected);
}

#[rstest]
#[case::no_carry(1, 2, false, false)]
#[case::unsigned_carry(0xFFFF_FFFF, 1, true, false)]
#[case::signed_overflow(0x7FFF_FFFF, 1, false, true)]
#[case::both(0x8000_0000, 0x8000_0000, true, true)]
fn test_add_carry_and_overflow(
    #[case] a: u32,
    #[case] b: u32,
    #[case] carry: bool,
    #[case] overflow: bool,
) {
    let r = Alu::execute(AluOp::Add, a, b);
    assert_eq!((r.carry, r.overflow), (carry, overflow));
}

#[rstest]
#[case::equal(4, 4, true, false)]
#[case::greater(6, 4, true, false)]
#[case::borrow(0, 1, false, false)]
#[case::signed_overflow(0x8000_0000, 1, true, true)]
#[case::negative_minus_positive(0x7FFF_FFFF, 0xFFFF_FFFF, false, true)]
fn test_sub_carry_and_overflow(
    #[case] a: u32,
    #[case] b: u32,
    #[case] carry: bool,
    #[case] overflow: bool,
) {
    let r = Alu::execute(AluOp::Sub, a, b);
    assert_eq!((r.carry, r.overflow), (carry, overflow));
}

#[rstest]
#[case(AluOp::And)]
#[case(AluOp::Orr)]
#[case(AluOp::Eor)]
fn test_logic_never_sets_carry_or_overflow(#[case] op: AluOp) {
    let r = Alu::execute(op, u32::MAX, u32::MAX);
    assert!(!r.carry && !r.overflow);
}

#[test]
fn test_zero_and_negative() {
    assert!(AluResult::from_value(0).zero());
    assert!(!AluResult::from_value(0).negative());
    assert!(AluResult::from_value(0x8000_0000).negative());
    assert!(!AluResult::from_value(0x7FFF_FFFF).negative());
}

proptest! {
    #[test]
    fn test_add_matches_wide_arithmetic(a in any::<u32>(), b in any::<u32>()) {
        let r = Alu::execute(AluOp::Add, a, b);
        let wide = u64::from(a) + u64::from(b);
        prop_assert_eq!(r.value, wide as u32);
        prop_assert_eq!(r.carry, wide > 0xFFFF_FFFF);
        prop_assert_eq!(r.overflow, (a as i32).checked_add(b as i32).is_none());
    }

    #[test]
    fn test_sub_matches_wide_arithmetic(a in any::<u32>(), b in any::<u32>()) {
        let r = Alu::execute(AluOp::Sub, a, b);
        prop_assert_eq!(r.value, a.wrapping_sub(b));
        prop_assert_eq!(r.carry, a >= b);
        prop_assert_eq!(r.overflow, (a as i32).checked_sub(b as i32).is_none());
        prop_assert_eq!(r.negative(), (a.wrapping_sub(b) as i32) < 0);
    }
}
