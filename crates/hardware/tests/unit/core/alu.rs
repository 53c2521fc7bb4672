//! # ALU Tests
//!
//! Edge-case vectors for the four integer operations, including two's-complement
//! wraparound at the 32-bit boundaries.

use mipsim_core::core::units::alu::{Alu, AluOp};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0, 0, 0)]
#[case(5, 10, 15)]
#[case(-1, 1, 0)]
#[case(i32::MAX, 1, i32::MIN)]
#[case(i32::MIN, -1, i32::MAX)]
fn add(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::add(a, b), expected);
    assert_eq!(Alu::execute(AluOp::Add, a, b), expected);
}

#[rstest]
#[case(15, 5, 10)]
#[case(5, 10, -5)]
#[case(0, 0, 0)]
#[case(i32::MIN, 1, i32::MAX)]
#[case(i32::MAX, -1, i32::MIN)]
fn sub(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::sub(a, b), expected);
    assert_eq!(Alu::execute(AluOp::Sub, a, b), expected);
}

#[rstest]
#[case(0, 5)]
#[case(10, -3)]
#[case(i32::MIN, 0)]
#[case(i32::MAX, 1)]
fn addi_matches_add(#[case] a: i32, #[case] imm: i32) {
    assert_eq!(Alu::addi(a, imm), Alu::add(a, imm));
}

#[rstest]
#[case(1, 2, 1)]
#[case(2, 1, 0)]
#[case(3, 3, 0)]
#[case(-1, 0, 1)]
#[case(0, -1, 0)]
#[case(i32::MIN, i32::MAX, 1)]
fn slt_is_signed(#[case] a: i32, #[case] b: i32, #[case] expected: i32) {
    assert_eq!(Alu::slt(a, b), expected);
    assert_eq!(Alu::execute(AluOp::Slt, a, b), expected);
}

proptest! {
    #[test]
    fn add_then_sub_restores_operand(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(Alu::sub(Alu::add(a, b), b), a);
    }

    #[test]
    fn slt_is_zero_or_one(a in any::<i32>(), b in any::<i32>()) {
        let r = Alu::slt(a, b);
        prop_assert!(r == 0 || r == 1);
        prop_assert_eq!(r == 1, a < b);
    }
}
