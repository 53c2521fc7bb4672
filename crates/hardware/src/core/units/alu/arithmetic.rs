//! ALU arithmetic operations.
//!
//! Implements integer addition and subtraction on 32-bit signed words.
//! Results wrap on overflow (`i32::MAX + 1 == i32::MIN`).

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Slt => 0,
    }
}
