//! ALU comparison operations.
//!
//! Implements signed set-less-than. The result is always 0 or 1.

use super::AluOp;

/// Executes a comparison operation.
///
/// Returns `0` for non-comparison opcodes.
pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
    match op {
        AluOp::Slt => (a < b) as i32,
        AluOp::Add | AluOp::Sub => 0,
    }
}
