//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the executor. Every
//! operation is pure and works on signed 32-bit words with two's-complement
//! wraparound; overflow never traps and never panics.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub (and Addi, which is Add with an immediate)
//! - [`logic`]:      Slt

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Comparison operations (set-less-than).
pub mod logic;

/// Integer ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Signed set-less-than (1 or 0).
    Slt,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Add, i32::MAX, 1), i32::MIN); // wraps
    /// assert_eq!(Alu::execute(AluOp::Sub, 5, 10), -5);
    /// assert_eq!(Alu::execute(AluOp::Slt, -5, 10), 1);
    /// ```
    pub const fn execute(op: AluOp, a: i32, b: i32) -> i32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Slt => logic::execute(op, a, b),
        }
    }

    /// `a + b`, wrapping.
    pub const fn add(a: i32, b: i32) -> i32 {
        Self::execute(AluOp::Add, a, b)
    }

    /// `a - b`, wrapping.
    pub const fn sub(a: i32, b: i32) -> i32 {
        Self::execute(AluOp::Sub, a, b)
    }

    /// `a + imm`, wrapping. Same datapath as `add`.
    pub const fn addi(a: i32, imm: i32) -> i32 {
        Self::execute(AluOp::Add, a, imm)
    }

    /// `1` if `a < b` (signed), else `0`.
    pub const fn slt(a: i32, b: i32) -> i32 {
        Self::execute(AluOp::Slt, a, b)
    }
}
