//! General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file.
//! It performs the following:
//! 1. **Storage:** Maintains 32 signed word registers (`R0`-`R31`).
//! 2. **Debugging:** Provides utilities for dumping the complete register state.
//!
//! `R0` is an ordinary writable register; programs conventionally leave it at
//! zero and use it as a zero source.

/// Number of general-purpose registers.
pub const GPR_COUNT: usize = 32;

/// General-Purpose Register file.
///
/// Contains 32 signed 32-bit registers, all zero after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; GPR_COUNT],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; GPR_COUNT],
        }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    pub const fn read(&self, idx: usize) -> i32 {
        self.regs[idx]
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31)
    /// * `val` - The value to write
    pub const fn write(&mut self, idx: usize, val: i32) {
        self.regs[idx] = val;
    }

    /// Returns all register values in index order.
    pub const fn values(&self) -> &[i32; GPR_COUNT] {
        &self.regs
    }

    /// Dumps the contents of all general-purpose registers to stderr.
    ///
    /// Displays registers four per line.
    pub fn dump(&self) {
        for i in (0..GPR_COUNT).step_by(4) {
            eprintln!(
                "R{:<2}={:<11} R{:<2}={:<11} R{:<2}={:<11} R{:<2}={}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1],
                i + 2,
                self.regs[i + 2],
                i + 3,
                self.regs[i + 3]
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
