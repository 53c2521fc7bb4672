//! Simulator error definitions.
//!
//! Every condition in this module is fatal: the run loop stops at the first
//! error and hands it to the caller unchanged. It provides:
//! 1. **Memory faults:** Out-of-range data accesses and program counter drift.
//! 2. **Decode faults:** Unknown opcodes, registers, immediates and operand counts.
//! 3. **Execution faults:** Invalid cache codes and undispatched opcodes.
//! 4. **Host faults:** Program/config loading failures.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Fatal simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// Data access outside `[0, capacity)`.
    #[error("memory address {address} out of bounds (capacity {capacity})")]
    OutOfBounds {
        /// The faulting word address.
        address: i64,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// Register name that is not one of `R0`..`R31`.
    #[error("unknown register '{0}'")]
    UnknownRegister(String),

    /// `CACHE` operand outside {0, 1, 2}.
    #[error("invalid cache code {0} (expected 0, 1 or 2)")]
    InvalidCacheCode(i32),

    /// The program counter left memory before a fetch.
    #[error("program counter out of bounds: {pc} (capacity {capacity})")]
    ProgramCounterOutOfBounds {
        /// The faulting program counter.
        pc: i64,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// The program has more records than memory has words.
    #[error("program size {len} exceeds memory size ({capacity})")]
    ProgramTooLarge {
        /// Number of records supplied.
        len: usize,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// A valid opcode with no execution semantics was reached.
    #[error("opcode {0} is recognized but not implemented")]
    UnimplementedOpcode(String),

    /// A record whose opcode is not part of the instruction set.
    #[error("illegal instruction '{0}'")]
    IllegalInstruction(String),

    /// A recognized opcode with the wrong number of operands.
    #[error("{opcode} expects {expected} operand(s), found {found}")]
    OperandCount {
        /// Opcode mnemonic.
        opcode: &'static str,
        /// Operands the opcode takes.
        expected: usize,
        /// Operands supplied.
        found: usize,
    },

    /// An operand that should be a decimal integer is not.
    #[error("invalid immediate '{0}'")]
    InvalidImmediate(String),

    /// Reading a program or config file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
