//! Instruction definitions.
//!
//! Provides the opcode vocabulary, the untyped `RawInstruction` split of a memory
//! record, and the typed `Instruction` the executor dispatches on.

use std::fmt;
use std::str::FromStr;

use crate::common::data::Word;
use crate::common::reg::Reg;
use crate::core::units::cache::CacheControl;

/// Mnemonic of the halt pseudo-opcode produced by the `0` sentinel.
pub const HALT_MNEMONIC: &str = "HALT";

/// Textual form of the halt sentinel.
const HALT_SENTINEL_TEXT: &str = "0";

/// The fixed opcode vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Register add.
    Add,
    /// Add immediate.
    Addi,
    /// Register subtract.
    Sub,
    /// Set on less than.
    Slt,
    /// Branch if not equal.
    Bne,
    /// Absolute jump.
    J,
    /// Jump and link.
    Jal,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Cache control.
    Cache,
    /// Stop the processor.
    Halt,
}

impl Opcode {
    /// Every opcode, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Addi,
        Self::Sub,
        Self::Slt,
        Self::Bne,
        Self::J,
        Self::Jal,
        Self::Lw,
        Self::Sw,
        Self::Cache,
        Self::Halt,
    ];

    /// Upper-case mnemonic as written in programs.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Addi => "ADDI",
            Self::Sub => "SUB",
            Self::Slt => "SLT",
            Self::Bne => "BNE",
            Self::J => "J",
            Self::Jal => "JAL",
            Self::Lw => "LW",
            Self::Sw => "SW",
            Self::Cache => "CACHE",
            Self::Halt => HALT_MNEMONIC,
        }
    }
}

impl FromStr for Opcode {
    type Err = ();

    /// Case-sensitive mnemonic lookup.
    fn from_str(s: &str) -> Result<Self, ()> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic() == s)
            .ok_or(())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A memory record split into opcode and operand tokens, before validation.
///
/// Building one never fails; `is_valid` tells whether the opcode is part of the
/// instruction set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawInstruction {
    /// Opcode token exactly as written (case preserved).
    pub opcode: String,
    /// Remaining tokens in order, each trimmed.
    pub operands: Vec<String>,
}

impl RawInstruction {
    /// Splits a memory word into tokens.
    ///
    /// The halt sentinel becomes `HALT` with no operands, whether it is stored
    /// as the integer `0` or as the text record `"0"`. Any other word is
    /// rendered as text, trimmed and split on commas.
    pub fn parse(word: &Word) -> Self {
        let text = word.to_string();
        if word.is_halt_sentinel() || text.trim() == HALT_SENTINEL_TEXT {
            return Self {
                opcode: HALT_MNEMONIC.to_string(),
                operands: Vec::new(),
            };
        }

        let mut tokens = text.trim().split(',').map(|t| t.trim().to_string());
        let opcode = tokens.next().unwrap_or_default();
        Self {
            opcode,
            operands: tokens.collect(),
        }
    }

    /// Returns `true` iff the opcode token names one of the eleven opcodes.
    pub fn is_valid(&self) -> bool {
        self.opcode.parse::<Opcode>().is_ok()
    }
}

/// A decoded instruction with typed operands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `rd <- rs + rt`
    Add {
        /// Destination.
        rd: Reg,
        /// First source.
        rs: Reg,
        /// Second source.
        rt: Reg,
    },
    /// `rt <- rs + imm`
    Addi {
        /// Destination.
        rt: Reg,
        /// Source.
        rs: Reg,
        /// Signed immediate.
        imm: i32,
    },
    /// `rd <- rs - rt`
    Sub {
        /// Destination.
        rd: Reg,
        /// Minuend.
        rs: Reg,
        /// Subtrahend.
        rt: Reg,
    },
    /// `rd <- (rs < rt) ? 1 : 0`
    Slt {
        /// Destination.
        rd: Reg,
        /// Left operand.
        rs: Reg,
        /// Right operand.
        rt: Reg,
    },
    /// `PC <- target * 4`
    J {
        /// Jump target before scaling.
        target: i32,
    },
    /// Cache mode/entry control.
    Cache {
        /// Requested control.
        control: CacheControl,
    },
    /// Valid opcode without execution semantics (BNE, JAL, LW, SW).
    Unimplemented {
        /// The opcode.
        opcode: Opcode,
        /// Operand tokens as written.
        operands: Vec<String>,
    },
    /// Stop the processor.
    Halt,
}

impl Instruction {
    /// Opcode of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Add { .. } => Opcode::Add,
            Self::Addi { .. } => Opcode::Addi,
            Self::Sub { .. } => Opcode::Sub,
            Self::Slt { .. } => Opcode::Slt,
            Self::J { .. } => Opcode::J,
            Self::Cache { .. } => Opcode::Cache,
            Self::Unimplemented { opcode, .. } => *opcode,
            Self::Halt => Opcode::Halt,
        }
    }

    /// Returns `true` for `HALT`.
    pub const fn is_halt(&self) -> bool {
        matches!(self, Self::Halt)
    }
}
