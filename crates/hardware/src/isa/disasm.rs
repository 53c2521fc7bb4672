//! Instruction Disassembler.
//!
//! Renders a decoded `Instruction` back into the canonical comma-separated
//! record form for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::common::Word;
//! use mipsim_core::isa::Instruction;
//!
//! let inst = Instruction::decode(&Word::from(" ADD, R3 ,R1,R2 ")).unwrap();
//! assert_eq!(inst.to_string(), "ADD,R3,R1,R2");
//! ```

use std::fmt;

use crate::isa::instruction::Instruction;

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match self {
            Self::Add { rd, rs, rt } | Self::Sub { rd, rs, rt } | Self::Slt { rd, rs, rt } => {
                write!(f, "{op},{rd},{rs},{rt}")
            }
            Self::Addi { rt, rs, imm } => write!(f, "{op},{rt},{rs},{imm}"),
            Self::J { target } => write!(f, "{op},{target}"),
            Self::Cache { control } => write!(f, "{op},{}", control.code()),
            Self::Unimplemented { operands, .. } => {
                f.write_str(op.mnemonic())?;
                for operand in operands {
                    write!(f, ",{operand}")?;
                }
                Ok(())
            }
            Self::Halt => f.write_str(op.mnemonic()),
        }
    }
}
