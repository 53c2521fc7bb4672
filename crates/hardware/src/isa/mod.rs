//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode vocabulary, the record splitter, the typed decoder and
//! the disassembler.
//!
//! # Record format
//!
//! An instruction is stored in memory as one comma-separated record:
//! the opcode mnemonic (case-sensitive) followed by its operands, e.g.
//! `ADDI,R1,R0,5`. The integer word `0` is the halt sentinel.
//!
//! | Opcode | Operands | Executed |
//! |---|---|---|
//! | `ADD`, `SUB`, `SLT` | `rd,rs,rt` | yes |
//! | `ADDI` | `rt,rs,imm` | yes |
//! | `J` | `target` | yes |
//! | `CACHE` | `code` (0, 1, 2) | yes |
//! | `BNE`, `JAL`, `LW`, `SW` | any | no, fatal `UnimplementedOpcode` |
//! | `HALT` / `0` | none | stops the run loop |

/// Typed instruction decoding.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcodes, raw records and typed instructions.
pub mod instruction;

pub use instruction::{Instruction, Opcode, RawInstruction};
