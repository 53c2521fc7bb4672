//! MIPS-style processor emulator library.
//!
//! This crate implements a small fetch-decode-execute emulator for a reduced,
//! MIPS-flavoured instruction set with the following:
//! 1. **Core:** Register file, program counter and a single-cycle run loop.
//! 2. **Memory:** Word-addressed main memory behind a write-through software cache.
//! 3. **ISA:** Textual instruction records decoded into typed instructions.
//! 4. **Simulation:** Program loader, configuration, and statistics collection.
//!
//! ```
//! use mipsim_core::common::Word;
//! use mipsim_core::Processor;
//!
//! let mut cpu = Processor::default();
//! cpu.load_program([
//!     Word::from("ADDI,R1,R0,5"),
//!     Word::from("ADDI,R2,R0,10"),
//!     Word::from("ADD,R3,R1,R2"),
//!     Word::Data(0),
//! ])
//! .unwrap();
//! cpu.run().unwrap();
//!
//! assert!(cpu.is_halted());
//! assert_eq!(cpu.regs.read_named("R3").unwrap(), 15);
//! ```

/// Common types (memory words, registers, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// Processor core (registers, run loop, executor, ALU, cache).
pub mod core;
/// Instruction set (opcodes, records, decoder, disassembler).
pub mod isa;
/// Program text loader.
pub mod sim;
/// Main memory.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main processor type; owns registers, memory, cache and stats.
pub use crate::core::Processor;
/// Fatal error type and result alias.
pub use crate::common::error::{Result, SimError};
