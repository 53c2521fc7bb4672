//! Core processor implementation.
//!
//! This module contains the processor and its run loop, the architectural
//! register storage, and the execution units (ALU and software cache).

/// Architecture-specific components (general-purpose registers).
pub mod arch;

/// Processor, run loop, executor and observers.
pub mod cpu;

/// Execution units (ALU, cache).
pub mod units;

pub use self::cpu::Processor;
