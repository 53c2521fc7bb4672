//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Memory Words:** The value held by one memory cell (data or instruction record).
//! 2. **Error Handling:** The fatal error type and crate-wide `Result` alias.
//! 3. **Register Management:** Register names, the register file and snapshots.

/// Memory word definitions.
pub mod data;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use data::Word;
pub use error::{Result, SimError};
pub use reg::{Reg, RegisterFile, RegisterSnapshot};
