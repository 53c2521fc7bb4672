//! Architectural register storage.

/// General-Purpose Register file implementation.
pub mod gpr;
