//! Memory system.
//!
//! Holds the word-addressed main memory the processor fetches from.

/// Main memory with bounds checking and cache routing.
pub mod memory;
