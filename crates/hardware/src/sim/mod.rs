//! Simulation utilities and program loading.
//!
//! Provides utilities for reading program text into memory records.

pub mod loader;
