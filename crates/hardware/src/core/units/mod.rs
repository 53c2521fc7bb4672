//! Execution units and functional components.
//!
//! This module contains the integer ALU and the software word cache that main
//! memory consults.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Software address→value cache with OFF/ON modes.
pub mod cache;
