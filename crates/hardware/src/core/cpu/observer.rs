//! Execution Observers.
//!
//! The processor reports what it does through the `ExecutionObserver` trait so
//! that front ends can print register dumps or cache notifications without the
//! core doing any I/O itself. Every method has an empty default; `()` is the
//! observer that ignores everything.

use crate::common::reg::RegisterSnapshot;
use crate::core::units::cache::CacheControl;
use crate::isa::Instruction;

/// Receives processor events during `Processor::run_with`.
pub trait ExecutionObserver {
    /// Called after every executed (non-halt) instruction.
    ///
    /// `pc` is the address the instruction was fetched from; `regs` is the
    /// register state after it executed.
    fn on_retire(&mut self, pc: i64, instruction: &Instruction, regs: &RegisterSnapshot) {
        let _ = (pc, instruction, regs);
    }

    /// Called when a `CACHE` instruction takes effect, before `on_retire`.
    fn on_cache_control(&mut self, control: CacheControl) {
        let _ = control;
    }

    /// Called once when the processor halts, with the PC of the halt record.
    fn on_halt(&mut self, pc: i64) {
        let _ = pc;
    }
}

impl ExecutionObserver for () {}
