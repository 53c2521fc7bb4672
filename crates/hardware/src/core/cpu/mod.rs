//! Processor Definition and Run Loop.
//!
//! This module defines the central `Processor` structure, which owns the entire
//! machine state and drives the fetch-decode-execute cycle. It coordinates:
//! 1. **State Management:** Registers, program counter, memory and the processor context.
//! 2. **Run Loop:** Fetch at PC, decode, halt or execute, advance PC.
//! 3. **Observability:** Tracing, statistics and `ExecutionObserver` callbacks.
//!
//! The loop is a two-state machine: RUNNING until a halt record is fetched,
//! then HALTED for good. Any error stops the loop and is returned unchanged.

/// Processor-wide control state shared with memory and the executor.
pub mod context;

/// Instruction dispatch.
pub mod execution;

/// Program loading and instruction fetch.
pub mod memory;

/// Execution event callbacks.
pub mod observer;

use tracing::{debug, info};

use self::context::ProcessorContext;
use self::execution::{Executor, Flow};
use self::observer::ExecutionObserver;
use crate::common::error::Result;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::units::cache::CacheMode;
use crate::isa::Instruction;
use crate::soc::memory::Memory;
use crate::stats::SimStats;

/// Result of a single `Processor::step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction fetched from `pc` was executed.
    Retired {
        /// Address the instruction was fetched from.
        pc: i64,
        /// The executed instruction.
        instruction: Instruction,
    },
    /// The processor is halted; nothing was executed.
    Halted,
}

/// The emulated processor: owns registers, memory, cache state and the halt flag.
#[derive(Debug)]
pub struct Processor {
    /// General-purpose registers and program counter.
    pub regs: RegisterFile,
    /// Main memory.
    pub memory: Memory,
    /// Cache and halt flag.
    pub ctx: ProcessorContext,
    /// Performance statistics.
    pub stats: SimStats,
    /// Log each instruction at `info` instead of `debug`.
    pub trace: bool,
}

impl Processor {
    /// Creates a processor from `config`: zeroed registers, zeroed memory of
    /// `memory.size_words` words, PC at `general.start_pc`.
    pub fn new(config: &Config) -> Self {
        let mode = if config.cache.enabled {
            CacheMode::On
        } else {
            CacheMode::Off
        };
        let mut regs = RegisterFile::new();
        regs.set_pc(config.general.start_pc);

        Self {
            regs,
            memory: Memory::new(config.memory.size_words),
            ctx: ProcessorContext::new(mode),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Returns `true` once a halt record has been fetched.
    pub const fn is_halted(&self) -> bool {
        self.ctx.halted
    }

    /// Runs one fetch-decode-execute cycle.
    ///
    /// # Errors
    ///
    /// Any fetch, decode or execute error; the PC is left at the faulting
    /// instruction.
    pub fn step(&mut self) -> Result<StepOutcome> {
        self.step_with(&mut ())
    }

    /// Runs one cycle, reporting events to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`Processor::step`].
    pub fn step_with<O>(&mut self, observer: &mut O) -> Result<StepOutcome>
    where
        O: ExecutionObserver + ?Sized,
    {
        if self.ctx.halted {
            return Ok(StepOutcome::Halted);
        }

        let pc = self.regs.pc();
        let word = self.fetch()?;
        self.stats.sync_cache(&self.ctx.cache);
        let instruction = Instruction::decode(&word)?;

        if instruction.is_halt() {
            self.ctx.halted = true;
            info!(pc, "halted");
            observer.on_halt(pc);
            return Ok(StepOutcome::Halted);
        }

        if self.trace {
            info!(pc, %instruction, "execute");
        } else {
            debug!(pc, %instruction, "execute");
        }

        let flow = Executor::new(&mut self.regs, &mut self.ctx).execute(&instruction)?;
        if flow == Flow::Next {
            self.regs.set_pc(pc + 1);
        }

        self.stats.record(&instruction);
        if let Instruction::Cache { control } = &instruction {
            observer.on_cache_control(*control);
        }
        observer.on_retire(pc, &instruction, &self.regs.snapshot());

        Ok(StepOutcome::Retired { pc, instruction })
    }

    /// Runs until halted.
    ///
    /// # Errors
    ///
    /// The first error raised by any cycle; execution stops there.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(&mut ())
    }

    /// Runs until halted, reporting events to `observer`.
    ///
    /// # Errors
    ///
    /// The first error raised by any cycle; execution stops there.
    pub fn run_with<O>(&mut self, observer: &mut O) -> Result<()>
    where
        O: ExecutionObserver + ?Sized,
    {
        while !self.ctx.halted {
            let _ = self.step_with(observer)?;
        }
        Ok(())
    }

    /// Dumps the register file to stderr.
    pub fn dump_state(&self) {
        self.regs.dump();
        eprintln!(
            "Cache: {:?} ({} entries), halted={}",
            self.ctx.cache.mode(),
            self.ctx.cache.len(),
            self.ctx.halted
        );
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
