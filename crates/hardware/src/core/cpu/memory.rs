//! Memory Access Helpers.
//!
//! This module contains the `Processor` methods that touch main memory:
//! program loading and instruction fetch. Both route through the cache
//! according to the current mode.

use tracing::{debug, trace};

use super::Processor;
use crate::common::data::Word;
use crate::common::error::{Result, SimError};

impl Processor {
    /// Stores `program` at consecutive addresses starting at 0.
    ///
    /// Records go through the normal store path under the current cache mode.
    /// The size check happens before anything is written, so an oversized
    /// program leaves memory untouched.
    ///
    /// # Errors
    ///
    /// `ProgramTooLarge` if `program` has more records than memory has words.
    pub fn load_program<I>(&mut self, program: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Word>,
    {
        let records: Vec<Word> = program.into_iter().map(Into::into).collect();
        let capacity = self.memory.capacity();
        if records.len() > capacity {
            return Err(SimError::ProgramTooLarge {
                len: records.len(),
                capacity,
            });
        }

        debug!(records = records.len(), capacity, "loading program");
        for (addr, record) in (0_i64..).zip(records) {
            self.memory.store(addr, record, &mut self.ctx.cache)?;
        }
        Ok(())
    }

    /// Fetches the word at the current PC through the cache.
    ///
    /// # Errors
    ///
    /// `ProgramCounterOutOfBounds` if the PC is outside memory.
    pub(crate) fn fetch(&mut self) -> Result<Word> {
        let pc = self.regs.pc();
        if !self.memory.in_bounds(pc) {
            return Err(SimError::ProgramCounterOutOfBounds {
                pc,
                capacity: self.memory.capacity(),
            });
        }
        self.stats.fetches += 1;
        let word = self.memory.load(pc, &mut self.ctx.cache)?;
        trace!(pc, %word, "fetch");
        Ok(word)
    }
}
