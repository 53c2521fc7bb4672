//! Main Memory.
//!
//! This module implements the word-addressed main memory. It provides:
//! 1. **Storage:** A fixed number of zero-initialized `Word` cells.
//! 2. **Bounds checking:** Every access outside `[0, capacity)` is a fatal fault.
//! 3. **Cache routing:** Loads and stores consult the software cache while it is ON.
//!
//! Stores are write-through: backing storage is always updated, and the cache
//! entry is updated as well when the cache is ON. While the cache is OFF it is
//! not consulted at all, so entries left over from an earlier ON period can never
//! be observed.

use tracing::trace;

use crate::common::data::Word;
use crate::common::error::{Result, SimError};
use crate::core::units::cache::Cache;

/// Word-addressed main memory.
#[derive(Clone, Debug)]
pub struct Memory {
    cells: Vec<Word>,
}

impl Memory {
    /// Creates a memory of `capacity` words, all `Data(0)`.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: vec![Word::default(); capacity],
        }
    }

    /// Capacity in words.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `address` names a cell.
    pub fn in_bounds(&self, address: i64) -> bool {
        self.index(address).is_some()
    }

    fn index(&self, address: i64) -> Option<usize> {
        usize::try_from(address)
            .ok()
            .filter(|&i| i < self.cells.len())
    }

    fn checked_index(&self, address: i64) -> Result<usize> {
        self.index(address).ok_or(SimError::OutOfBounds {
            address,
            capacity: self.cells.len(),
        })
    }

    /// Loads the word at `address`, consulting `cache` when it is ON.
    ///
    /// # Arguments
    ///
    /// * `address` - Word address
    /// * `cache` - Processor cache; hit/miss counters are updated in ON mode
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `address` is outside `[0, capacity)`.
    pub fn load(&self, address: i64, cache: &mut Cache) -> Result<Word> {
        let idx = self.checked_index(address)?;

        if !cache.is_enabled() {
            return Ok(self.cells[idx].clone());
        }

        if let Some(word) = cache.lookup(idx) {
            let word = word.clone();
            cache.hits += 1;
            trace!(address = idx, "cache hit");
            return Ok(word);
        }

        let word = self.cells[idx].clone();
        cache.misses += 1;
        cache.fill(idx, word.clone());
        trace!(address = idx, "cache miss, populated");
        Ok(word)
    }

    /// Stores `value` at `address` (write-through).
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `address` is outside `[0, capacity)`.
    pub fn store(&mut self, address: i64, value: Word, cache: &mut Cache) -> Result<()> {
        let idx = self.checked_index(address)?;

        if cache.is_enabled() {
            cache.fill(idx, value.clone());
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Reads backing storage directly, ignoring the cache.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `address` is outside `[0, capacity)`.
    pub fn peek(&self, address: i64) -> Result<&Word> {
        let idx = self.checked_index(address)?;
        Ok(&self.cells[idx])
    }

    /// Writes backing storage directly without updating the cache.
    ///
    /// This is the only path that can leave a cache entry stale: a later load in
    /// ON mode still returns the old cached value until the entry is flushed.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `address` is outside `[0, capacity)`.
    pub fn poke(&mut self, address: i64, value: Word) -> Result<()> {
        let idx = self.checked_index(address)?;
        self.cells[idx] = value;
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(crate::config::MemoryConfig::default().size_words)
    }
}
