//! Software Word Cache.
//!
//! This module implements the address→value overlay that memory consults on
//! every access while the cache is ON. It models:
//! 1. **Mode:** OFF (bypass) or ON (consult and fill).
//! 2. **Control:** The three `CACHE` codes (OFF, ON, FLUSH) and their notifications.
//! 3. **Statistics:** Hit and miss counters; a miss in ON mode is a populate event.
//!
//! The cache never holds the only copy of a value: stores always write through to
//! memory, so dropping every entry at any time is safe.

use std::collections::HashMap;
use std::fmt;

use tracing::info;

use crate::common::data::Word;
use crate::common::error::SimError;

/// Whether memory consults the cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Loads and stores bypass the cache entirely.
    #[default]
    Off,
    /// Loads are served from the cache when possible; stores update it.
    On,
}

/// Operand of the `CACHE` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheControl {
    /// Code 0: drop every entry and switch to OFF.
    Off,
    /// Code 1: switch to ON, keeping existing entries.
    On,
    /// Code 2: drop every entry, mode unchanged.
    Flush,
}

impl CacheControl {
    /// Numeric code as written in programs.
    pub const fn code(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::Flush => 2,
        }
    }

    /// Notification printed when the control takes effect.
    pub const fn notification(self) -> &'static str {
        match self {
            Self::Off => "Cache OFF",
            Self::On => "Cache ON",
            Self::Flush => "Cache FLUSHED",
        }
    }
}

impl TryFrom<i32> for CacheControl {
    type Error = SimError;

    fn try_from(code: i32) -> Result<Self, SimError> {
        match code {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            2 => Ok(Self::Flush),
            other => Err(SimError::InvalidCacheCode(other)),
        }
    }
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notification())
    }
}

/// Address→value overlay in front of main memory.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    /// Loads served from an entry.
    pub hits: u64,
    /// Loads that had to read memory and populate an entry.
    pub misses: u64,
    mode: CacheMode,
    entries: HashMap<usize, Word>,
}

impl Cache {
    /// Creates an empty cache in the given mode.
    pub fn new(mode: CacheMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Current mode.
    pub const fn mode(&self) -> CacheMode {
        self.mode
    }

    /// Returns `true` while the cache is ON.
    pub fn is_enabled(&self) -> bool {
        self.mode == CacheMode::On
    }

    /// Applies a `CACHE` control code.
    pub fn apply(&mut self, control: CacheControl) {
        match control {
            CacheControl::Off => {
                self.mode = CacheMode::Off;
                self.flush();
            }
            CacheControl::On => self.mode = CacheMode::On,
            CacheControl::Flush => self.flush(),
        }
        info!(code = control.code(), mode = ?self.mode, "{}", control.notification());
    }

    /// Drops every entry without touching the mode.
    pub fn flush(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if an entry exists for `addr`, regardless of mode.
    pub fn contains(&self, addr: usize) -> bool {
        self.entries.contains_key(&addr)
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn lookup(&self, addr: usize) -> Option<&Word> {
        self.entries.get(&addr)
    }

    pub(crate) fn fill(&mut self, addr: usize, word: Word) {
        let _ = self.entries.insert(addr, word);
    }
}
