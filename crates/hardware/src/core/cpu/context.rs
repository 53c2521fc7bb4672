//! Processor Context.
//!
//! Processor-wide control state that is shared between memory and the
//! executor: the cache (mode and entries) and the halt flag. It is owned by
//! the `Processor` and passed by reference into every operation that needs
//! it; nothing here is global.

use crate::core::units::cache::{Cache, CacheMode};

/// Processor-wide control state.
#[derive(Clone, Debug, Default)]
pub struct ProcessorContext {
    /// Software cache consulted by memory while ON.
    pub cache: Cache,
    /// Set by `HALT`; once true the run loop never fetches again.
    pub halted: bool,
}

impl ProcessorContext {
    /// Creates a running context whose cache starts in `mode`.
    pub fn new(mode: CacheMode) -> Self {
        Self {
            cache: Cache::new(mode),
            halted: false,
        }
    }
}
