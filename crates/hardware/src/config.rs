//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline constants (memory size, start PC, cache state).
//! 2. **Structures:** Hierarchical config for general, memory and cache settings.
//!
//! Configuration is supplied as JSON (`Config::from_json`) or built with `Config::default()`.
//! Every field is optional in JSON; missing fields take the default.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::Result;

/// Default configuration constants for the simulator.
mod defaults {
    /// Main memory capacity in words.
    pub const MEMORY_WORDS: usize = 1024;

    /// Program counter at reset; programs are loaded from address 0.
    pub const START_PC: i64 = 0;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "memory": { "size_words": 64 },
///     "cache": { "enabled": true }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.memory.size_words, 64);
/// assert!(config.cache.enabled);
/// assert_eq!(config.general.start_pc, 0);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Main memory configuration
    pub memory: MemoryConfig,
    /// Cache configuration
    pub cache: CacheConfig,
}

impl Config {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// `SimError::Config` if the document is malformed or has mistyped fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// `SimError::Io` if the file cannot be read, `SimError::Config` if it does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log every fetched instruction at `info` level instead of `debug`.
    pub trace_instructions: bool,

    /// Initial PC value (word address).
    pub start_pc: i64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Capacity in words.
    pub size_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_words: defaults::MEMORY_WORDS,
        }
    }
}

/// Cache configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether the cache starts in ON mode. Programs normally switch it with `CACHE,1`.
    pub enabled: bool,
}
