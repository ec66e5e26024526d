//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the simulator.
//! It provides:
//! 1. **Defaults:** Baseline constants (memory size, run delay).
//! 2. **Structures:** General run-loop settings and memory settings.
//! 3. **Enums:** Instruction fetch policy.
//!
//! Configuration is supplied as JSON by the host (see [`Config::from_json`]) or built with
//! `Config::default()`. Every section and field is optional.

use std::time::Duration;

use serde::Deserialize;

use crate::common::ConfigError;
use crate::common::constants::{DEFAULT_MEMORY_SIZE, DEFAULT_RUN_DELAY_MS, WORD_SIZE};

/// Default configuration constants for the simulator.
mod defaults {
    use super::{DEFAULT_MEMORY_SIZE, DEFAULT_RUN_DELAY_MS};

    /// Total size of the byte-addressable memory (64 KiB).
    pub const MEMORY_SIZE: usize = DEFAULT_MEMORY_SIZE;

    /// Pause between steps of a continuous run.
    pub const RUN_DELAY_MS: u64 = DEFAULT_RUN_DELAY_MS;
}

/// How the simulator chooses the next instruction to execute.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Execute instructions in program order. Branches update `pc` but do not
    /// redirect the cursor.
    #[default]
    Sequential,

    /// Execute the instruction whose byte offset (`index * 4`) equals `pc`.
    /// Execution halts when `pc` does not land on an instruction.
    #[serde(alias = "Pc", alias = "PC")]
    ProgramCounter,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use armsim_core::config::{Config, FetchMode};
///
/// let json = r#"{
///     "general": { "run_delay_ms": 0, "max_cycles": 100, "fetch": "ProgramCounter" },
///     "memory": { "size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_cycles, Some(100));
/// assert_eq!(config.general.fetch, FetchMode::ProgramCounter);
/// assert_eq!(config.memory.size, 4096);
/// ```
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Run-loop and fetch settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory settings
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown enum values, and
    /// the validation errors of [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error when the memory cannot hold a single word or is larger than
    /// a 32-bit register can address.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size;
        if size < WORD_SIZE {
            return Err(ConfigError::MemoryTooSmall {
                size,
                min: WORD_SIZE,
            });
        }
        if size as u64 > u64::from(u32::MAX) + 1 {
            return Err(ConfigError::MemoryTooLarge { size });
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Pause between steps of a continuous run, in milliseconds. Zero disables the pause.
    #[serde(default = "GeneralConfig::default_run_delay_ms")]
    pub run_delay_ms: u64,

    /// Stop a continuous run once this many cycles have executed. `None` means no cap.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Instruction fetch policy.
    #[serde(default)]
    pub fetch: FetchMode,
}

impl GeneralConfig {
    fn default_run_delay_ms() -> u64 {
        defaults::RUN_DELAY_MS
    }

    /// Pause between steps of a continuous run.
    pub const fn run_delay(&self) -> Duration {
        Duration::from_millis(self.run_delay_ms)
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            run_delay_ms: defaults::RUN_DELAY_MS,
            max_cycles: None,
            fetch: FetchMode::Sequential,
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Memory size in bytes.
    #[serde(default = "MemoryConfig::default_size")]
    pub size: usize,
}

impl MemoryConfig {
    /// Returns the default memory size.
    fn default_size() -> usize {
        defaults::MEMORY_SIZE
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: defaults::MEMORY_SIZE,
        }
    }
}
