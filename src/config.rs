//! Simulator configuration.
//!
//! Configuration is read from an optional TOML file. Every field has a
//! default so an empty file (or no file at all) yields the behaviour of the
//! classic machine: 65536-word split memories, no bounds checking and an
//! unmasked `add`/`nand` destination field.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::NUM_MEMORY;
use crate::common::error::ConfigError;

/// Root configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Output and driver settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory geometry and access policy.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Instruction decoding options.
    #[serde(default)]
    pub decode: DecodeConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Whether the per-cycle state dump should be printed.
    ///
    /// Always true when built with the `always-trace` feature.
    pub fn trace_enabled(&self) -> bool {
        cfg!(feature = "always-trace") || self.general.trace_state
    }
}

/// Format of the per-cycle state dump.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable `@@@` blocks.
    #[default]
    Text,
    /// One JSON object per cycle.
    Json,
}

/// Output and driver settings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Print the machine state before every cycle.
    #[serde(default)]
    pub trace_state: bool,

    /// Format of the per-cycle state dump.
    #[serde(default)]
    pub output: OutputFormat,

    /// Stop with an error if the machine has not halted after this many cycles.
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_state: false,
            output: OutputFormat::Text,
            max_cycles: None,
        }
    }
}

/// Memory geometry and access policy.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct MemoryConfig {
    /// Capacity of each memory in words.
    #[serde(default = "default_memory_size")]
    pub size: usize,

    /// Fetch from data memory so stores into the program are visible to fetch.
    #[serde(default)]
    pub unified: bool,

    /// Report out-of-range addresses and register indices as errors instead
    /// of reading zero and discarding writes.
    #[serde(default)]
    pub bounds_check: bool,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: default_memory_size(),
            unified: false,
            bounds_check: false,
        }
    }
}

fn default_memory_size() -> usize {
    NUM_MEMORY
}

/// Instruction decoding options.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Keep only the low three bits of the `add`/`nand` destination field.
    #[serde(default)]
    pub mask_dest_field: bool,
}
