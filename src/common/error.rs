//! Error definitions.
//!
//! The simulator distinguishes three families of failure:
//! 1. **Load-time:** the program image cannot be opened, parsed or does not fit.
//! 2. **Configuration:** the TOML configuration cannot be read or parsed.
//! 3. **Run-time:** a register index or memory address falls outside the
//!    machine while bounds checking is enabled, or the cycle limit elapses.
//!
//! HALT is not an error; it is reported through [`RunState`](crate::core::control::RunState).

use std::io;

use thiserror::Error;

use super::data::AccessType;

/// Faults raised by the pipeline while simulating.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// An `add`/`nand` destination field names a register that does not exist.
    ///
    /// The destination is taken from the unmasked 16-bit field, so any value
    /// of 8 or more reaches this path.
    #[error("register index {index} out of range (machine has 8 registers)")]
    RegisterOutOfRange {
        /// The offending register index.
        index: usize,
    },

    /// A fetch, load or store addressed a word outside memory.
    #[error("{access} address {addr} out of range for memory of {size} words")]
    AddressOutOfRange {
        /// Kind of access that faulted.
        access: AccessType,
        /// Word address computed by the pipeline.
        addr: i32,
        /// Memory capacity in words.
        size: usize,
    },

    /// The configured cycle limit elapsed before HALT reached the pipeline.
    #[error("cycle limit of {0} reached before the machine halted")]
    CycleLimitExceeded(u64),
}

/// Failures while turning a machine-code file into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be opened or read.
    #[error("can't open file {path}")]
    Open {
        /// Path given by the user.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line does not start with a decimal 32-bit integer.
    #[error("error in reading address {address}: {text:?} is not a decimal integer")]
    Parse {
        /// Memory address the line would have been loaded at.
        address: usize,
        /// Offending line contents.
        text: String,
    },

    /// The program has more words than memory can hold.
    #[error("exceeded memory size of {capacity} words")]
    CapacityExceeded {
        /// Memory capacity in words.
        capacity: usize,
    },
}

/// Failures while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}")]
    Io {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`Config`](crate::config::Config).
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}
