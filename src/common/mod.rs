//! Common utilities and types used throughout the LC-2K pipeline simulator.
//!
//! This module provides the fundamental constants, memory access
//! classification, and error types shared by the core, the loader and
//! the command-line driver.

/// Machine-wide constants (memory capacity, register count, sentinels).
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for loading, configuration and run-time faults.
pub mod error;

pub use constants::{NOOP_INSTRUCTION, NUM_MEMORY, NUM_REGS};
pub use data::AccessType;
pub use error::{ConfigError, LoadError, SimError};
