//! LC-2K Five-Stage Pipeline Simulator Library.
//!
//! This crate implements a cycle-accurate simulator for the LC-2K teaching
//! architecture: eight 32-bit registers, word-addressed memory and eight
//! opcodes, executed on a classic five-stage in-order pipeline.
//!
//! # Architecture
//!
//! * **Core**: Fetch, Decode, Execute, Memory and Writeback stages connected by
//!   five latches, with full forwarding and a one-cycle load-use stall.
//! * **Branches**: predicted not taken and resolved in the Memory stage.
//! * **Memory**: separate instruction and data memories loaded from the same
//!   image, or one unified memory.
//!
//! # Modules
//!
//! * `common`: Shared constants, access types and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: CPU state, pipeline and the per-cycle transition.
//! * `isa`: Instruction fields, encoders and disassembly.
//! * `sim`: Program loader and run loop.
//! * `stats`: Performance statistics collection.
//!
//! # Example
//!
//! ```
//! use lc2k_pipeline::config::Config;
//! use lc2k_pipeline::isa::{encode_o, encode_r, Opcode};
//! use lc2k_pipeline::sim::Simulator;
//!
//! let program = [encode_r(Opcode::Add, 0, 0, 1), encode_o(Opcode::Halt)];
//! let mut sim = Simulator::new(&program, &Config::default()).unwrap();
//! assert_eq!(sim.run().unwrap(), 5);
//! ```

/// Shared constants, memory access types and error definitions.
pub mod common;

/// Configuration system for memory geometry, access policy and output.
///
/// Loads and parses TOML configuration files; every field has a default.
pub mod config;

/// CPU core implementation including pipeline stages and execution units.
pub mod core;

/// Instruction Set Architecture definitions, encoders and disassembler.
pub mod isa;

/// Simulation harness and program loader.
pub mod sim;

/// Performance statistics collection and reporting.
pub mod stats;

pub use crate::config::Config;
pub use crate::core::Cpu;
pub use crate::sim::Simulator;
