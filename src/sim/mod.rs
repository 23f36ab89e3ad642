//! Simulation harness.
//!
//! Loads machine-code programs and drives the core cycle by cycle until it
//! halts, collecting statistics along the way.

/// Machine-code file loader.
pub mod loader;

/// Run loop around a [`Cpu`](crate::core::Cpu).
pub mod simulator;

pub use loader::{load_program, parse_program};
pub use simulator::Simulator;
