//! LC-2K pipelined core.
//!
//! The core is a single-issue, five-stage in-order pipeline (Fetch, Decode,
//! Execute, Memory, Writeback) with full forwarding, a one-cycle load-use
//! stall and predict-not-taken branches resolved in the Memory stage.

/// Architectural register state.
pub mod arch;

/// Halt detection and branch redirection.
pub mod control;

/// Machine state and the per-cycle transition function.
pub mod cpu;

/// Pipeline latches, hazard logic and stages.
pub mod pipeline;

/// Functional units.
pub mod units;

pub use cpu::{Cpu, CycleReport};
