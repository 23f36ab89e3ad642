//! Functional units used by the pipeline stages.

/// Integer arithmetic logic unit.
pub mod alu;

pub use alu::Alu;
