//! Architectural register state.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::Gpr;
