//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used by the
//! simulator. The access type is carried in out-of-range errors so a fault
//! report can tell an instruction fetch apart from a load or a store.

use std::fmt;

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Instruction fetch from instruction memory.
    Fetch,

    /// Data read performed by `lw`.
    Read,

    /// Data write performed by `sw`.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::Fetch => write!(f, "fetch"),
            AccessType::Read => write!(f, "load"),
            AccessType::Write => write!(f, "store"),
        }
    }
}
