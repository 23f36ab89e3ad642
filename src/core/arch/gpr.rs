//! LC-2K General-Purpose Register File.
//!
//! Eight 32-bit registers, all zero at reset. Register 0 is an ordinary
//! register: it is not hardwired to zero and may be written.

use crate::common::constants::NUM_REGS;
use crate::common::error::SimError;

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with all registers set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// Source fields are three bits wide, so decode never produces an index
    /// outside the file; out-of-range reads return 0.
    pub fn read(&self, idx: usize) -> i32 {
        self.regs.get(idx).copied().unwrap_or(0)
    }

    /// Writes a register.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::RegisterOutOfRange`] if `idx` is 8 or more.
    pub fn write(&mut self, idx: usize, val: i32) -> Result<(), SimError> {
        let slot = self
            .regs
            .get_mut(idx)
            .ok_or(SimError::RegisterOutOfRange { index: idx })?;
        *slot = val;
        Ok(())
    }

    /// All register values in index order.
    pub fn as_slice(&self) -> &[i32] {
        &self.regs
    }
}
