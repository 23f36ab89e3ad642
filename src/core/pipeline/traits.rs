//! Pipeline Latch Interface.
//!
//! Defines the behaviour shared by all five latches so flushes and bubble
//! checks can be applied uniformly.

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Instruction word currently held.
    fn instr(&self) -> i32;

    /// Replaces the held instruction with the NOOP sentinel.
    ///
    /// Only the instruction word changes; data fields keep their values and
    /// are ignored downstream because a NOOP neither writes nor forwards.
    fn flush(&mut self);

    /// Checks if the latch holds a NOOP.
    fn is_bubble(&self) -> bool {
        self.instr().op() == Some(Opcode::Noop)
    }
}
