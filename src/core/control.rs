//! Control and Termination Logic.
//!
//! The machine is either running or halted. It halts when a `halt`
//! instruction reaches the MEM/WB latch, checked at the start of a cycle
//! before any stage runs. Branches are resolved in the Memory stage with a
//! predict-not-taken policy: a taken `beq` redirects fetch and squashes the
//! three younger instructions in IF/ID, ID/EX and EX/MEM.

use tracing::debug;

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb};
use crate::core::pipeline::traits::PipelineLatch;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Execution state of the machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// Cycles are being simulated.
    #[default]
    Running,
    /// A `halt` reached MEM/WB. Terminal.
    Halted,
}

/// Whether the machine must stop before simulating the next cycle.
pub fn should_halt(mem_wb: &MemWb) -> bool {
    mem_wb.instr.op() == Some(Opcode::Halt)
}

/// Target of a taken branch in EX/MEM, if any.
///
/// A `beq` is taken when its ALU result (`regA - regB`) is zero.
pub fn branch_redirect(ex_mem: &ExMem) -> Option<i32> {
    (ex_mem.instr.op() == Some(Opcode::Beq) && ex_mem.alu_result == 0)
        .then_some(ex_mem.branch_target)
}

/// Squashes the instructions fetched after a taken branch.
///
/// # Returns
///
/// Number of squashed latches that held a real instruction.
pub fn flush_on_redirect(if_id: &mut IfId, id_ex: &mut IdEx, ex_mem: &mut ExMem) -> u32 {
    let latches: [&mut dyn PipelineLatch; 3] = [if_id, id_ex, ex_mem];
    let mut squashed = 0;
    for latch in latches {
        if !latch.is_bubble() {
            squashed += 1;
        }
        latch.flush();
    }
    debug!(squashed, "flushed IF/ID, ID/EX, EX/MEM");
    squashed
}
