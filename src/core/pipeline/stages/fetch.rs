use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::IfId;
use crate::core::Cpu;
use crate::isa::Disasm;

/// Fetches the instruction at the program counter.
///
/// During a load-use stall the program counter and IF/ID are left as they
/// were, so the same instruction is decoded again next cycle.
pub fn fetch_stage(cur: &Cpu, next: &mut Cpu, stall: bool) -> Result<(), SimError> {
    if stall {
        trace!("IF  pc={} held", cur.pc);
        return Ok(());
    }

    let instr = cur.fetch_word(cur.pc)?;
    trace!("IF  pc={} inst={}", cur.pc, Disasm(instr));

    next.pc = cur.pc.wrapping_add(1);
    next.if_id = IfId {
        instr,
        pc_plus1: next.pc,
    };
    Ok(())
}
