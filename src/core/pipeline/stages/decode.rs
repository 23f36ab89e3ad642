use tracing::trace;

use crate::core::pipeline::latches::IdEx;
use crate::core::Cpu;
use crate::isa::instruction::InstructionBits;
use crate::isa::Disasm;

/// Decodes the instruction in IF/ID and reads its source registers.
///
/// On a load-use stall a bubble is inserted instead; it keeps the stalled
/// instruction's `pc_plus1` so downstream branch arithmetic stays in order.
pub fn decode_stage(cur: &Cpu, next: &mut Cpu, stall: bool) {
    let if_id = &cur.if_id;

    if stall {
        trace!("ID  bubble (pc+1={})", if_id.pc_plus1);
        next.id_ex = IdEx::bubble(if_id.pc_plus1);
        return;
    }

    let instr = if_id.instr;
    next.id_ex = IdEx {
        instr,
        pc_plus1: if_id.pc_plus1,
        read_reg_a: cur.regs.read(instr.reg_a()),
        read_reg_b: cur.regs.read(instr.reg_b()),
        offset: instr.offset(),
    };
    trace!(
        "ID  inst={} rA={} rB={} off={}",
        Disasm(instr),
        next.id_ex.read_reg_a,
        next.id_ex.read_reg_b,
        next.id_ex.offset
    );
}
