use tracing::trace;

use crate::core::pipeline::hazards::forward_operands;
use crate::core::pipeline::latches::ExMem;
use crate::core::units::Alu;
use crate::core::Cpu;
use crate::isa::instruction::InstructionBits;
use crate::isa::Disasm;

/// Executes the instruction in ID/EX.
///
/// The branch target is computed for every instruction; only a `beq`
/// that resolves as taken in the Memory stage uses it.
pub fn execute_stage(cur: &Cpu, next: &mut Cpu) {
    let id_ex = &cur.id_ex;
    let ops = forward_operands(id_ex, &cur.ex_mem, &cur.mem_wb, &cur.wb_end, cur.mask_dest);
    let alu_result = Alu::execute(id_ex.instr.op(), ops.a, ops.b, id_ex.offset);

    next.ex_mem = ExMem {
        instr: id_ex.instr,
        branch_target: id_ex.pc_plus1.wrapping_add(id_ex.offset),
        alu_result,
        read_reg_b: ops.b,
    };
    trace!(
        "EX  inst={} a={} b={} alu={}",
        Disasm(id_ex.instr),
        ops.a,
        ops.b,
        alu_result
    );
}
