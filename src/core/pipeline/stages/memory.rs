use tracing::{debug, trace};

use crate::common::error::SimError;
use crate::core::control;
use crate::core::Cpu;
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Outcome of the Memory stage that the cycle report needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemOutcome {
    /// Target of a taken branch.
    pub redirect: Option<i32>,
    /// Number of real instructions squashed by the redirect.
    pub squashed: u32,
}

/// Performs the data access of the instruction in EX/MEM.
///
/// Loads read the committed data memory; stores write the shadow one. A
/// taken `beq` overrides the program counter chosen by fetch and squashes
/// IF/ID, ID/EX and EX/MEM in the shadow state. The MEM/WB write data is
/// only replaced for `add`, `nand` and `lw`.
pub fn mem_stage(cur: &Cpu, next: &mut Cpu) -> Result<MemOutcome, SimError> {
    let ex = cur.ex_mem;
    next.mem_wb.instr = ex.instr;

    match ex.instr.op() {
        Some(Opcode::Add | Opcode::Nand) => {
            next.mem_wb.write_data = ex.alu_result;
        }
        Some(Opcode::Lw) => {
            let val = cur.load_word(ex.alu_result)?;
            trace!("MEM LOAD addr={} data={}", ex.alu_result, val);
            next.mem_wb.write_data = val;
        }
        Some(Opcode::Sw) => {
            trace!("MEM STORE addr={} data={}", ex.alu_result, ex.read_reg_b);
            next.store_word(ex.alu_result, ex.read_reg_b)?;
        }
        _ => {}
    }

    let mut outcome = MemOutcome::default();
    if let Some(target) = control::branch_redirect(&ex) {
        debug!(branch_target = target, "branch taken");
        next.pc = target;
        outcome.redirect = Some(target);
        outcome.squashed =
            control::flush_on_redirect(&mut next.if_id, &mut next.id_ex, &mut next.ex_mem);
    }
    Ok(outcome)
}
