use tracing::trace;

use crate::common::error::SimError;
use crate::core::pipeline::latches::WbEnd;
use crate::core::pipeline::traits::PipelineLatch;
use crate::core::Cpu;
use crate::isa::instruction::InstructionBits;

/// Retires the instruction in MEM/WB.
///
/// `lw` writes `regB`; `add` and `nand` write the register named by their
/// destination field. Everything else writes nothing.
///
/// # Returns
///
/// The retired instruction word, or `None` for a bubble.
pub fn wb_stage(cur: &Cpu, next: &mut Cpu) -> Result<Option<i32>, SimError> {
    let wb = cur.mem_wb;
    next.wb_end = WbEnd {
        instr: wb.instr,
        write_data: wb.write_data,
    };

    if let Some(dest) = wb.instr.dest(cur.mask_dest) {
        trace!("WB  r{} <= {}", dest, wb.write_data);
        next.write_reg(dest, wb.write_data)?;
    }

    Ok((!next.wb_end.is_bubble()).then_some(wb.instr))
}
