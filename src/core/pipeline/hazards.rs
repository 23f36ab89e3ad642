//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for detecting data hazards in the pipeline
//! and resolving them through operand forwarding or a one-cycle stall.
//!
//! Forwarding considers the three latches downstream of Execute as an ordered
//! list of candidates, from lowest to highest precedence:
//! WB/END, MEM/WB, EX/MEM. Every matching candidate overrides the operand, so
//! the most recently produced value wins.

use tracing::trace;

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes::Opcode;

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when the instruction in ID/EX is `lw` and its
/// destination (`regB`) matches either source field of the instruction in
/// IF/ID. The fields are compared whatever the IF/ID opcode is, so a bubble
/// (whose fields are zero) still stalls behind a load into register 0.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the instruction about to execute
/// * `if_id` - The IF/ID latch holding the instruction about to decode
///
/// # Returns
///
/// `true` if the pipeline must stall for one cycle.
pub fn need_stall_load_use(id_ex: &IdEx, if_id: &IfId) -> bool {
    if id_ex.instr.op() != Some(Opcode::Lw) {
        return false;
    }
    let dest = id_ex.instr.reg_b();
    dest == if_id.instr.reg_a() || dest == if_id.instr.reg_b()
}

/// Where an Execute operand came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForwardSource {
    /// Value read from the register file during decode.
    RegFile,
    /// Forwarded from the WB/END latch.
    WbEnd,
    /// Forwarded from the MEM/WB latch.
    MemWb,
    /// Forwarded from the EX/MEM latch.
    ExMem,
}

/// Operands supplied to the Execute stage after forwarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operands {
    /// Value of `regA`.
    pub a: i32,
    /// Value of `regB`.
    pub b: i32,
    /// Origin of `a`.
    pub a_src: ForwardSource,
    /// Origin of `b`.
    pub b_src: ForwardSource,
}

/// A latch that may hold a result not yet in the register file.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    source: ForwardSource,
    instr: i32,
    value: i32,
    /// Whether a `lw` in this latch has its data available.
    load_ready: bool,
}

impl Candidate {
    /// Register this candidate can supply, if any.
    fn produces(&self, mask_dest: bool) -> Option<usize> {
        match self.instr.op()? {
            Opcode::Add | Opcode::Nand => self.instr.dest(mask_dest),
            Opcode::Lw if self.load_ready => Some(self.instr.reg_b()),
            _ => None,
        }
    }
}

/// Builds the forwarding candidates in increasing order of precedence.
///
/// A load in EX/MEM has not read memory yet, so it never forwards.
fn candidates(ex_mem: &ExMem, mem_wb: &MemWb, wb_end: &WbEnd) -> [Candidate; 3] {
    [
        Candidate {
            source: ForwardSource::WbEnd,
            instr: wb_end.instr,
            value: wb_end.write_data,
            load_ready: true,
        },
        Candidate {
            source: ForwardSource::MemWb,
            instr: mem_wb.instr,
            value: mem_wb.write_data,
            load_ready: true,
        },
        Candidate {
            source: ForwardSource::ExMem,
            instr: ex_mem.instr,
            value: ex_mem.alu_result,
            load_ready: false,
        },
    ]
}

/// Forwards register values from later pipeline stages to resolve data hazards.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX entry requiring operands
/// * `ex_mem` - The EX/MEM latch (one instruction ahead)
/// * `mem_wb` - The MEM/WB latch (two instructions ahead)
/// * `wb_end` - The WB/END latch (three instructions ahead)
/// * `mask_dest` - Whether `add`/`nand` destinations are masked to three bits
///
/// # Returns
///
/// The forwarded `regA`/`regB` values with their sources.
pub fn forward_operands(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb_end: &WbEnd,
    mask_dest: bool,
) -> Operands {
    let need_a = id_ex.instr.reg_a();
    let need_b = id_ex.instr.reg_b();

    let mut ops = Operands {
        a: id_ex.read_reg_a,
        b: id_ex.read_reg_b,
        a_src: ForwardSource::RegFile,
        b_src: ForwardSource::RegFile,
    };

    for cand in candidates(ex_mem, mem_wb, wb_end) {
        let Some(dest) = cand.produces(mask_dest) else {
            continue;
        };
        if dest == need_a {
            trace!(
                "forward regA=r{} val={} source={:?} (prev: {:?})",
                need_a,
                cand.value,
                cand.source,
                ops.a_src
            );
            ops.a = cand.value;
            ops.a_src = cand.source;
        }
        if dest == need_b {
            trace!(
                "forward regB=r{} val={} source={:?} (prev: {:?})",
                need_b,
                cand.value,
                cand.source,
                ops.b_src
            );
            ops.b = cand.value;
            ops.b_src = cand.source;
        }
    }

    ops
}
