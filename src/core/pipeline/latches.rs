//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch holds exactly one instruction: the output of one stage,
//! consumed by the next stage on the following cycle. An empty slot holds
//! the NOOP sentinel. All latches start out as NOOP bubbles.

use serde::Serialize;

use crate::common::constants::NOOP_INSTRUCTION;
use crate::core::pipeline::traits::PipelineLatch;

/// IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IfId {
    /// Fetched instruction word.
    pub instr: i32,
    /// Address of the fetched instruction plus one.
    pub pc_plus1: i32,
}

/// ID/EX pipeline latch (Decode to Execute stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdEx {
    /// Decoded instruction word.
    pub instr: i32,
    /// Address of the instruction plus one.
    pub pc_plus1: i32,
    /// Register-file value of `regA`, before forwarding.
    pub read_reg_a: i32,
    /// Register-file value of `regB`, before forwarding.
    pub read_reg_b: i32,
    /// Sign-extended 16-bit offset.
    pub offset: i32,
}

/// EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExMem {
    /// Executed instruction word.
    pub instr: i32,
    /// `pc + 1 + offset`, computed for every instruction.
    pub branch_target: i32,
    /// ALU output: result, effective address or `regA - regB` for `beq`.
    pub alu_result: i32,
    /// Forwarded `regB` value, the store data for `sw`.
    pub read_reg_b: i32,
}

/// MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemWb {
    /// Instruction word.
    pub instr: i32,
    /// Value to write back: ALU result or loaded word.
    pub write_data: i32,
}

/// WB/END pipeline latch (Writeback to Retire).
///
/// Holds the instruction retired last cycle so its result can still be
/// forwarded to Execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WbEnd {
    /// Retired instruction word.
    pub instr: i32,
    /// Value that was written back.
    pub write_data: i32,
}

impl IdEx {
    /// A NOOP bubble that still carries `pc_plus1` from the stalled instruction.
    pub fn bubble(pc_plus1: i32) -> Self {
        Self {
            pc_plus1,
            ..Self::default()
        }
    }
}

impl Default for IfId {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            pc_plus1: 0,
        }
    }
}

impl Default for IdEx {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            pc_plus1: 0,
            read_reg_a: 0,
            read_reg_b: 0,
            offset: 0,
        }
    }
}

impl Default for ExMem {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            branch_target: 0,
            alu_result: 0,
            read_reg_b: 0,
        }
    }
}

impl Default for MemWb {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            write_data: 0,
        }
    }
}

impl Default for WbEnd {
    fn default() -> Self {
        Self {
            instr: NOOP_INSTRUCTION,
            write_data: 0,
        }
    }
}

macro_rules! impl_latch {
    ($($latch:ty),+) => {
        $(
            impl PipelineLatch for $latch {
                fn instr(&self) -> i32 {
                    self.instr
                }

                fn flush(&mut self) {
                    self.instr = NOOP_INSTRUCTION;
                }
            }
        )+
    };
}

impl_latch!(IfId, IdEx, ExMem, MemWb, WbEnd);
