//! Machine-readable state snapshot, serialized with serde.

use serde::Serialize;

use super::Cpu;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::disasm::disassemble;

/// State of the machine before a cycle, borrowed from a [`Cpu`].
#[derive(Debug, Serialize)]
pub struct StateSnapshot<'a> {
    pub cycle: u64,
    pub pc: i32,
    pub data_memory: &'a [i32],
    pub registers: &'a [i32],
    pub if_id: IfId,
    pub id_ex: IdEx,
    pub ex_mem: ExMem,
    pub mem_wb: MemWb,
    pub wb_end: WbEnd,
    /// Disassembly of the five latches, IF/ID first.
    pub in_flight: [String; 5],
}

impl Cpu {
    /// Borrows a snapshot of the current state.
    pub fn snapshot(&self) -> StateSnapshot<'_> {
        StateSnapshot {
            cycle: self.cycles,
            pc: self.pc,
            data_memory: self.mem.data(),
            registers: self.regs.as_slice(),
            if_id: self.if_id,
            id_ex: self.id_ex,
            ex_mem: self.ex_mem,
            mem_wb: self.mem_wb,
            wb_end: self.wb_end,
            in_flight: [
                disassemble(self.if_id.instr),
                disassemble(self.id_ex.instr),
                disassemble(self.ex_mem.instr),
                disassemble(self.mem_wb.instr),
                disassemble(self.wb_end.instr),
            ],
        }
    }

    /// Serializes the current state as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}
