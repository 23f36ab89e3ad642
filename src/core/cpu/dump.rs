//! Human-readable state dumps.
//!
//! `Display for Cpu` prints the `@@@` block shown before every cycle:
//! program counter, loaded data memory, registers and all five latches.
//! [`ProgramListing`] prints the image and its disassembly once at start-up.

use std::fmt;

use super::{Cpu, Memory};
use crate::isa::Disasm;

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "@@@")?;
        writeln!(f, "state before cycle {} starts", self.cycles)?;
        writeln!(f, "\tpc {}", self.pc)?;

        writeln!(f, "\tdata memory:")?;
        for (i, word) in self.mem.data().iter().enumerate() {
            writeln!(f, "\t\tdataMem[ {} ] {}", i, word)?;
        }
        writeln!(f, "\tregisters:")?;
        for (i, val) in self.regs.as_slice().iter().enumerate() {
            writeln!(f, "\t\treg[ {} ] {}", i, val)?;
        }

        writeln!(f, "\tIFID:")?;
        writeln!(f, "\t\tinstruction {}", Disasm(self.if_id.instr))?;
        writeln!(f, "\t\tpcPlus1 {}", self.if_id.pc_plus1)?;

        writeln!(f, "\tIDEX:")?;
        writeln!(f, "\t\tinstruction {}", Disasm(self.id_ex.instr))?;
        writeln!(f, "\t\tpcPlus1 {}", self.id_ex.pc_plus1)?;
        writeln!(f, "\t\treadRegA {}", self.id_ex.read_reg_a)?;
        writeln!(f, "\t\treadRegB {}", self.id_ex.read_reg_b)?;
        writeln!(f, "\t\toffset {}", self.id_ex.offset)?;

        writeln!(f, "\tEXMEM:")?;
        writeln!(f, "\t\tinstruction {}", Disasm(self.ex_mem.instr))?;
        writeln!(f, "\t\tbranchTarget {}", self.ex_mem.branch_target)?;
        writeln!(f, "\t\taluResult {}", self.ex_mem.alu_result)?;
        writeln!(f, "\t\treadRegB {}", self.ex_mem.read_reg_b)?;

        writeln!(f, "\tMEMWB:")?;
        writeln!(f, "\t\tinstruction {}", Disasm(self.mem_wb.instr))?;
        writeln!(f, "\t\twriteData {}", self.mem_wb.write_data)?;

        writeln!(f, "\tWBEND:")?;
        writeln!(f, "\t\tinstruction {}", Disasm(self.wb_end.instr))?;
        writeln!(f, "\t\twriteData {}", self.wb_end.write_data)
    }
}

/// Start-up listing of a loaded program.
#[derive(Clone, Copy, Debug)]
pub struct ProgramListing<'a>(pub &'a Memory);

impl fmt::Display for ProgramListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mem = self.0;
        for (i, word) in mem.data().iter().enumerate() {
            writeln!(f, "memory[{}]={}", i, word)?;
        }
        writeln!(f, "{} memory words", mem.len())?;
        writeln!(f, "\tinstruction memory:")?;
        for (i, word) in mem.instructions().iter().enumerate() {
            writeln!(f, "\t\tinstrMem[ {} ] {}", i, Disasm(*word))?;
        }
        Ok(())
    }
}
