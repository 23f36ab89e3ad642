//! Instruction Disassembler.
//!
//! Renders a word as `<name> <regA> <regB> <imm16>`, the format used by the
//! state dump. Words whose opcode is not one of the eight LC-2K operations
//! print as `data`.
//!
//! ```
//! use lc2k_pipeline::isa::Disasm;
//! assert_eq!(Disasm(0x0000_0001).to_string(), "add 0 0 1");
//! assert_eq!(Disasm(0x1c0_0000).to_string(), "noop 0 0 0");
//! ```

use std::fmt;

use crate::isa::instruction::InstructionBits;

/// Display adapter for a single instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disasm(pub i32);

impl fmt::Display for Disasm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.0;
        let name = word.op().map_or("data", |op| op.mnemonic());
        write!(f, "{} {} {} {}", name, word.reg_a(), word.reg_b(), word.imm16())
    }
}

/// Disassembles a word into an owned string.
pub fn disassemble(word: i32) -> String {
    Disasm(word).to_string()
}
