//! LC-2K Opcodes.
//!
//! Defines the raw opcode numbers (bits 24-22) and a decoded enum. Any
//! opcode value outside 0-7 marks the word as data.

use crate::isa::instruction::InstructionBits;

/// Register-register add.
pub const OP_ADD: i32 = 0;

/// Register-register bitwise NAND.
pub const OP_NAND: i32 = 1;

/// Load word: `regB = mem[regA + offset]`.
pub const OP_LW: i32 = 2;

/// Store word: `mem[regA + offset] = regB`.
pub const OP_SW: i32 = 3;

/// Branch if `regA == regB` to `pc + 1 + offset`.
pub const OP_BEQ: i32 = 4;

/// Jump and link register. Reserved; the pipeline does not implement it.
pub const OP_JALR: i32 = 5;

/// Stop the machine.
pub const OP_HALT: i32 = 6;

/// No operation.
pub const OP_NOOP: i32 = 7;

/// A recognised LC-2K operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `add regA regB dest`
    Add,
    /// `nand regA regB dest`
    Nand,
    /// `lw regA regB offset`
    Lw,
    /// `sw regA regB offset`
    Sw,
    /// `beq regA regB offset`
    Beq,
    /// `jalr regA regB` (unimplemented; executes as the default ALU add)
    Jalr,
    /// `halt`
    Halt,
    /// `noop`
    Noop,
}

impl Opcode {
    /// Decodes a raw opcode value.
    ///
    /// Returns `None` for values outside 0-7, which denote data words.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            OP_ADD => Some(Opcode::Add),
            OP_NAND => Some(Opcode::Nand),
            OP_LW => Some(Opcode::Lw),
            OP_SW => Some(Opcode::Sw),
            OP_BEQ => Some(Opcode::Beq),
            OP_JALR => Some(Opcode::Jalr),
            OP_HALT => Some(Opcode::Halt),
            OP_NOOP => Some(Opcode::Noop),
            _ => None,
        }
    }

    /// Decodes the opcode of a whole instruction word.
    ///
    /// Same as [`InstructionBits::op`].
    pub fn from_word(word: i32) -> Option<Self> {
        word.op()
    }

    /// Raw 3-bit opcode value.
    pub fn raw(self) -> i32 {
        match self {
            Opcode::Add => OP_ADD,
            Opcode::Nand => OP_NAND,
            Opcode::Lw => OP_LW,
            Opcode::Sw => OP_SW,
            Opcode::Beq => OP_BEQ,
            Opcode::Jalr => OP_JALR,
            Opcode::Halt => OP_HALT,
            Opcode::Noop => OP_NOOP,
        }
    }

    /// Assembler mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Nand => "nand",
            Opcode::Lw => "lw",
            Opcode::Sw => "sw",
            Opcode::Beq => "beq",
            Opcode::Jalr => "jalr",
            Opcode::Halt => "halt",
            Opcode::Noop => "noop",
        }
    }

    /// Whether the instruction writes the register named by its low field.
    #[inline]
    pub fn is_alu_write(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Nand)
    }
}
