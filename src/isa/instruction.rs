//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the LC-2K word layout and the inverse
//! encoders used to build programs in memory.

use crate::isa::opcodes::Opcode;

/// Shift of the opcode field (bits 24-22).
pub const OPCODE_SHIFT: u32 = 22;
/// Shift of the `regA` field (bits 21-19).
pub const REG_A_SHIFT: u32 = 19;
/// Shift of the `regB` field (bits 18-16).
pub const REG_B_SHIFT: u32 = 16;
/// Bit mask for a 3-bit register field.
pub const REG_MASK: i32 = 0x7;
/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMM16_MASK: i32 = 0xFFFF;

/// Trait for extracting instruction fields from encoded words.
pub trait InstructionBits {
    /// Raw opcode value: the word shifted right by 22 with no mask.
    ///
    /// Well-formed instructions yield 0-7. Data words with higher bits set
    /// yield values outside that range (negative for words with bit 31 set).
    fn opcode(&self) -> i32;

    /// Decoded opcode, or `None` for a data word.
    fn op(&self) -> Option<Opcode>;

    /// First source register index (bits 21-19).
    fn reg_a(&self) -> usize;

    /// Second source register index (bits 18-16); the destination of `lw`.
    fn reg_b(&self) -> usize;

    /// Raw 16-bit immediate field (bits 15-0), zero-extended.
    fn imm16(&self) -> i32;

    /// Sign-extended 16-bit offset for `lw`, `sw` and `beq`.
    fn offset(&self) -> i32;

    /// Register the instruction writes back, if any.
    ///
    /// `add` and `nand` write the register named by the whole 16-bit field;
    /// pass `mask = true` to keep only its low three bits. `lw` writes `regB`.
    fn dest(&self, mask: bool) -> Option<usize>;
}

impl InstructionBits for i32 {
    #[inline(always)]
    fn opcode(&self) -> i32 {
        self >> OPCODE_SHIFT
    }

    #[inline(always)]
    fn op(&self) -> Option<Opcode> {
        Opcode::from_raw(self.opcode())
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> REG_A_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> REG_B_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm16(&self) -> i32 {
        self & IMM16_MASK
    }

    #[inline(always)]
    fn offset(&self) -> i32 {
        sign_extend16(self.imm16())
    }

    fn dest(&self, mask: bool) -> Option<usize> {
        match self.op()? {
            Opcode::Add | Opcode::Nand => {
                let field = if mask {
                    self.imm16() & REG_MASK
                } else {
                    self.imm16()
                };
                Some(field as usize)
            }
            Opcode::Lw => Some(self.reg_b()),
            _ => None,
        }
    }
}

/// Sign-extends a 16-bit value into the range `[-32768, 32767]`.
///
/// Values with bit 15 clear are returned unchanged.
#[inline]
pub fn sign_extend16(v: i32) -> i32 {
    if v & (1 << 15) != 0 {
        v - (1 << 16)
    } else {
        v
    }
}

/// Encodes an R-type instruction (`add`, `nand`).
///
/// `dest` is truncated to the 16-bit immediate field.
pub fn encode_r(op: Opcode, reg_a: usize, reg_b: usize, dest: usize) -> i32 {
    fields(op, reg_a, reg_b) | (dest as i32 & IMM16_MASK)
}

/// Encodes an I-type instruction (`lw`, `sw`, `beq`) with a signed offset.
pub fn encode_i(op: Opcode, reg_a: usize, reg_b: usize, offset: i32) -> i32 {
    fields(op, reg_a, reg_b) | (offset & IMM16_MASK)
}

/// Encodes an O-type instruction (`halt`, `noop`).
pub fn encode_o(op: Opcode) -> i32 {
    op.raw() << OPCODE_SHIFT
}

fn fields(op: Opcode, reg_a: usize, reg_b: usize) -> i32 {
    (op.raw() << OPCODE_SHIFT)
        | ((reg_a as i32 & REG_MASK) << REG_A_SHIFT)
        | ((reg_b as i32 & REG_MASK) << REG_B_SHIFT)
}
