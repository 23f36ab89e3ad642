//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the ALU used in the Execute stage. All arithmetic
//! wraps on 32-bit two's-complement values.

use crate::isa::opcodes::Opcode;

/// Arithmetic Logic Unit.
pub struct Alu;

impl Alu {
    /// Computes the Execute-stage result for an instruction.
    ///
    /// # Arguments
    ///
    /// * `op` - Decoded opcode, or `None` for a data word
    /// * `a` - Forwarded `regA` value
    /// * `b` - Forwarded `regB` value
    /// * `offset` - Sign-extended offset
    ///
    /// # Returns
    ///
    /// * `add`: `a + b`
    /// * `nand`: `!(a & b)`
    /// * `lw`/`sw`: the effective address `a + offset`
    /// * `beq`: `a - b`, zero when the operands are equal
    /// * anything else (`halt`, `noop`, `jalr`, data): `a + b`
    pub fn execute(op: Option<Opcode>, a: i32, b: i32, offset: i32) -> i32 {
        match op {
            Some(Opcode::Add) => a.wrapping_add(b),
            Some(Opcode::Nand) => !(a & b),
            Some(Opcode::Lw | Opcode::Sw) => a.wrapping_add(offset),
            Some(Opcode::Beq) => a.wrapping_sub(b),
            _ => a.wrapping_add(b),
        }
    }
}
