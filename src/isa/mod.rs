//! Instruction Set Architecture (ISA) Definitions.
//!
//! The LC-2K word layout is fixed: opcode in bits 24-22, `regA` in 21-19,
//! `regB` in 18-16 and a 16-bit immediate in 15-0. This module extracts and
//! builds those fields and renders instructions as mnemonics.

/// Instruction disassembler for state dumps and tracing.
pub mod disasm;

/// Field extraction, sign extension and encoders.
pub mod instruction;

/// Opcode numbers and the decoded [`Opcode`](opcodes::Opcode) enum.
pub mod opcodes;

pub use disasm::Disasm;
pub use instruction::{encode_i, encode_o, encode_r, sign_extend16, InstructionBits};
pub use opcodes::Opcode;
