//! Machine constants.

/// Maximum number of words in instruction and data memory.
pub const NUM_MEMORY: usize = 65536;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Encoding used to fill empty or flushed pipeline latches.
///
/// Opcode field is NOOP (7); the remaining fields are zero.
pub const NOOP_INSTRUCTION: i32 = 0x1c0_0000;
