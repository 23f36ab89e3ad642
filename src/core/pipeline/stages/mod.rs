//! Pipeline stage implementations.
//!
//! Contains the five stages of the instruction pipeline. Every stage reads
//! the committed state of the previous cycle (`cur`) and writes only into
//! the shadow state being built for the next cycle (`next`):
//! - Fetch: Reads the word at the program counter into IF/ID
//! - Decode: Reads source registers and sign-extends the offset into ID/EX
//! - Execute: Forwards operands and runs the ALU into EX/MEM
//! - Memory: Performs loads and stores and resolves branches into MEM/WB
//! - Writeback: Commits results to the register file and fills WB/END

/// Instruction decode stage implementation.
pub mod decode;

/// Instruction execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::mem_stage;
pub use writeback::wb_stage;
