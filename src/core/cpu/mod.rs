//! CPU state and the per-cycle transition function.
//!
//! A [`Cpu`] is the complete machine: program counter, memories, registers,
//! the five pipeline latches and the cycle counter. Each cycle is computed by
//! [`Cpu::next_state`], which reads only the committed state and builds a
//! shadow copy; the shadow replaces the committed state once every stage has
//! run. Stages therefore never observe each other's updates within a cycle.

use tracing::{debug, debug_span, info};

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::control::{self, RunState};
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::core::pipeline::stages;

/// Text state dump and program listing.
pub mod dump;

/// Instruction and data memory.
pub mod memory;

/// Serializable per-cycle snapshot.
pub mod snapshot;

pub use dump::ProgramListing;
pub use memory::Memory;
pub use snapshot::StateSnapshot;

/// What happened during one simulated cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// A load-use stall held fetch and inserted a bubble.
    pub stalled: bool,
    /// Target of a branch taken in the Memory stage.
    pub redirect: Option<i32>,
    /// Real instructions squashed by the redirect.
    pub squashed: u32,
    /// Instruction that moved into WB/END, unless it was a bubble.
    pub retired: Option<i32>,
}

/// Architectural and pipeline state of the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// Address of the next instruction to fetch.
    pub pc: i32,
    /// Instruction and data memory.
    pub mem: Memory,
    /// General-purpose registers.
    pub regs: Gpr,

    /// Fetch to Decode latch.
    pub if_id: IfId,
    /// Decode to Execute latch.
    pub id_ex: IdEx,
    /// Execute to Memory latch.
    pub ex_mem: ExMem,
    /// Memory to Writeback latch.
    pub mem_wb: MemWb,
    /// Last retired instruction, kept for forwarding.
    pub wb_end: WbEnd,

    /// Number of cycles simulated so far.
    pub cycles: u64,
    /// Running or halted.
    pub status: RunState,

    /// Turn out-of-range accesses into errors instead of ignoring them.
    pub bounds_check: bool,
    /// Mask the `add`/`nand` destination field to three bits.
    pub mask_dest: bool,
}

impl Cpu {
    /// Creates a machine at reset around the given memory.
    ///
    /// Registers and the program counter are zero and every latch holds a
    /// NOOP bubble.
    pub fn new(mem: Memory) -> Self {
        Self {
            pc: 0,
            mem,
            regs: Gpr::new(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_end: WbEnd::default(),
            cycles: 0,
            status: RunState::Running,
            bounds_check: false,
            mask_dest: false,
        }
    }

    /// Creates a machine with `image` loaded at address 0, configured by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CapacityExceeded`] if the image is larger than
    /// the configured memory.
    pub fn from_config(image: &[i32], config: &Config) -> Result<Self, LoadError> {
        let mem = Memory::with_image(image, config.memory.size, config.memory.unified)?;
        let mut cpu = Self::new(mem);
        cpu.bounds_check = config.memory.bounds_check;
        cpu.mask_dest = config.decode.mask_dest_field;
        Ok(cpu)
    }

    /// Whether the machine has halted.
    pub fn is_halted(&self) -> bool {
        self.status == RunState::Halted
    }

    /// Computes the state after one more cycle without modifying `self`.
    ///
    /// Stages run in pipeline order against the committed state. The Memory
    /// stage runs after Fetch so a taken branch overrides the fetched
    /// program counter.
    ///
    /// # Errors
    ///
    /// Returns a [`SimError`] if bounds checking is on and an access faults.
    pub fn next_state(&self) -> Result<(Cpu, CycleReport), SimError> {
        let _span = debug_span!("cycle", n = self.cycles).entered();

        let mut next = self.clone();
        next.cycles += 1;

        let stall = hazards::need_stall_load_use(&self.id_ex, &self.if_id);
        if stall {
            debug!(pc = self.pc, "load-use stall");
        }

        stages::fetch_stage(self, &mut next, stall)?;
        stages::decode_stage(self, &mut next, stall);
        stages::execute_stage(self, &mut next);
        let mem = stages::mem_stage(self, &mut next)?;
        let retired = stages::wb_stage(self, &mut next)?;

        let report = CycleReport {
            stalled: stall,
            redirect: mem.redirect,
            squashed: mem.squashed,
            retired,
        };
        Ok((next, report))
    }

    /// Advances the machine by one cycle.
    ///
    /// The halt check runs first: if `halt` sits in MEM/WB the machine moves
    /// to [`RunState::Halted`] and no stage runs, leaving the cycle count
    /// unchanged.
    ///
    /// # Returns
    ///
    /// The cycle report, or `None` once the machine has halted.
    pub fn tick(&mut self) -> Result<Option<CycleReport>, SimError> {
        if self.is_halted() {
            return Ok(None);
        }
        if control::should_halt(&self.mem_wb) {
            info!(cycles = self.cycles, "machine halted");
            self.status = RunState::Halted;
            return Ok(None);
        }

        let (next, report) = self.next_state()?;
        *self = next;
        Ok(Some(report))
    }
}
