//! Simulation statistics collection and reporting.
//!
//! Tracks cycle and instruction counts, the retired instruction mix, load-use
//! stalls and branch redirects, accumulated from each cycle's report.

use std::time::Instant;

use crate::core::CycleReport;
use crate::isa::opcodes::Opcode;

/// Performance counters for one simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    pub cycles: u64,
    pub instructions_retired: u64,

    pub inst_alu: u64,
    pub inst_load: u64,
    pub inst_store: u64,
    pub inst_branch: u64,
    pub inst_other: u64,

    /// Cycles spent in a load-use stall.
    pub stalls_data: u64,
    pub branches_taken: u64,
    /// Real instructions discarded by taken branches.
    pub squashed: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_other: 0,
            stalls_data: 0,
            branches_taken: 0,
            squashed: 0,
        }
    }
}

impl SimStats {
    /// Accounts for one simulated cycle.
    pub fn record(&mut self, report: &CycleReport) {
        self.cycles += 1;
        if report.stalled {
            self.stalls_data += 1;
        }
        if report.redirect.is_some() {
            self.branches_taken += 1;
        }
        self.squashed += u64::from(report.squashed);

        if let Some(word) = report.retired {
            self.instructions_retired += 1;
            match Opcode::from_word(word) {
                Some(Opcode::Add | Opcode::Nand) => self.inst_alu += 1,
                Some(Opcode::Lw) => self.inst_load += 1,
                Some(Opcode::Sw) => self.inst_store += 1,
                Some(Opcode::Beq) => self.inst_branch += 1,
                _ => self.inst_other += 1,
            }
        }
    }

    /// Cycles per retired instruction, or 0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints a formatted summary of the run.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();

        let cyc = self.cycles.max(1) as f64;
        let total_inst = self.instructions_retired.max(1) as f64;
        let ipc = self.instructions_retired as f64 / cyc;
        let khz = if seconds > 0.0 {
            (self.cycles as f64 / seconds) / 1000.0
        } else {
            0.0
        };

        println!("\n==========================================================");
        println!("LC-2K PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_cycles               {}", self.cycles);
        println!("sim_freq                 {:.2} kHz", khz);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {:.4}", ipc);
        println!("sim_cpi                  {:.4}", self.cpi());
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!(
            "  stalls.load_use        {} ({:.2}%)",
            self.stalls_data,
            (self.stalls_data as f64 / cyc) * 100.0
        );
        println!("  branches.taken         {}", self.branches_taken);
        println!("  insts.squashed         {}", self.squashed);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let mix = [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.other", self.inst_other),
        ];
        for (name, count) in mix {
            println!(
                "  {:<22} {} ({:.2}%)",
                name,
                count,
                (count as f64 / total_inst) * 100.0
            );
        }
        println!("==========================================================");
    }
}
