//! Simulation driver.
//!
//! [`Simulator`] owns a [`Cpu`] and its [`SimStats`] and runs the machine to
//! completion, optionally enforcing a cycle limit.

use tracing::info;

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::control;
use crate::core::{Cpu, CycleReport};
use crate::stats::SimStats;

/// A CPU plus the bookkeeping needed to run it to completion.
#[derive(Debug)]
pub struct Simulator {
    pub cpu: Cpu,
    pub stats: SimStats,
    /// Cycles allowed before the run is abandoned; `None` means unbounded.
    pub max_cycles: Option<u64>,
}

impl Simulator {
    /// Builds a simulator for `program` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CapacityExceeded`] if the program does not fit in
    /// the configured memory.
    pub fn new(program: &[i32], config: &Config) -> Result<Self, LoadError> {
        Ok(Self {
            cpu: Cpu::from_config(program, config)?,
            stats: SimStats::default(),
            max_cycles: config.general.max_cycles,
        })
    }

    /// Whether the machine has halted.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Advances one cycle and records it in the statistics.
    ///
    /// # Returns
    ///
    /// The cycle report, or `None` once the machine has halted.
    pub fn tick(&mut self) -> Result<Option<CycleReport>, SimError> {
        let report = self.cpu.tick()?;
        if let Some(report) = &report {
            self.stats.record(report);
        }
        Ok(report)
    }

    /// Runs until the machine halts.
    ///
    /// # Returns
    ///
    /// Total number of cycles executed.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.run_with(|_| {})
    }

    /// Runs until the machine halts, calling `observer` with the committed
    /// state before every cycle.
    ///
    /// The observer also sees the final state in which the halt is detected,
    /// so it is called once more than the number of cycles executed.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimitExceeded`] if `max_cycles` elapse
    /// without a halt, or any fault raised by the pipeline.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<u64, SimError>
    where
        F: FnMut(&Cpu),
    {
        while !self.is_halted() {
            observer(&self.cpu);
            if let Some(limit) = self.max_cycles {
                if self.cpu.cycles >= limit && !control::should_halt(&self.cpu.mem_wb) {
                    return Err(SimError::CycleLimitExceeded(limit));
                }
            }
            self.tick()?;
        }
        info!(cycles = self.cpu.cycles, "run complete");
        Ok(self.cpu.cycles)
    }
}
