//! LC-2K Pipeline Simulator CLI.
//!
//! Loads a machine-code file (one decimal word per line), runs it on the
//! five-stage pipeline until `halt` reaches the Memory/Writeback latch and
//! reports the number of cycles executed.
//!
//! # Usage
//!
//! ```text
//! lc2k-sim [OPTIONS] <PROGRAM>
//! ```
//!
//! With `--trace` the full machine state is printed before every cycle,
//! either as `@@@` text blocks or as one JSON object per line.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lc2k_pipeline::config::{Config, OutputFormat};
use lc2k_pipeline::core::cpu::ProgramListing;
use lc2k_pipeline::core::Cpu;
use lc2k_pipeline::sim::{loader, Simulator};

/// Command-line arguments for the LC-2K pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "LC-2K Five-Stage Pipeline Simulator")]
struct Args {
    /// Machine-code file to run.
    program: PathBuf,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the machine state before every cycle.
    #[arg(short, long)]
    trace: bool,

    /// Format of the per-cycle state dump.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Abort if the machine has not halted after this many cycles.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Treat out-of-range addresses and registers as errors.
    #[arg(long)]
    bounds_check: bool,

    /// Fetch instructions from data memory.
    #[arg(long)]
    unified_memory: bool,

    /// Keep only the low three bits of the add/nand destination field.
    #[arg(long)]
    mask_dest: bool,

    /// Print performance statistics after the run.
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Loads the configuration file, if any, and applies flag overrides.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("could not load config `{}`", path.display()))?,
            None => Config::default(),
        };

        config.general.trace_state |= self.trace;
        if let Some(format) = self.format {
            config.general.output = format;
        }
        if self.max_cycles.is_some() {
            config.general.max_cycles = self.max_cycles;
        }
        config.memory.bounds_check |= self.bounds_check;
        config.memory.unified |= self.unified_memory;
        config.decode.mask_dest_field |= self.mask_dest;
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dump_state(cpu: &Cpu, format: OutputFormat) {
    match format {
        OutputFormat::Text => print!("{}", cpu),
        OutputFormat::Json => match cpu.to_json() {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!("failed to serialize state: {e}"),
        },
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.config()?;

    let program = loader::load_program(&args.program, config.memory.size)
        .with_context(|| format!("could not load program `{}`", args.program.display()))?;
    let mut sim = Simulator::new(&program, &config).context("could not initialise machine")?;

    let trace = config.trace_enabled();
    let format = config.general.output;
    if trace && format == OutputFormat::Text {
        print!("{}", ProgramListing(&sim.cpu.mem));
    }

    let result = sim.run_with(|cpu| {
        if trace {
            dump_state(cpu, format);
        }
    });

    if args.stats {
        sim.stats.print();
    }

    let cycles = result.context("simulation failed")?;
    println!("machine halted");
    println!("total of {} cycles executed", cycles);
    Ok(())
}

/// Main entry point for the LC-2K pipeline simulator.
///
/// Exits with status 0 after a normal halt and 1 on any argument, load, config
/// or run-time error.
fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
