//! Tests for the register file, memories and out-of-range access policy.

use lc2k_pipeline::common::{AccessType, LoadError, SimError};
use lc2k_pipeline::config::Config;
use lc2k_pipeline::core::arch::Gpr;
use lc2k_pipeline::core::cpu::Memory;
use lc2k_pipeline::isa::{encode_i, encode_o, encode_r, Opcode};
use lc2k_pipeline::sim::Simulator;

/// Creates a configuration with a small memory.
fn small_config(size: usize, bounds_check: bool) -> Config {
    let mut config = Config::default();
    config.memory.size = size;
    config.memory.bounds_check = bounds_check;
    config
}

/// Tests that registers start at zero and register 0 is writable.
#[test]
fn test_gpr_reset_and_r0() {
    let mut regs = Gpr::new();
    assert_eq!(regs.as_slice(), &[0; 8]);
    regs.write(0, 42).unwrap();
    assert_eq!(regs.read(0), 42);
}

/// Tests that writing past register 7 is reported.
#[test]
fn test_gpr_out_of_range() {
    let mut regs = Gpr::new();
    assert_eq!(
        regs.write(8, 1),
        Err(SimError::RegisterOutOfRange { index: 8 })
    );
    assert_eq!(regs.read(8), 0);
}

/// Tests that the image lands in both memories.
#[test]
fn test_memory_image() {
    let mem = Memory::with_image(&[5, 6, 7], 16, false).unwrap();
    assert_eq!(mem.len(), 3);
    assert_eq!(mem.capacity(), 16);
    assert_eq!(mem.data(), &[5, 6, 7]);
    assert_eq!(mem.instructions(), &[5, 6, 7]);
    assert_eq!(mem.fetch(1).unwrap(), 6);
    assert_eq!(mem.read(2).unwrap(), 7);
    assert_eq!(mem.read(10).unwrap(), 0);
}

/// Tests that stores reach data memory only, unless memory is unified.
#[test]
fn test_memory_split_and_unified() {
    let mut split = Memory::with_image(&[1, 2], 4, false).unwrap();
    split.write(0, 99).unwrap();
    assert_eq!(split.read(0).unwrap(), 99);
    assert_eq!(split.fetch(0).unwrap(), 1);

    let mut unified = Memory::with_image(&[1, 2], 4, true).unwrap();
    unified.write(0, 99).unwrap();
    assert!(unified.is_unified());
    assert_eq!(unified.fetch(0).unwrap(), 99);
}

/// Tests that an image larger than memory is rejected.
#[test]
fn test_memory_capacity_exceeded() {
    let err = Memory::with_image(&[0; 5], 4, false).unwrap_err();
    assert!(matches!(err, LoadError::CapacityExceeded { capacity: 4 }));
}

/// Tests out-of-range addresses in every direction.
#[test]
fn test_memory_out_of_range() {
    let mut mem = Memory::new(4, false);
    assert!(mem.is_empty());
    assert_eq!(
        mem.read(4),
        Err(SimError::AddressOutOfRange {
            access: AccessType::Read,
            addr: 4,
            size: 4
        })
    );
    assert_eq!(
        mem.fetch(-1),
        Err(SimError::AddressOutOfRange {
            access: AccessType::Fetch,
            addr: -1,
            size: 4
        })
    );
    assert!(matches!(
        mem.write(100, 1),
        Err(SimError::AddressOutOfRange {
            access: AccessType::Write,
            ..
        })
    ));
}

/// Tests that a load outside memory reads zero when bounds checking is off.
#[test]
fn test_permissive_load() {
    let program = [encode_i(Opcode::Lw, 0, 1, 100), encode_o(Opcode::Halt)];
    let mut sim = Simulator::new(&program, &small_config(8, false)).unwrap();
    assert_eq!(sim.run().unwrap(), 5);
    assert_eq!(sim.cpu.regs.read(1), 0);
}

/// Tests that a load outside memory stops the run when bounds checking is on.
#[test]
fn test_strict_load() {
    let program = [encode_i(Opcode::Lw, 0, 1, 100), encode_o(Opcode::Halt)];
    let mut sim = Simulator::new(&program, &small_config(8, true)).unwrap();
    assert_eq!(
        sim.run(),
        Err(SimError::AddressOutOfRange {
            access: AccessType::Read,
            addr: 100,
            size: 8
        })
    );
}

/// Tests that a store outside memory is dropped when bounds checking is off.
#[test]
fn test_permissive_store() {
    let program = [encode_i(Opcode::Sw, 0, 0, -1), encode_o(Opcode::Halt)];
    let mut sim = Simulator::new(&program, &small_config(8, false)).unwrap();
    assert_eq!(sim.run().unwrap(), 5);
    assert_eq!(sim.cpu.mem.data(), &program);
}

/// Tests that running off the end of memory faults on fetch.
#[test]
fn test_strict_fetch() {
    let noop = encode_o(Opcode::Noop);
    let mut sim = Simulator::new(&[noop; 4], &small_config(4, true)).unwrap();
    assert_eq!(
        sim.run(),
        Err(SimError::AddressOutOfRange {
            access: AccessType::Fetch,
            addr: 4,
            size: 4
        })
    );
    assert_eq!(sim.cpu.cycles, 4);
}

/// Tests the unmasked destination field against both policies and the mask.
#[test]
fn test_wide_destination_field() {
    let program = [encode_r(Opcode::Nand, 0, 0, 9), encode_o(Opcode::Halt)];

    let mut sim = Simulator::new(&program, &small_config(8, false)).unwrap();
    assert_eq!(sim.run().unwrap(), 5);
    assert_eq!(sim.cpu.regs.as_slice(), &[0; 8]);

    let mut sim = Simulator::new(&program, &small_config(8, true)).unwrap();
    assert_eq!(sim.run(), Err(SimError::RegisterOutOfRange { index: 9 }));

    let mut config = small_config(8, true);
    config.decode.mask_dest_field = true;
    let mut sim = Simulator::new(&program, &config).unwrap();
    assert_eq!(sim.run().unwrap(), 5);
    assert_eq!(sim.cpu.regs.read(1), -1);
}
