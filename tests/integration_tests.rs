//! End-to-end tests running whole programs through the pipeline.

use lc2k_pipeline::config::Config;
use lc2k_pipeline::core::control::RunState;
use lc2k_pipeline::isa::{encode_i, encode_o, encode_r, Opcode};
use lc2k_pipeline::sim::Simulator;
use pretty_assertions::assert_eq;

/// Creates a simulator with the default configuration.
fn simulator(program: &[i32]) -> Simulator {
    Simulator::new(program, &Config::default()).unwrap()
}

fn add(a: usize, b: usize, dest: usize) -> i32 {
    encode_r(Opcode::Add, a, b, dest)
}

fn nand(a: usize, b: usize, dest: usize) -> i32 {
    encode_r(Opcode::Nand, a, b, dest)
}

fn halt() -> i32 {
    encode_o(Opcode::Halt)
}

fn noop() -> i32 {
    encode_o(Opcode::Noop)
}

/// Tests the smallest complete program: one add and a halt.
#[test]
fn test_add_then_halt() {
    let program = [add(0, 0, 1), halt()];
    let mut sim = simulator(&program);

    assert_eq!(sim.run().unwrap(), 5);
    assert_eq!(sim.cpu.status, RunState::Halted);
    assert_eq!(sim.cpu.regs.as_slice(), &[0; 8]);
    assert_eq!(sim.cpu.mem.data(), &program);
}

/// Tests that hazard-free programs take the halt index plus four cycles.
#[test]
fn test_cycle_count_without_hazards() {
    for k in 0..10 {
        let mut program = vec![noop(); k];
        program.push(halt());
        let mut sim = simulator(&program);
        assert_eq!(sim.run().unwrap(), k as u64 + 4, "halt at index {}", k);
        assert_eq!(sim.stats.stalls_data, 0);
    }
}

/// Tests the single stall inserted between a load and its consumer.
#[test]
fn test_load_use_stall() {
    let program = [
        encode_i(Opcode::Lw, 0, 1, 5),
        add(1, 1, 2),
        halt(),
        0,
        0,
        7,
    ];
    let mut sim = simulator(&program);

    assert_eq!(sim.run().unwrap(), 7);
    assert_eq!(sim.cpu.regs.read(1), 7);
    assert_eq!(sim.cpu.regs.read(2), 14);
    assert_eq!(sim.stats.stalls_data, 1);
}

/// Tests that a store consumes freshly loaded data after the stall.
#[test]
fn test_load_then_store() {
    let program = [
        encode_i(Opcode::Lw, 0, 1, 6),
        encode_i(Opcode::Sw, 0, 1, 7),
        halt(),
        0,
        0,
        0,
        42,
        0,
    ];
    let mut sim = simulator(&program);

    assert_eq!(sim.run().unwrap(), 7);
    assert_eq!(sim.cpu.mem.data()[7], 42);
    assert_eq!(sim.cpu.mem.instructions()[7], 0);
}

/// Tests that forwarding gives the same result as padding with noops.
#[test]
fn test_forwarding_matches_padded_program() {
    let tight = [nand(0, 0, 1), add(1, 1, 2), halt()];
    let padded = [nand(0, 0, 1), noop(), noop(), noop(), add(1, 1, 2), halt()];

    let mut fast = simulator(&tight);
    let mut slow = simulator(&padded);
    assert_eq!(fast.run().unwrap(), 6);
    assert_eq!(slow.run().unwrap(), 9);

    assert_eq!(fast.cpu.regs, slow.cpu.regs);
    assert_eq!(fast.cpu.regs.read(1), -1);
    assert_eq!(fast.cpu.regs.read(2), -2);
}

/// Tests a taken branch: the skipped instruction never writes.
#[test]
fn test_branch_taken() {
    let program = [encode_i(Opcode::Beq, 0, 0, 1), nand(0, 0, 3), halt()];
    let mut sim = simulator(&program);

    assert_eq!(sim.run().unwrap(), 8);
    assert_eq!(sim.cpu.regs.read(3), 0);
    assert_eq!(sim.stats.branches_taken, 1);
    assert_eq!(sim.stats.squashed, 3);
}

/// Tests a branch that falls through without flushing.
#[test]
fn test_branch_not_taken() {
    let program = [
        nand(0, 0, 1),
        encode_i(Opcode::Beq, 0, 1, 1),
        nand(0, 0, 3),
        halt(),
    ];
    let mut sim = simulator(&program);

    assert_eq!(sim.run().unwrap(), 7);
    assert_eq!(sim.cpu.regs.read(1), -1);
    assert_eq!(sim.cpu.regs.read(3), -1);
    assert_eq!(sim.stats.branches_taken, 0);
    assert_eq!(sim.stats.squashed, 0);
}

/// Tests that a store into the program is fetched only with unified memory.
#[test]
fn test_self_modifying_store() {
    let program = [
        encode_i(Opcode::Lw, 0, 1, 7),
        noop(),
        encode_i(Opcode::Sw, 0, 1, 6),
        noop(),
        noop(),
        noop(),
        nand(0, 0, 2),
        halt(),
    ];

    let mut split = simulator(&program);
    assert_eq!(split.run().unwrap(), 11);
    assert_eq!(split.cpu.regs.read(2), -1);

    let mut config = Config::default();
    config.memory.unified = true;
    let mut unified = Simulator::new(&program, &config).unwrap();
    assert_eq!(unified.run().unwrap(), 10);
    assert_eq!(unified.cpu.regs.read(2), 0);
}

/// Tests that the observer sees every state, including the halting one.
#[test]
fn test_observer_sees_every_cycle() {
    let mut sim = simulator(&[add(0, 0, 1), halt()]);
    let mut seen = Vec::new();
    let cycles = sim.run_with(|cpu| seen.push(cpu.cycles)).unwrap();

    assert_eq!(cycles, 5);
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
}

/// Tests that computing the next state leaves the current one untouched.
#[test]
fn test_next_state_is_pure() {
    let sim = simulator(&[nand(0, 0, 1), halt()]);
    let before = sim.cpu.clone();

    let (next, report) = sim.cpu.next_state().unwrap();
    assert_eq!(sim.cpu, before);
    assert_eq!(next.cycles, 1);
    assert_eq!(next.pc, 1);
    assert_eq!(next.if_id.instr, nand(0, 0, 1));
    assert!(!report.stalled);
    assert_eq!(report.retired, None);
}

/// Tests that a store lands only in the next state and that untouched
/// memory stays shared between states.
#[test]
fn test_store_does_not_leak_into_current_state() {
    let program = [
        encode_i(Opcode::Sw, 0, 0, 4),
        noop(),
        noop(),
        halt(),
        77,
    ];
    let mut sim = simulator(&program);
    for _ in 0..3 {
        sim.tick().unwrap();
    }
    assert_eq!(sim.cpu.ex_mem.instr, program[0]);

    let (next, _) = sim.cpu.next_state().unwrap();
    assert_eq!(sim.cpu.mem.data()[4], 77);
    assert_eq!(next.mem.data()[4], 0);
    assert!(!next.mem.shares_data_with(&sim.cpu.mem));

    let (after, _) = next.next_state().unwrap();
    assert!(after.mem.shares_data_with(&next.mem));
}

/// Tests that ticking a halted machine does nothing.
#[test]
fn test_tick_after_halt() {
    let mut sim = simulator(&[halt()]);
    assert_eq!(sim.run().unwrap(), 4);

    let frozen = sim.cpu.clone();
    assert_eq!(sim.tick().unwrap(), None);
    assert_eq!(sim.cpu, frozen);
}

/// Tests the cycle limit on a program that never halts.
#[test]
fn test_cycle_limit() {
    let mut config = Config::default();
    config.general.max_cycles = Some(100);
    let mut sim = Simulator::new(&[encode_i(Opcode::Beq, 0, 0, -1)], &config).unwrap();

    assert_eq!(
        sim.run(),
        Err(lc2k_pipeline::common::SimError::CycleLimitExceeded(100))
    );
    assert_eq!(sim.cpu.cycles, 100);
}

/// Tests the retired-instruction mix of a short straight-line program.
#[test]
fn test_instruction_mix() {
    let program = [
        add(0, 0, 1),
        encode_i(Opcode::Lw, 0, 2, 0),
        encode_i(Opcode::Sw, 0, 2, 6),
        encode_i(Opcode::Beq, 0, 2, 0),
        noop(),
        halt(),
    ];
    let mut sim = simulator(&program);
    sim.run().unwrap();

    assert_eq!(sim.stats.inst_alu, 1);
    assert_eq!(sim.stats.inst_load, 1);
    assert_eq!(sim.stats.inst_store, 1);
    assert_eq!(sim.stats.inst_branch, 1);
    assert_eq!(sim.stats.instructions_retired, 4);
    assert_eq!(sim.stats.cycles, sim.cpu.cycles);
}
