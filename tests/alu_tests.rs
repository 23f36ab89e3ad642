//! Tests for the Execute-stage ALU.

use lc2k_pipeline::core::units::alu::Alu;
use lc2k_pipeline::isa::Opcode;

/// Tests `add`, including wrap-around on overflow.
#[test]
fn test_add() {
    assert_eq!(Alu::execute(Some(Opcode::Add), 3, 4, 0), 7);
    assert_eq!(Alu::execute(Some(Opcode::Add), -5, 2, 0), -3);
    assert_eq!(Alu::execute(Some(Opcode::Add), i32::MAX, 1, 0), i32::MIN);
}

/// Tests bitwise `nand`.
#[test]
fn test_nand() {
    assert_eq!(Alu::execute(Some(Opcode::Nand), 0, 0, 0), -1);
    assert_eq!(Alu::execute(Some(Opcode::Nand), -1, -1, 0), 0);
    assert_eq!(Alu::execute(Some(Opcode::Nand), 0b1100, 0b1010, 0), !0b1000);
}

/// Tests effective-address computation for `lw` and `sw`.
#[test]
fn test_load_store_address() {
    assert_eq!(Alu::execute(Some(Opcode::Lw), 10, 99, 5), 15);
    assert_eq!(Alu::execute(Some(Opcode::Sw), 10, 99, -3), 7);
}

/// Tests the `beq` comparison, which is zero exactly when operands match.
#[test]
fn test_beq_compare() {
    assert_eq!(Alu::execute(Some(Opcode::Beq), 6, 6, 100), 0);
    assert_ne!(Alu::execute(Some(Opcode::Beq), 6, 7, 100), 0);
    assert_eq!(Alu::execute(Some(Opcode::Beq), i32::MIN, 1, 0), i32::MAX);
}

/// Tests that everything else falls back to `a + b`.
#[test]
fn test_default_operation() {
    assert_eq!(Alu::execute(Some(Opcode::Halt), 2, 3, 9), 5);
    assert_eq!(Alu::execute(Some(Opcode::Noop), 2, 3, 9), 5);
    assert_eq!(Alu::execute(Some(Opcode::Jalr), 2, 3, 9), 5);
    assert_eq!(Alu::execute(None, 2, 3, 9), 5);
}
