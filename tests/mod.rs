//! Test module organization.
//!
//! This module organizes all integration tests for the LC-2K pipeline simulator.

/// ALU (Arithmetic Logic Unit) tests.
mod alu_tests;

/// Register file, memory and access policy tests.
mod arch_tests;



/// End-to-end program tests.
mod integration_tests;
