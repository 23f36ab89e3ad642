//! Instruction and Data Memory.
//!
//! Both memories are initialised from the same program image. Stores only
//! reach data memory, so by default a program cannot modify the instructions
//! the pipeline fetches. A unified memory fetches from data memory instead.
//!
//! Storage is shared between a committed state and its shadow until a store
//! touches it, so cloning a [`Cpu`] each cycle does not copy the memories.
//! Instruction memory is never written and stays shared for the whole run.
//!
//! This module also holds the `Cpu` helpers that apply the bounds policy to
//! each access.

use std::sync::Arc;

use tracing::warn;

use super::Cpu;
use crate::common::data::AccessType;
use crate::common::error::{LoadError, SimError};

/// Word-addressed instruction and data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    instr: Arc<Vec<i32>>,
    data: Arc<Vec<i32>>,
    len: usize,
    unified: bool,
}

impl Memory {
    /// Creates zeroed memories of `capacity` words each.
    pub fn new(capacity: usize, unified: bool) -> Self {
        Self {
            instr: Arc::new(vec![0; capacity]),
            data: Arc::new(vec![0; capacity]),
            len: 0,
            unified,
        }
    }

    /// Creates memories holding `image` starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::CapacityExceeded`] if the image does not fit.
    pub fn with_image(image: &[i32], capacity: usize, unified: bool) -> Result<Self, LoadError> {
        if image.len() > capacity {
            return Err(LoadError::CapacityExceeded { capacity });
        }
        let mut words = vec![0; capacity];
        words[..image.len()].copy_from_slice(image);
        Ok(Self {
            instr: Arc::new(words.clone()),
            data: Arc::new(words),
            len: image.len(),
            unified,
        })
    }

    /// Capacity of each memory in words.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of words in the loaded image.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no program has been loaded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether fetch reads data memory.
    pub fn is_unified(&self) -> bool {
        self.unified
    }

    /// Reads the instruction word at `addr`.
    pub fn fetch(&self, addr: i32) -> Result<i32, SimError> {
        let mem = if self.unified { &self.data } else { &self.instr };
        let idx = self.index(addr, AccessType::Fetch)?;
        Ok(mem[idx])
    }

    /// Reads the data word at `addr`.
    pub fn read(&self, addr: i32) -> Result<i32, SimError> {
        let idx = self.index(addr, AccessType::Read)?;
        Ok(self.data[idx])
    }

    /// Writes the data word at `addr`.
    ///
    /// Data memory still shared with another state is copied first.
    pub fn write(&mut self, addr: i32, val: i32) -> Result<(), SimError> {
        let idx = self.index(addr, AccessType::Write)?;
        Arc::make_mut(&mut self.data)[idx] = val;
        Ok(())
    }

    /// Whether both memories use the same data storage.
    pub fn shares_data_with(&self, other: &Memory) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Data memory covering the loaded image.
    pub fn data(&self) -> &[i32] {
        &self.data[..self.len]
    }

    /// Instruction memory covering the loaded image.
    pub fn instructions(&self) -> &[i32] {
        &self.instr[..self.len]
    }

    fn index(&self, addr: i32, access: AccessType) -> Result<usize, SimError> {
        let size = self.data.len();
        usize::try_from(addr)
            .ok()
            .filter(|&idx| idx < size)
            .ok_or(SimError::AddressOutOfRange { access, addr, size })
    }
}

impl Cpu {
    /// Fetches the instruction at `addr`, applying the bounds policy.
    pub(crate) fn fetch_word(&self, addr: i32) -> Result<i32, SimError> {
        self.checked(self.mem.fetch(addr), 0)
    }

    /// Loads the data word at `addr`, applying the bounds policy.
    pub(crate) fn load_word(&self, addr: i32) -> Result<i32, SimError> {
        self.checked(self.mem.read(addr), 0)
    }

    /// Stores `val` at `addr`, applying the bounds policy.
    pub(crate) fn store_word(&mut self, addr: i32, val: i32) -> Result<(), SimError> {
        let res = self.mem.write(addr, val);
        self.checked(res, ())
    }

    /// Writes a register, applying the bounds policy.
    pub(crate) fn write_reg(&mut self, idx: usize, val: i32) -> Result<(), SimError> {
        let res = self.regs.write(idx, val);
        self.checked(res, ())
    }

    /// With bounds checking on, propagates the fault. Otherwise logs it and
    /// continues with `fallback`.
    fn checked<T>(&self, res: Result<T, SimError>, fallback: T) -> Result<T, SimError> {
        match res {
            Ok(v) => Ok(v),
            Err(e) if self.bounds_check => Err(e),
            Err(e) => {
                warn!(cycle = self.cycles, "{e}; ignored");
                Ok(fallback)
            }
        }
    }
}
