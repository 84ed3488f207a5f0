//! RISC-V General-Purpose Register storage.
//!
//! This module implements the raw cell storage behind the register file. It performs
//! the following:
//! 1. **Storage:** Maintains 32 register cells (`x0`-`x31`), each with a reset value.
//! 2. **Invariant Enforcement:** Reads of `x0` return zero and writes to it are dropped.
//! 3. **Inspection:** Bounds-checked raw access to individual cells.

use crate::common::constants::{NUM_REGS, REG_ADDR_MASK};
use crate::common::error::RegisterError;

/// A single architectural register cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    index: usize,
    value: u32,
    reset_value: u32,
}

impl Register {
    /// Register index (0-31).
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Hardware name of the cell (`x0`-`x31`).
    pub fn name(&self) -> String {
        format!("x{}", self.index)
    }

    /// Value currently stored in the cell.
    ///
    /// For `x0` this is the underlying storage, not the hardwired-zero port view.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Value the cell takes when the register file is brought up.
    pub const fn reset_value(&self) -> u32 {
        self.reset_value
    }
}

/// General-Purpose Register storage.
///
/// Register `x0` is hardwired to zero on the read path; its cell is never
/// written by [`Gpr::write`].
#[derive(Clone, Debug)]
pub struct Gpr {
    regs: [Register; NUM_REGS],
}

impl Gpr {
    /// Creates a register file with all cells initialized to zero.
    pub fn new() -> Self {
        Self::with_reset_value(0)
    }

    /// Creates a register file with every cell initialized to `reset_value`.
    pub fn with_reset_value(reset_value: u32) -> Self {
        Self {
            regs: std::array::from_fn(|index| Register {
                index,
                value: reset_value,
                reset_value,
            }),
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index, masked to the 5-bit address range.
    ///
    /// # Returns
    ///
    /// The stored value. Register `x0` always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        let idx = idx & REG_ADDR_MASK;
        if idx == 0 { 0 } else { self.regs[idx].value }
    }

    /// Writes a value to a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index, masked to the 5-bit address range. Writes to `x0` are ignored.
    /// * `val` - The value to store.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u32) {
        let idx = idx & REG_ADDR_MASK;
        if idx != 0 {
            self.regs[idx].value = val;
        }
    }

    /// Returns the raw cell at `idx`.
    ///
    /// Unlike [`Gpr::read`], this does not apply the `x0` override.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::IndexOutOfRange`] when `idx >= 32`.
    pub fn get(&self, idx: usize) -> Result<&Register, RegisterError> {
        self.regs.get(idx).ok_or(RegisterError::IndexOutOfRange {
            index: idx,
            num_regs: NUM_REGS,
        })
    }

    /// Sets every cell's reset value to zero and returns each cell to it.
    pub fn reset(&mut self) {
        for reg in &mut self.regs {
            reg.reset_value = 0;
            reg.value = reg.reset_value;
        }
    }

    /// Iterates over all cells in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Register> {
        self.regs.iter()
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
