//! Clocked Register File.
//!
//! This module provides the `RegisterFile` struct, the port-level view of the
//! architectural registers consumed by a pipeline model. It provides:
//! 1. **Read Ports:** Two combinational read ports (`rs1`, `rs2`) reflecting current state.
//! 2. **Write Port:** One synchronous write port (`rd`) latched until the next clock edge.
//! 3. **Observability:** Raw cell inspection, cycle counting, and state dumps.
//!
//! A read of a register in the same cycle it is written observes the pre-write
//! value; the write becomes visible from the following cycle.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::common::constants::{NUM_REGS, REG_ADDR_MASK, REG_WIDTH};
use crate::common::error::{ConfigError, RegisterError};
use crate::config::RegFileConfig;
use crate::core::arch::gpr::{Gpr, Register};
use crate::isa::abi;

/// Signals presented to the register file ports for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortInputs {
    /// First read port address.
    pub rs1_addr: usize,
    /// Second read port address.
    pub rs2_addr: usize,
    /// Write port address.
    pub rd_addr: usize,
    /// Write port data.
    pub rd_data: u32,
    /// Write port enable.
    pub rd_we: bool,
}

/// Values driven by the read ports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PortOutputs {
    /// Data on the first read port.
    pub rs1_data: u32,
    /// Data on the second read port.
    pub rs2_data: u32,
}

/// Write request latched on the write port, applied at the next clock edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingWrite {
    /// Destination address (already masked to 5 bits).
    pub addr: usize,
    /// Data to store (already masked to the register width).
    pub data: u32,
    /// Whether the write enable was asserted.
    pub enable: bool,
}

/// Architectural register file with two read ports and one write port.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    gpr: Gpr,
    width: u32,
    data_mask: u32,
    pending: Option<PendingWrite>,
    cycle: u64,
}

impl RegisterFile {
    /// Creates a 32 x 32-bit register file with all cells at zero.
    pub fn new() -> Self {
        Self::build(REG_WIDTH, 0)
    }

    /// Creates a register file from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWidth`] when the configured width is outside `1..=32`.
    pub fn from_config(config: &RegFileConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config.width, config.reset_value))
    }

    fn build(width: u32, reset_value: u32) -> Self {
        let data_mask = if width >= 32 {
            u32::MAX
        } else {
            (1 << width) - 1
        };
        Self {
            gpr: Gpr::with_reset_value(reset_value & data_mask),
            width,
            data_mask,
            pending: None,
            cycle: 0,
        }
    }

    /// Cell width in bits.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of architectural registers.
    pub const fn num_regs(&self) -> usize {
        NUM_REGS
    }

    /// Number of clock edges since construction or the last reset.
    pub const fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Write request waiting for the next clock edge, if any.
    pub const fn pending_write(&self) -> Option<PendingWrite> {
        self.pending
    }

    /// Combinational read port.
    ///
    /// # Arguments
    ///
    /// * `addr` - Register address, masked to 5 bits. Address 0 always reads 0.
    ///
    /// # Returns
    ///
    /// The value currently stored; a write latched this cycle is not visible.
    #[inline]
    pub fn read(&self, addr: usize) -> u32 {
        self.gpr.read(addr)
    }

    /// Samples both read ports at once.
    pub fn read_ports(&self, rs1_addr: usize, rs2_addr: usize) -> PortOutputs {
        PortOutputs {
            rs1_data: self.read(rs1_addr),
            rs2_data: self.read(rs2_addr),
        }
    }

    /// Drives the write port for the current cycle.
    ///
    /// The request is latched and applied by the next [`RegisterFile::tick`]. A
    /// second call in the same cycle replaces the first, since there is only one port.
    ///
    /// # Arguments
    ///
    /// * `addr` - Destination address, masked to 5 bits. Writes to 0 are dropped at the edge.
    /// * `value` - Data, masked to the register width.
    /// * `enable` - Write enable; nothing is stored when deasserted.
    pub fn write(&mut self, addr: usize, value: u32, enable: bool) {
        let request = PendingWrite {
            addr: addr & REG_ADDR_MASK,
            data: value & self.data_mask,
            enable,
        };
        if let Some(previous) = self.pending.replace(request) {
            warn!(
                cycle = self.cycle,
                replaced_addr = previous.addr,
                addr = request.addr,
                "write port driven twice in one cycle"
            );
        }
        trace!(cycle = self.cycle, addr = request.addr, data = request.data, enable, "write latched");
    }

    /// Advances one clock edge, committing the latched write.
    pub fn tick(&mut self) {
        if let Some(request) = self.pending.take().filter(|w| w.enable) {
            if request.addr == 0 {
                debug!(cycle = self.cycle, data = request.data, "write to x0 discarded");
            } else {
                self.gpr.write(request.addr, request.data);
                trace!(
                    cycle = self.cycle,
                    reg = abi::abi_name(request.addr).unwrap_or("x?"),
                    data = request.data,
                    "write committed"
                );
            }
        }
        self.cycle += 1;
    }

    /// Runs one full cycle: samples the read ports, drives the write port, then clocks.
    ///
    /// # Returns
    ///
    /// The read port outputs observed before the clock edge.
    pub fn step(&mut self, inputs: PortInputs) -> PortOutputs {
        let outputs = self.read_ports(inputs.rs1_addr, inputs.rs2_addr);
        self.write(inputs.rd_addr, inputs.rd_data, inputs.rd_we);
        self.tick();
        outputs
    }

    /// Raw access to the cell at `index`, bypassing the `x0` read override.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::IndexOutOfRange`] when `index` is outside `[0, 31]`.
    pub fn get(&self, index: usize) -> Result<&Register, RegisterError> {
        self.gpr.get(index)
    }

    /// Sets every cell's reset value to zero and returns the file to its brought-up state.
    ///
    /// Any latched write is dropped and the cycle counter restarts.
    pub fn reset(&mut self) {
        self.gpr.reset();
        self.pending = None;
        self.cycle = 0;
        debug!("register file reset");
    }

    /// Renders all registers in pairs with their ABI names.
    pub fn dump(&self) -> String {
        let regs: Vec<&Register> = self.gpr.iter().collect();
        let mut out = String::new();
        for pair in regs.chunks(2) {
            let line: Vec<String> = pair
                .iter()
                .map(|reg| {
                    format!(
                        "{:<4} ({:>4})={:#010x}",
                        reg.name(),
                        abi::abi_name(reg.index()).unwrap_or("?"),
                        self.read(reg.index())
                    )
                })
                .collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RegisterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegFile(bitwidth={}, num_regs={})", self.width, self.num_regs())
    }
}
