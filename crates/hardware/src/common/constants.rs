//! Global Architecture Constants.
//!
//! Parameters of the RV32I base integer machine shared by the codec and the
//! register file.

/// Native integer register width in bits.
pub const XLEN: u32 = 32;

/// Number of architectural general-purpose registers (`x0`-`x31`).
pub const NUM_REGS: usize = 32;

/// Width of each register cell in bits.
pub const REG_WIDTH: u32 = 32;

/// Width of a base (uncompressed) instruction in bits.
pub const INST_WIDTH: u32 = 32;

/// Width of a register address port in bits.
pub const REG_ADDR_BITS: u32 = 5;

/// Mask applied to register addresses presented on a port.
pub const REG_ADDR_MASK: usize = (1 << REG_ADDR_BITS) - 1;
