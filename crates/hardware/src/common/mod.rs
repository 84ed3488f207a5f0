//! Common utilities and types shared by the codec and the register file.
//!
//! This module provides:
//! 1. **Constants:** Architecture parameters (XLEN, register count and width).
//! 2. **Error Handling:** Register indexing and configuration errors.
//! 3. **Register Ports:** The clocked, port-level register file.

/// Architecture-wide constants.
pub mod constants;

/// Error types.
pub mod error;

/// Port-level register file implementation.
pub mod reg;

pub use constants::{NUM_REGS, REG_WIDTH, XLEN};
pub use error::{ConfigError, RegisterError};
pub use reg::{PendingWrite, PortInputs, PortOutputs, RegisterFile};
