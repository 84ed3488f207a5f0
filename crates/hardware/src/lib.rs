//! RV32I instruction codec and architectural register file.
//!
//! This crate models the two bit-level pieces of an RV32I core that a pipeline
//! model builds on:
//! 1. **ISA:** Encoding of the six base formats (R, I, S, B, U, J), field
//!    extraction, immediate reassembly with sign extension, and mnemonic resolution.
//! 2. **Register File:** 32 general-purpose registers with two combinational read
//!    ports, one synchronous write port, and `x0` hardwired to zero.
//! 3. **Configuration:** Register width and reset value, loadable from JSON.

/// Common types and constants (architecture parameters, errors, register file ports).
pub mod common;
/// Register file configuration (defaults, JSON loading, validation).
pub mod config;
/// Core architectural state (register cell storage).
pub mod core;
/// Instruction set (formats, encode, decode, mnemonics, ABI names).
pub mod isa;

/// Port-level register file; construct with `RegisterFile::new` or `RegisterFile::from_config`.
pub use crate::common::RegisterFile;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Decoded instruction record produced by [`isa::decode::decode`].
pub use crate::isa::instruction::{Decoded, Instruction, InstructionFormat};
