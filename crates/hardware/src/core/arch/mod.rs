//! RISC-V architectural state.
//!
//! Holds the storage behind the architectural register file.

/// General-Purpose Register storage.
pub mod gpr;
