//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the RV32I base opcode tables, the six instruction formats, and the
//! codec between typed instructions and 32-bit words.
//!
//! # Modules
//!
//! * `instruction`: Field layout, formats, and the `Instruction`/`Decoded` records.
//! * `encode` / `decode`: Packing and unpacking of 32-bit words.
//! * `mnemonic`: `(opcode, funct3, funct7)` to mnemonic resolution.
//! * `rv32i`: Base Integer opcodes and function codes.
//! * `abi`: ABI register names.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding logic for all RV32I instruction formats.
pub mod decode;

/// Instruction encoding into 32-bit words.
pub mod encode;

/// Instruction formats, field layout, and bit extraction utilities.
pub mod instruction;

/// Mnemonic lookup table.
pub mod mnemonic;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

pub use decode::decode;
pub use encode::encode;
