//! Mnemonic resolution for RV32I.
//!
//! Maps an `(opcode, funct3, funct7)` triple to the upper-case mnemonic through
//! an exact-match table built once on first use. Fields a format does not
//! define are cleared before lookup:
//!
//! - `funct7` is cleared for every non-R opcode, except the OP-IMM shifts
//!   (`SLLI`, `SRLI`, `SRAI`) where those bits select the shift kind.
//! - `funct3` is cleared for U- and J-type opcodes, where those bits are immediate.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::isa::decode::format_of;
use crate::isa::instruction::InstructionFormat;
use crate::isa::rv32i::funct3 as f3;
use crate::isa::rv32i::funct7 as f7;
use crate::isa::rv32i::opcodes as op;

/// Mnemonic reported for encodings outside RV32I.
pub const UNKNOWN: &str = "UNKNOWN";

/// Every RV32I base opcode/funct3/funct7 combination.
pub const MNEMONICS: [((u32, u32, u32), &str); 37] = [
    ((op::OP_REG, f3::ADD_SUB, f7::DEFAULT), "ADD"),
    ((op::OP_REG, f3::ADD_SUB, f7::SUB), "SUB"),
    ((op::OP_REG, f3::SLL, f7::DEFAULT), "SLL"),
    ((op::OP_REG, f3::SLT, f7::DEFAULT), "SLT"),
    ((op::OP_REG, f3::SLTU, f7::DEFAULT), "SLTU"),
    ((op::OP_REG, f3::XOR, f7::DEFAULT), "XOR"),
    ((op::OP_REG, f3::SRL_SRA, f7::DEFAULT), "SRL"),
    ((op::OP_REG, f3::SRL_SRA, f7::SRA), "SRA"),
    ((op::OP_REG, f3::OR, f7::DEFAULT), "OR"),
    ((op::OP_REG, f3::AND, f7::DEFAULT), "AND"),
    ((op::OP_IMM, f3::ADD_SUB, 0), "ADDI"),
    ((op::OP_IMM, f3::SLL, f7::DEFAULT), "SLLI"),
    ((op::OP_IMM, f3::SLT, 0), "SLTI"),
    ((op::OP_IMM, f3::SLTU, 0), "SLTIU"),
    ((op::OP_IMM, f3::XOR, 0), "XORI"),
    ((op::OP_IMM, f3::SRL_SRA, f7::DEFAULT), "SRLI"),
    ((op::OP_IMM, f3::SRL_SRA, f7::SRA), "SRAI"),
    ((op::OP_IMM, f3::OR, 0), "ORI"),
    ((op::OP_IMM, f3::AND, 0), "ANDI"),
    ((op::OP_LOAD, f3::LB, 0), "LB"),
    ((op::OP_LOAD, f3::LH, 0), "LH"),
    ((op::OP_LOAD, f3::LW, 0), "LW"),
    ((op::OP_LOAD, f3::LBU, 0), "LBU"),
    ((op::OP_LOAD, f3::LHU, 0), "LHU"),
    ((op::OP_STORE, f3::SB, 0), "SB"),
    ((op::OP_STORE, f3::SH, 0), "SH"),
    ((op::OP_STORE, f3::SW, 0), "SW"),
    ((op::OP_BRANCH, f3::BEQ, 0), "BEQ"),
    ((op::OP_BRANCH, f3::BNE, 0), "BNE"),
    ((op::OP_BRANCH, f3::BLT, 0), "BLT"),
    ((op::OP_BRANCH, f3::BGE, 0), "BGE"),
    ((op::OP_BRANCH, f3::BLTU, 0), "BLTU"),
    ((op::OP_BRANCH, f3::BGEU, 0), "BGEU"),
    ((op::OP_JAL, 0, 0), "JAL"),
    ((op::OP_JALR, f3::JALR, 0), "JALR"),
    ((op::OP_LUI, 0, 0), "LUI"),
    ((op::OP_AUIPC, 0, 0), "AUIPC"),
];

static TABLE: LazyLock<HashMap<(u32, u32, u32), &'static str>> =
    LazyLock::new(|| MNEMONICS.into_iter().collect());

/// Normalizes raw fields into the table key for their opcode.
pub const fn lookup_key(opcode: u32, funct3: u32, funct7: u32) -> (u32, u32, u32) {
    match format_of(opcode) {
        Some(InstructionFormat::R) => (opcode, funct3, funct7),
        Some(InstructionFormat::U | InstructionFormat::J) => (opcode, 0, 0),
        Some(InstructionFormat::I)
            if opcode == op::OP_IMM && (funct3 == f3::SLL || funct3 == f3::SRL_SRA) =>
        {
            (opcode, funct3, funct7)
        }
        _ => (opcode, funct3, 0),
    }
}

/// Resolves the mnemonic of an instruction from its raw fields.
///
/// # Returns
///
/// The upper-case mnemonic, or [`UNKNOWN`] when no RV32I instruction matches.
pub fn resolve(opcode: u32, funct3: u32, funct7: u32) -> &'static str {
    TABLE
        .get(&lookup_key(opcode, funct3, funct7))
        .copied()
        .unwrap_or(UNKNOWN)
}
