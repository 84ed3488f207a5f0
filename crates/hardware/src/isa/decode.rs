//! RISC-V Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RV32I instruction encodings into
//! a structured `Decoded` format. It extracts opcodes, register indices, function
//! codes, and reassembles the immediate of each format (R, I, S, B, U, J),
//! applying sign extension where the format defines one.
//!
//! Decoding never fails: an opcode outside RV32I yields a record with no format
//! and the `UNKNOWN` mnemonic.

use tracing::debug;

use crate::common::constants::INST_WIDTH;
use crate::isa::instruction::{
    B_IMM_4_1_MASK, B_IMM_4_1_POS, B_IMM_4_1_SHIFT, B_IMM_10_5_MASK, B_IMM_10_5_POS,
    B_IMM_10_5_SHIFT, B_IMM_11_MASK, B_IMM_11_POS, B_IMM_11_SHIFT, B_IMM_12_MASK, B_IMM_12_POS,
    B_IMM_12_SHIFT, B_IMM_BITS, Decoded, I_IMM_BITS, I_IMM_MASK, I_IMM_SHIFT, InstructionBits,
    InstructionFormat, J_IMM_10_1_MASK, J_IMM_10_1_POS, J_IMM_10_1_SHIFT, J_IMM_11_MASK,
    J_IMM_11_POS, J_IMM_11_SHIFT, J_IMM_19_12_MASK, J_IMM_19_12_POS, J_IMM_19_12_SHIFT,
    J_IMM_20_MASK, J_IMM_20_POS, J_IMM_20_SHIFT, J_IMM_BITS, S_IMM_BITS, S_IMM_HIGH_MASK,
    S_IMM_HIGH_POS, S_IMM_HIGH_SHIFT, S_IMM_LOW_MASK, S_IMM_LOW_SHIFT, U_IMM_MASK, U_IMM_SHIFT,
};
use crate::isa::mnemonic;
use crate::isa::rv32i::opcodes;

/// Decodes an RV32I instruction into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// A `Decoded` structure with every field extracted, the format-specific
/// immediate, and the resolved mnemonic.
pub fn decode(inst: u32) -> Decoded {
    let opcode = inst.opcode();
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();
    let format = format_of(opcode);

    let imm = match format {
        Some(InstructionFormat::I) => extract_imm_i(inst),
        Some(InstructionFormat::S) => extract_imm_s(inst),
        Some(InstructionFormat::B) => extract_imm_b(inst),
        Some(InstructionFormat::U) => extract_imm_u(inst) as i32,
        Some(InstructionFormat::J) => extract_imm_j(inst),
        Some(InstructionFormat::R) | None => 0,
    };

    let mnemonic = mnemonic::resolve(opcode, funct3, funct7);
    if format.is_none() {
        debug!(raw = inst, opcode, "unknown opcode");
    }

    Decoded {
        raw: inst,
        opcode,
        rd: inst.rd(),
        rs1: inst.rs1(),
        rs2: inst.rs2(),
        funct3,
        funct7,
        imm,
        format,
        mnemonic,
    }
}

/// Maps a major opcode to its instruction format.
///
/// Returns `None` for opcodes outside the RV32I base set.
pub const fn format_of(opcode: u32) -> Option<InstructionFormat> {
    match opcode {
        opcodes::OP_REG => Some(InstructionFormat::R),
        opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Some(InstructionFormat::I),
        opcodes::OP_STORE => Some(InstructionFormat::S),
        opcodes::OP_BRANCH => Some(InstructionFormat::B),
        opcodes::OP_LUI | opcodes::OP_AUIPC => Some(InstructionFormat::U),
        opcodes::OP_JAL => Some(InstructionFormat::J),
        _ => None,
    }
}

/// Extracts the opcode field (bits 6:0).
pub fn extract_opcode(inst: u32) -> u32 {
    inst.opcode()
}

/// Extracts the destination register field (bits 11:7).
pub fn extract_rd(inst: u32) -> usize {
    inst.rd()
}

/// Extracts the first source register field (bits 19:15).
pub fn extract_rs1(inst: u32) -> usize {
    inst.rs1()
}

/// Extracts the second source register field (bits 24:20).
pub fn extract_rs2(inst: u32) -> usize {
    inst.rs2()
}

/// Extracts the funct3 field (bits 14:12).
pub fn extract_funct3(inst: u32) -> u32 {
    inst.funct3()
}

/// Extracts the funct7 field (bits 31:25).
pub fn extract_funct7(inst: u32) -> u32 {
    inst.funct7()
}

/// Decodes the immediate value for I-Type instructions.
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// Used for Load, JALR, and Immediate Arithmetic instructions.
pub const fn extract_imm_i(inst: u32) -> i32 {
    sign_extend((inst >> I_IMM_SHIFT) & I_IMM_MASK, I_IMM_BITS)
}

/// Decodes the immediate value for S-Type instructions.
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
/// Used for Store instructions.
pub const fn extract_imm_s(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << S_IMM_HIGH_POS) | low, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// Used for Conditional Branch instructions. Bit 0 is never stored, so the result is even.
pub const fn extract_imm_b(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions.
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// Returns the raw 20-bit field; shifting it into the upper bits is left to the consumer.
pub const fn extract_imm_u(inst: u32) -> u32 {
    (inst >> U_IMM_SHIFT) & U_IMM_MASK
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// Used for JAL. Bit 0 is never stored, so the result is even.
pub const fn extract_imm_j(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// Bits above `bits` are discarded first; widths above 32 are treated as 32
/// and a width of 0 yields 0.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    if bits == 0 {
        return 0;
    }
    let bits = if bits > INST_WIDTH { INST_WIDTH } else { bits };
    let shift = INST_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
