//! RISC-V Instruction Encoder.
//!
//! Packs a typed [`Instruction`] into its 32-bit encoding. Encoding is total:
//! every field is masked to its declared width and shifted into place, so
//! out-of-range values wrap rather than fail.

use crate::isa::instruction::{
    B_IMM_4_1_MASK, B_IMM_4_1_POS, B_IMM_4_1_SHIFT, B_IMM_10_5_MASK, B_IMM_10_5_POS,
    B_IMM_10_5_SHIFT, B_IMM_11_MASK, B_IMM_11_POS, B_IMM_11_SHIFT, B_IMM_12_MASK, B_IMM_12_POS,
    B_IMM_12_SHIFT, FUNCT3_MASK, FUNCT3_SHIFT, FUNCT7_MASK, FUNCT7_SHIFT, I_IMM_MASK,
    I_IMM_SHIFT, Instruction, J_IMM_10_1_MASK, J_IMM_10_1_POS, J_IMM_10_1_SHIFT, J_IMM_11_MASK,
    J_IMM_11_POS, J_IMM_11_SHIFT, J_IMM_19_12_MASK, J_IMM_19_12_POS, J_IMM_19_12_SHIFT,
    J_IMM_20_MASK, J_IMM_20_POS, J_IMM_20_SHIFT, OPCODE_MASK, OPCODE_SHIFT, RD_MASK, RD_SHIFT,
    RS1_MASK, RS1_SHIFT, RS2_MASK, RS2_SHIFT, S_IMM_HIGH_MASK, S_IMM_HIGH_POS, S_IMM_HIGH_SHIFT,
    S_IMM_LOW_MASK, S_IMM_LOW_SHIFT, U_IMM_MASK, U_IMM_SHIFT,
};

/// Encodes an instruction into a 32-bit word.
///
/// The low 7 bits of the result always equal the instruction's opcode.
///
/// # Arguments
///
/// * `inst` - The instruction to encode.
pub fn encode(inst: &Instruction) -> u32 {
    match *inst {
        Instruction::R {
            opcode,
            rd,
            rs1,
            rs2,
            funct3,
            funct7,
        } => {
            place_opcode(opcode)
                | place_rd(rd)
                | place_funct3(funct3)
                | place_rs1(rs1)
                | place_rs2(rs2)
                | place(funct7, FUNCT7_MASK, FUNCT7_SHIFT)
        }
        Instruction::I {
            opcode,
            rd,
            rs1,
            funct3,
            imm,
        } => {
            place_opcode(opcode)
                | place_rd(rd)
                | place_funct3(funct3)
                | place_rs1(rs1)
                | encode_i_type_imm(imm)
        }
        Instruction::S {
            opcode,
            rs1,
            rs2,
            funct3,
            imm,
        } => {
            place_opcode(opcode)
                | place_funct3(funct3)
                | place_rs1(rs1)
                | place_rs2(rs2)
                | encode_s_type_imm(imm)
        }
        Instruction::B {
            opcode,
            rs1,
            rs2,
            funct3,
            imm,
        } => {
            place_opcode(opcode)
                | place_funct3(funct3)
                | place_rs1(rs1)
                | place_rs2(rs2)
                | encode_b_type_imm(imm)
        }
        Instruction::U { opcode, rd, imm } => {
            place_opcode(opcode) | place_rd(rd) | encode_u_type_imm(imm)
        }
        Instruction::J { opcode, rd, imm } => {
            place_opcode(opcode) | place_rd(rd) | encode_j_type_imm(imm)
        }
    }
}

#[inline]
const fn place(value: u32, mask: u32, shift: u32) -> u32 {
    (value & mask) << shift
}

#[inline]
const fn place_opcode(opcode: u32) -> u32 {
    place(opcode, OPCODE_MASK, OPCODE_SHIFT)
}

#[inline]
const fn place_rd(rd: u32) -> u32 {
    place(rd, RD_MASK, RD_SHIFT)
}

#[inline]
const fn place_rs1(rs1: u32) -> u32 {
    place(rs1, RS1_MASK, RS1_SHIFT)
}

#[inline]
const fn place_rs2(rs2: u32) -> u32 {
    place(rs2, RS2_MASK, RS2_SHIFT)
}

#[inline]
const fn place_funct3(funct3: u32) -> u32 {
    place(funct3, FUNCT3_MASK, FUNCT3_SHIFT)
}

/// I-Type: `imm[11:0]` → bits 31:20.
const fn encode_i_type_imm(imm: i32) -> u32 {
    place(imm as u32, I_IMM_MASK, I_IMM_SHIFT)
}

/// S-Type: `imm[11:5]` → bits 31:25, `imm[4:0]` → bits 11:7.
const fn encode_s_type_imm(imm: i32) -> u32 {
    let v = imm as u32;
    place(v >> S_IMM_HIGH_POS, S_IMM_HIGH_MASK, S_IMM_HIGH_SHIFT)
        | place(v, S_IMM_LOW_MASK, S_IMM_LOW_SHIFT)
}

/// B-Type: `imm[12]` → 31, `imm[10:5]` → 30:25, `imm[4:1]` → 11:8, `imm[11]` → 7.
const fn encode_b_type_imm(imm: i32) -> u32 {
    let v = imm as u32;
    place(v >> B_IMM_12_POS, B_IMM_12_MASK, B_IMM_12_SHIFT)
        | place(v >> B_IMM_10_5_POS, B_IMM_10_5_MASK, B_IMM_10_5_SHIFT)
        | place(v >> B_IMM_4_1_POS, B_IMM_4_1_MASK, B_IMM_4_1_SHIFT)
        | place(v >> B_IMM_11_POS, B_IMM_11_MASK, B_IMM_11_SHIFT)
}

/// U-Type: `imm[19:0]` → bits 31:12.
const fn encode_u_type_imm(imm: u32) -> u32 {
    place(imm, U_IMM_MASK, U_IMM_SHIFT)
}

/// J-Type: `imm[20]` → 31, `imm[10:1]` → 30:21, `imm[11]` → 20, `imm[19:12]` → 19:12.
const fn encode_j_type_imm(imm: i32) -> u32 {
    let v = imm as u32;
    place(v >> J_IMM_20_POS, J_IMM_20_MASK, J_IMM_20_SHIFT)
        | place(v >> J_IMM_10_1_POS, J_IMM_10_1_MASK, J_IMM_10_1_SHIFT)
        | place(v >> J_IMM_11_POS, J_IMM_11_MASK, J_IMM_11_SHIFT)
        | place(v >> J_IMM_19_12_POS, J_IMM_19_12_MASK, J_IMM_19_12_SHIFT)
}
