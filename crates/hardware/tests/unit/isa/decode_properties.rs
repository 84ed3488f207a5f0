//! # Decoder Tests
//!
//! Field extraction, immediate reassembly, and mnemonic resolution for known
//! assembler words, plus the behavior on encodings outside RV32I.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rv32i_core::isa::decode::{self, decode, sign_extend};
use rv32i_core::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};
use rv32i_core::{Decoded, InstructionFormat};

use crate::common::reference;

#[test]
fn test_decode_add() {
    let d = decode(0x0031_00B3);
    assert_eq!(
        d,
        Decoded {
            raw: 0x0031_00B3,
            opcode: op::OP_REG,
            rd: 1,
            rs1: 2,
            rs2: 3,
            funct3: 0,
            funct7: 0,
            imm: 0,
            format: Some(InstructionFormat::R),
            mnemonic: "ADD",
        }
    );
    assert!(d.is_known());
    assert_eq!(d.to_string(), "ADD (opcode=0110011)");
}

#[test]
fn test_decode_addi() {
    let d = decode(0x0645_0293);
    assert_eq!(d.mnemonic, "ADDI");
    assert_eq!(d.format, Some(InstructionFormat::I));
    assert_eq!((d.rd, d.rs1, d.imm), (5, 10, 100));
}

#[test]
fn test_decode_beq() {
    let d = decode(0x0020_8863);
    assert_eq!(d.mnemonic, "BEQ");
    assert_eq!(d.format, Some(InstructionFormat::B));
    assert_eq!((d.rs1, d.rs2, d.imm), (1, 2, 16));
}

#[rstest]
#[case(0x00A0_0513, "ADDI", InstructionFormat::I, 10)]
#[case(0x1234_52B7, "LUI", InstructionFormat::U, 0x12345)]
#[case(0x0020_A223, "SW", InstructionFormat::S, 4)]
#[case(0x4020_81B3, "SUB", InstructionFormat::R, 0)]
#[case(0x4033_5293, "SRAI", InstructionFormat::I, 0x403)]
#[case(0x0000_8067, "JALR", InstructionFormat::I, 0)]
#[case(0xFE00_0EE3, "BEQ", InstructionFormat::B, -4)]
#[case(0xFF9F_F06F, "JAL", InstructionFormat::J, -8)]
#[case(0x0010_00EF, "JAL", InstructionFormat::J, 2048)]
fn test_decode_known_words(
    #[case] raw: u32,
    #[case] mnemonic: &str,
    #[case] format: InstructionFormat,
    #[case] imm: i32,
) {
    let d = decode(raw);
    assert_eq!(d.mnemonic, mnemonic);
    assert_eq!(d.format, Some(format));
    assert_eq!(d.imm, imm);
}

#[test]
fn test_jal_resolves_when_immediate_overlaps_funct3() {
    // imm[14:12] = 0b111 lands in the funct3 bit positions.
    let raw = reference::j_type(op::OP_JAL, 1, 0x7000);
    let d = decode(raw);
    assert_eq!(d.funct3, 7);
    assert_eq!(d.mnemonic, "JAL");
    assert_eq!(d.imm, 0x7000);
}

#[test]
fn test_auipc_resolves_with_nonzero_funct3() {
    let d = decode(reference::u_type(op::OP_AUIPC, 3, 0xFFFFF));
    assert_eq!(d.mnemonic, "AUIPC");
    assert_eq!(d.imm, 0xFFFFF);
    assert_eq!(d.rd, 3);
}

#[rstest]
#[case(0x0000_0073)]
#[case(0xFFFF_FFFF)]
#[case(0x0000_0000)]
fn test_unknown_opcode(#[case] raw: u32) {
    let d = decode(raw);
    assert_eq!(d.mnemonic, "UNKNOWN");
    assert_eq!(d.format, None);
    assert_eq!(d.imm, 0);
    assert!(!d.is_known());
    assert_eq!(d.raw, raw);
}

#[test]
fn test_unknown_funct3_on_known_opcode() {
    // funct3 = 0b011 is LD, which RV32I does not define.
    let d = decode(reference::i_type(op::OP_LOAD, 1, 0b011, 2, 8));
    assert_eq!(d.format, Some(InstructionFormat::I));
    assert_eq!(d.mnemonic, "UNKNOWN");
    assert_eq!(d.imm, 8);
    assert!(!d.is_known());
}

#[test]
fn test_unknown_funct7_on_register_op() {
    // MUL (funct7 = 1) is not part of the base set.
    let d = decode(reference::r_type(op::OP_REG, 1, f3::ADD_SUB, 2, 3, 0b000_0001));
    assert_eq!(d.format, Some(InstructionFormat::R));
    assert_eq!(d.mnemonic, "UNKNOWN");
}

#[test]
fn test_shift_kinds_distinguished() {
    let srli = decode(reference::i_type(op::OP_IMM, 5, f3::SRL_SRA, 6, 3));
    let srai = decode(reference::i_type(
        op::OP_IMM,
        5,
        f3::SRL_SRA,
        6,
        ((f7::SRA << 5) | 3) as i32,
    ));
    let slli = decode(reference::i_type(op::OP_IMM, 5, f3::SLL, 6, 3));
    assert_eq!(srli.mnemonic, "SRLI");
    assert_eq!(srai.mnemonic, "SRAI");
    assert_eq!(slli.mnemonic, "SLLI");
}

#[test]
fn test_i_immediate_sign_extension() {
    assert_eq!(decode(reference::i_type(op::OP_IMM, 1, 0, 0, -2048)).imm, -2048);
    assert_eq!(decode(reference::i_type(op::OP_IMM, 1, 0, 0, -1)).imm, -1);
    assert_eq!(decode(reference::i_type(op::OP_IMM, 1, 0, 0, 2047)).imm, 2047);
}

#[test]
fn test_s_immediate_sign_extension() {
    let d = decode(reference::s_type(op::OP_STORE, f3::SW, 2, 3, -2048));
    assert_eq!(d.imm, -2048);
    assert_eq!(d.mnemonic, "SW");
}

#[test]
fn test_b_and_j_immediate_extremes() {
    assert_eq!(decode::extract_imm_b(reference::b_type(op::OP_BRANCH, 0, 0, 0, -4096)), -4096);
    assert_eq!(decode::extract_imm_b(reference::b_type(op::OP_BRANCH, 0, 0, 0, 4094)), 4094);
    assert_eq!(decode::extract_imm_j(reference::j_type(op::OP_JAL, 0, -1_048_576)), -1_048_576);
    assert_eq!(decode::extract_imm_j(reference::j_type(op::OP_JAL, 0, 1_048_574)), 1_048_574);
}

#[test]
fn test_field_extractors() {
    let raw = 0x4020_81B3;
    assert_eq!(decode::extract_opcode(raw), op::OP_REG);
    assert_eq!(decode::extract_rd(raw), 3);
    assert_eq!(decode::extract_rs1(raw), 1);
    assert_eq!(decode::extract_rs2(raw), 2);
    assert_eq!(decode::extract_funct3(raw), f3::ADD_SUB);
    assert_eq!(decode::extract_funct7(raw), f7::SUB);
    assert_eq!(decode::extract_imm_u(0x1234_52B7), 0x12345);
}

#[rstest]
#[case(0x800, 12, -2048)]
#[case(0x7FF, 12, 2047)]
#[case(0xFFF, 12, -1)]
#[case(0x1000, 13, -4096)]
#[case(0xF_FFFF, 20, -1)]
#[case(0x8000_0000, 32, i32::MIN)]
#[case(0xFFFF_FFFF, 12, -1)]
#[case(0xABCD, 0, 0)]
#[case(0xFFFF_FFFF, 40, -1)]
fn test_sign_extend(#[case] val: u32, #[case] bits: u32, #[case] expected: i32) {
    assert_eq!(sign_extend(val, bits), expected);
}

#[test]
fn test_format_of() {
    assert_eq!(decode::format_of(op::OP_REG), Some(InstructionFormat::R));
    assert_eq!(decode::format_of(op::OP_LOAD), Some(InstructionFormat::I));
    assert_eq!(decode::format_of(op::OP_JALR), Some(InstructionFormat::I));
    assert_eq!(decode::format_of(op::OP_STORE), Some(InstructionFormat::S));
    assert_eq!(decode::format_of(op::OP_BRANCH), Some(InstructionFormat::B));
    assert_eq!(decode::format_of(op::OP_AUIPC), Some(InstructionFormat::U));
    assert_eq!(decode::format_of(op::OP_JAL), Some(InstructionFormat::J));
    assert_eq!(decode::format_of(0b111_0011), None);
}

#[test]
fn test_decoded_serializes_to_json() {
    let value = serde_json::to_value(decode(0x0645_0293)).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(value["mnemonic"], "ADDI");
    assert_eq!(value["format"], "I");
    assert_eq!(value["imm"], 100);
    assert_eq!(value["rd"], 5);

    let unknown = serde_json::to_value(decode(0x73)).unwrap_or_else(|e| panic!("{e}"));
    assert!(unknown["format"].is_null());
    assert_eq!(unknown["mnemonic"], "UNKNOWN");
}
