//! # Mnemonic Table Tests

use std::collections::HashSet;

use rv32i_core::isa::decode::decode;
use rv32i_core::isa::mnemonic::{MNEMONICS, UNKNOWN, lookup_key, resolve};
use rv32i_core::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

use crate::common::reference;

#[test]
fn test_table_covers_base_set() {
    assert_eq!(MNEMONICS.len(), 37);
    let names: HashSet<&str> = MNEMONICS.iter().map(|&(_, name)| name).collect();
    assert_eq!(names.len(), 37);
    for name in ["ADD", "SRAI", "LHU", "SB", "BGEU", "JAL", "JALR", "LUI", "AUIPC"] {
        assert!(names.contains(name), "{name} missing");
    }
}

#[test]
fn test_table_keys_are_unique_and_normalized() {
    let mut keys = HashSet::new();
    for &((opcode, funct3, funct7), name) in &MNEMONICS {
        assert!(keys.insert((opcode, funct3, funct7)), "{name} shares a key");
        assert_eq!(lookup_key(opcode, funct3, funct7), (opcode, funct3, funct7), "{name}");
        assert_eq!(resolve(opcode, funct3, funct7), name);
    }
}

#[test]
fn test_lookup_key_normalization() {
    // Non-R opcodes drop funct7.
    assert_eq!(lookup_key(op::OP_LOAD, f3::LW, 0x7F), (op::OP_LOAD, f3::LW, 0));
    assert_eq!(lookup_key(op::OP_IMM, f3::ADD_SUB, 0x20), (op::OP_IMM, f3::ADD_SUB, 0));
    // Immediate shifts keep it.
    assert_eq!(
        lookup_key(op::OP_IMM, f3::SRL_SRA, f7::SRA),
        (op::OP_IMM, f3::SRL_SRA, f7::SRA)
    );
    // U and J drop funct3 as well.
    assert_eq!(lookup_key(op::OP_LUI, 5, 9), (op::OP_LUI, 0, 0));
    assert_eq!(lookup_key(op::OP_JAL, 7, 0x7F), (op::OP_JAL, 0, 0));
    // R keeps everything.
    assert_eq!(lookup_key(op::OP_REG, 0, 1), (op::OP_REG, 0, 1));
}

#[test]
fn test_resolve_unknown() {
    assert_eq!(resolve(0b111_0011, 0, 0), UNKNOWN);
    assert_eq!(resolve(op::OP_REG, f3::ADD_SUB, 0b000_0001), UNKNOWN);
    assert_eq!(resolve(op::OP_BRANCH, 0b010, 0), UNKNOWN);
    assert_eq!(resolve(op::OP_IMM, f3::SLL, f7::SRA), UNKNOWN);
}

#[test]
fn test_decode_matches_table_for_every_entry() {
    for &((opcode, funct3, funct7), name) in &MNEMONICS {
        let raw = reference::r_type(opcode, 1, funct3, 2, 3, funct7);
        assert_eq!(decode(raw).mnemonic, name, "{raw:#010x}");
    }
}

#[test]
fn test_jal_with_large_offset() {
    assert_eq!(decode(reference::j_type(op::OP_JAL, 1, 4096)).mnemonic, "JAL");
}
