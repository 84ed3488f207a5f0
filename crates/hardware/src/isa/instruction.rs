//! Instruction formats, field layout, and decoded instruction records.
//!
//! Provides the bit layout constants shared by the encoder and decoder, field
//! extraction on raw 32-bit words, the typed [`Instruction`] sum type, and the
//! [`Decoded`] record produced by the decoder.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bit mask for the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 0;
/// Bit mask for the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 7;
/// Bit mask for the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit position of the funct3 field.
pub const FUNCT3_SHIFT: u32 = 12;
/// Bit mask for the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit position of the first source register field.
pub const RS1_SHIFT: u32 = 15;
/// Bit mask for the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit position of the second source register field.
pub const RS2_SHIFT: u32 = 20;
/// Bit mask for the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit position of the funct7 field.
pub const FUNCT7_SHIFT: u32 = 25;

/// I-Type immediate: `imm[11:0]` at bits 20-31.
pub const I_IMM_MASK: u32 = 0xFFF;
/// Bit position of the I-Type immediate.
pub const I_IMM_SHIFT: u32 = 20;
/// Signed width of the I-Type immediate.
pub const I_IMM_BITS: u32 = 12;

/// S-Type immediate low field: `imm[4:0]` at bits 7-11.
pub const S_IMM_LOW_MASK: u32 = 0x1F;
/// Bit position of the S-Type immediate low field.
pub const S_IMM_LOW_SHIFT: u32 = 7;
/// S-Type immediate high field: `imm[11:5]` at bits 25-31.
pub const S_IMM_HIGH_MASK: u32 = 0x7F;
/// Bit position of the S-Type immediate high field.
pub const S_IMM_HIGH_SHIFT: u32 = 25;
/// Position of `imm[5]`, where the high field starts inside the immediate.
pub const S_IMM_HIGH_POS: u32 = 5;
/// Signed width of the S-Type immediate.
pub const S_IMM_BITS: u32 = 12;

/// B-Type `imm[11]`, stored at bit 7.
pub const B_IMM_11_MASK: u32 = 0x1;
/// Bit position of B-Type `imm[11]` in the word.
pub const B_IMM_11_SHIFT: u32 = 7;
/// B-Type `imm[4:1]`, stored at bits 8-11.
pub const B_IMM_4_1_MASK: u32 = 0xF;
/// Bit position of B-Type `imm[4:1]` in the word.
pub const B_IMM_4_1_SHIFT: u32 = 8;
/// B-Type `imm[10:5]`, stored at bits 25-30.
pub const B_IMM_10_5_MASK: u32 = 0x3F;
/// Bit position of B-Type `imm[10:5]` in the word.
pub const B_IMM_10_5_SHIFT: u32 = 25;
/// B-Type `imm[12]` (sign bit), stored at bit 31.
pub const B_IMM_12_MASK: u32 = 0x1;
/// Bit position of B-Type `imm[12]` in the word.
pub const B_IMM_12_SHIFT: u32 = 31;
/// Signed width of the B-Type immediate.
pub const B_IMM_BITS: u32 = 13;
/// Position of bit 12 in the reassembled B-Type immediate.
pub const B_IMM_12_POS: u32 = 12;
/// Position of bit 11 in the reassembled B-Type immediate.
pub const B_IMM_11_POS: u32 = 11;
/// Position of bits 10-5 in the reassembled B-Type immediate.
pub const B_IMM_10_5_POS: u32 = 5;
/// Position of bits 4-1 in the reassembled B-Type immediate.
pub const B_IMM_4_1_POS: u32 = 1;

/// U-Type immediate: `imm[19:0]` at bits 12-31.
pub const U_IMM_MASK: u32 = 0xFFFFF;
/// Bit position of the U-Type immediate.
pub const U_IMM_SHIFT: u32 = 12;

/// J-Type `imm[19:12]`, stored at bits 12-19.
pub const J_IMM_19_12_MASK: u32 = 0xFF;
/// Bit position of J-Type `imm[19:12]` in the word.
pub const J_IMM_19_12_SHIFT: u32 = 12;
/// J-Type `imm[11]`, stored at bit 20.
pub const J_IMM_11_MASK: u32 = 0x1;
/// Bit position of J-Type `imm[11]` in the word.
pub const J_IMM_11_SHIFT: u32 = 20;
/// J-Type `imm[10:1]`, stored at bits 21-30.
pub const J_IMM_10_1_MASK: u32 = 0x3FF;
/// Bit position of J-Type `imm[10:1]` in the word.
pub const J_IMM_10_1_SHIFT: u32 = 21;
/// J-Type `imm[20]` (sign bit), stored at bit 31.
pub const J_IMM_20_MASK: u32 = 0x1;
/// Bit position of J-Type `imm[20]` in the word.
pub const J_IMM_20_SHIFT: u32 = 31;
/// Signed width of the J-Type immediate.
pub const J_IMM_BITS: u32 = 21;
/// Position of bit 20 in the reassembled J-Type immediate.
pub const J_IMM_20_POS: u32 = 20;
/// Position of bits 19-12 in the reassembled J-Type immediate.
pub const J_IMM_19_12_POS: u32 = 12;
/// Position of bit 11 in the reassembled J-Type immediate.
pub const J_IMM_11_POS: u32 = 11;
/// Position of bits 10-1 in the reassembled J-Type immediate.
pub const J_IMM_10_1_POS: u32 = 1;

/// Trait for extracting fixed-position fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Meaningful for R-type only; for other formats these bits belong to the immediate.
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> RS1_SHIFT) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> RS2_SHIFT) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// The six RV32I base instruction formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstructionFormat {
    /// Register-register.
    R,
    /// Register-immediate, loads, and `JALR`.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper immediate (`LUI`, `AUIPC`).
    U,
    /// Jump and link (`JAL`).
    J,
}

impl fmt::Display for InstructionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
        };
        f.write_str(tag)
    }
}

/// A typed RV32I instruction, one variant per format.
///
/// Register and function fields are masked to their widths when encoded, so
/// out-of-range values wrap instead of being rejected. Immediates are taken
/// in two's complement; the low bit of B and J immediates is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Register-register arithmetic and logic.
    R {
        /// Major opcode.
        opcode: u32,
        /// Destination register.
        rd: u32,
        /// First source register.
        rs1: u32,
        /// Second source register.
        rs2: u32,
        /// Minor opcode.
        funct3: u32,
        /// Operation variant (e.g. ADD vs SUB).
        funct7: u32,
    },
    /// Register-immediate arithmetic, loads, and `JALR`.
    I {
        /// Major opcode.
        opcode: u32,
        /// Destination register.
        rd: u32,
        /// Source register.
        rs1: u32,
        /// Minor opcode.
        funct3: u32,
        /// 12-bit signed immediate.
        imm: i32,
    },
    /// Stores.
    S {
        /// Major opcode.
        opcode: u32,
        /// Base address register.
        rs1: u32,
        /// Data register.
        rs2: u32,
        /// Access width.
        funct3: u32,
        /// 12-bit signed offset.
        imm: i32,
    },
    /// Conditional branches.
    B {
        /// Major opcode.
        opcode: u32,
        /// First compared register.
        rs1: u32,
        /// Second compared register.
        rs2: u32,
        /// Comparison kind.
        funct3: u32,
        /// 13-bit signed, even byte offset.
        imm: i32,
    },
    /// Upper immediates.
    U {
        /// Major opcode.
        opcode: u32,
        /// Destination register.
        rd: u32,
        /// 20-bit upper immediate, placed at bit 12 as is.
        imm: u32,
    },
    /// Jump and link.
    J {
        /// Major opcode.
        opcode: u32,
        /// Link register.
        rd: u32,
        /// 21-bit signed, even byte offset.
        imm: i32,
    },
}

impl Instruction {
    /// Format of this instruction.
    pub const fn format(&self) -> InstructionFormat {
        match self {
            Self::R { .. } => InstructionFormat::R,
            Self::I { .. } => InstructionFormat::I,
            Self::S { .. } => InstructionFormat::S,
            Self::B { .. } => InstructionFormat::B,
            Self::U { .. } => InstructionFormat::U,
            Self::J { .. } => InstructionFormat::J,
        }
    }

    /// Major opcode as given (not yet masked).
    pub const fn opcode(&self) -> u32 {
        match *self {
            Self::R { opcode, .. }
            | Self::I { opcode, .. }
            | Self::S { opcode, .. }
            | Self::B { opcode, .. }
            | Self::U { opcode, .. }
            | Self::J { opcode, .. } => opcode,
        }
    }

    /// Packs this instruction into a 32-bit word.
    ///
    /// See [`encode`](crate::isa::encode::encode).
    pub fn encode(&self) -> u32 {
        crate::isa::encode::encode(self)
    }
}

/// Decoded instruction record.
///
/// `imm` is zero for R-type and unrecognized opcodes, sign-extended for
/// I/S/B/J, and the raw unsigned 20-bit field for U-type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7.
    pub funct7: u32,
    /// Immediate value.
    pub imm: i32,
    /// Instruction format, or `None` when the opcode is not RV32I.
    pub format: Option<InstructionFormat>,
    /// Upper-case mnemonic, or `"UNKNOWN"`.
    pub mnemonic: &'static str,
}

impl Decoded {
    /// Whether the word resolved to a known RV32I instruction.
    pub fn is_known(&self) -> bool {
        self.format.is_some() && self.mnemonic != crate::isa::mnemonic::UNKNOWN
    }
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (opcode={:07b})", self.mnemonic, self.opcode)
    }
}
