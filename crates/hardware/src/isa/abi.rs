//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the standard ABI names for `x0`-`x31` and the indices of the
//! registers with a fixed calling-convention role.

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x3 (global pointer, gp).
pub const REG_GP: usize = 3;
/// Register x4 (thread pointer, tp).
pub const REG_TP: usize = 4;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument/return value, a1).
pub const REG_A1: usize = 11;

/// Returns the ABI name of an integer register, or `None` past `x31`.
#[inline]
pub fn abi_name(idx: usize) -> Option<&'static str> {
    REG_NAMES.get(idx).copied()
}

/// Looks up a register index by ABI name (`"sp"`) or hardware name (`"x2"`).
///
/// `fp` is accepted as an alias of `s0`.
pub fn index_of(name: &str) -> Option<usize> {
    if name == "fp" {
        return Some(8);
    }
    if let Some(idx) = REG_NAMES.iter().position(|&n| n == name) {
        return Some(idx);
    }
    name.strip_prefix('x')
        .and_then(|digits| digits.parse::<usize>().ok())
        .filter(|&idx| idx < REG_NAMES.len())
}
