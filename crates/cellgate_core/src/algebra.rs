//! Symbolic NAND algebra over the 16 two-input boolean functions.
//!
//! Every function is identified by its 4-bit truth table, so composing two
//! functions through a NAND gate is a bitwise NAND of their tables. The full
//! 16×16 result table is built at compile time.

use cellgate_data::BoolFn;

const fn build_nand_table() -> [[BoolFn; 16]; 16] {
    let mut table = [[BoolFn::False; 16]; 16];
    let mut l = 0;
    while l < 16 {
        let mut r = 0;
        while r < 16 {
            table[l][r] = BoolFn::from_truth_table(!(l & r) as u8);
            r += 1;
        }
        l += 1;
    }
    table
}

/// `NAND_TABLE[l][r]` is `NOT(l AND r)` for truth tables `l` and `r`.
pub static NAND_TABLE: [[BoolFn; 16]; 16] = build_nand_table();

/// NAND of two resolved functions.
#[inline]
#[must_use]
pub fn nand(left: BoolFn, right: BoolFn) -> BoolFn {
    NAND_TABLE[left.truth_table() as usize][right.truth_table() as usize]
}

/// NAND of two possibly-undetermined operands.
///
/// A FALSE operand forces TRUE even when the other side is still `None`;
/// otherwise both sides must be resolved.
#[must_use]
pub fn compose(left: Option<BoolFn>, right: Option<BoolFn>) -> Option<BoolFn> {
    if left == Some(BoolFn::False) || right == Some(BoolFn::False) {
        return Some(BoolFn::True);
    }
    match (left, right) {
        (Some(l), Some(r)) => Some(nand(l, r)),
        _ => None,
    }
}
