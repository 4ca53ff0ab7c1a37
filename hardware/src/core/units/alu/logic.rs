//! ALU bitwise and comparison operations.
//!
//! Inverting operations (NOR, NAND, XNOR) are masked back to four bits.
//! Comparisons produce `0001` or `0000`.

use crate::common::Nibble;
use crate::core::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/compare variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 4-bit result. Returns `0000` for other opcodes.
pub fn execute(op: AluOp, a: Nibble, b: Nibble) -> Nibble {
    let (a, b) = (a.get(), b.get());
    match op {
        AluOp::And => Nibble::from_low_bits(a & b),
        AluOp::Or => Nibble::from_low_bits(a | b),
        AluOp::Xor => Nibble::from_low_bits(a ^ b),
        AluOp::Nor => Nibble::from_low_bits(!(a | b)),
        AluOp::Nand => Nibble::from_low_bits(!(a & b)),
        AluOp::Xnor => Nibble::from_low_bits(!(a ^ b)),
        AluOp::Gt => Nibble::from_low_bits((a > b) as u8),
        AluOp::Eq => Nibble::from_low_bits((a == b) as u8),
        _ => Nibble::ZERO,
    }
}
