//! ALU arithmetic operations.
//!
//! Implements ADD, SUB, MUL and DIV on unsigned 4-bit operands. Results are
//! the low four bits of the true result. Division by zero does not fault; it
//! returns the all-ones sentinel `1111`.

use crate::common::Nibble;
use crate::core::signals::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 4-bit result. Returns `0000` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: Nibble, b: Nibble) -> Nibble {
    let (a, b) = (a.get(), b.get());
    match op {
        AluOp::Add => Nibble::from_low_bits(a.wrapping_add(b)),
        AluOp::Sub => Nibble::from_low_bits(a.wrapping_sub(b)),
        AluOp::Mul => Nibble::from_low_bits(a.wrapping_mul(b)),
        AluOp::Div => match a.checked_div(b) {
            Some(q) => Nibble::from_low_bits(q),
            None => Nibble::MAX,
        },
        _ => Nibble::ZERO,
    }
}
