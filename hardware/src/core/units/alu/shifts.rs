//! ALU shift and rotate operations.
//!
//! All four operations move operand A by exactly one position; operand B is
//! not read. Shifts discard the bit moved out, rotates wrap it around to the
//! opposite end of the nibble.

use crate::common::Nibble;
use crate::core::signals::AluOp;

/// Number of bits in an operand.
const WIDTH: u8 = 4;

/// Executes a shift or rotate.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift/rotate variant).
/// * `a`  - The value to be shifted.
///
/// # Returns
///
/// The 4-bit result. Returns `0000` for other opcodes.
pub fn execute(op: AluOp, a: Nibble) -> Nibble {
    let v = a.get();
    match op {
        AluOp::Shl => Nibble::from_low_bits(v << 1),
        AluOp::Shr => Nibble::from_low_bits(v >> 1),
        AluOp::Rol => Nibble::from_low_bits((v << 1) | (v >> (WIDTH - 1))),
        AluOp::Ror => Nibble::from_low_bits((v >> 1) | ((v & 1) << (WIDTH - 1))),
        _ => Nibble::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u8) -> Nibble {
        Nibble::from_low_bits(v)
    }

    #[test]
    fn shifts_drop_the_outgoing_bit() {
        assert_eq!(execute(AluOp::Shl, n(0b1001)).get(), 0b0010);
        assert_eq!(execute(AluOp::Shr, n(0b1001)).get(), 0b0100);
    }

    #[test]
    fn rotates_wrap() {
        assert_eq!(execute(AluOp::Rol, n(0b1001)).get(), 0b0011);
        assert_eq!(execute(AluOp::Ror, n(0b1001)).get(), 0b1100);
        assert_eq!(execute(AluOp::Rol, n(0b1111)).get(), 0b1111);
    }
}
