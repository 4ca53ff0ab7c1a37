//! ALU status flags.
//!
//! Zero and negative are properties of the result alone and are reported for
//! every operation. Carry and overflow are only meaningful for the additive
//! operations (ADD, SUB) and are clear for everything else, shifts
//! included: the bit shifted out by SHL/SHR is discarded, not surfaced as
//! carry.

use std::fmt;

use serde::Serialize;

use crate::common::Nibble;
use crate::core::signals::AluOp;

/// Carry/borrow threshold: an unsigned sum above this does not fit in 4 bits.
const NIBBLE_MAX: u8 = 0x0F;

/// Status flags produced alongside an ALU result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Flags {
    /// ADD: unsigned sum exceeded 15. SUB: borrow (A < B).
    pub carry: bool,
    /// Result is `0000`.
    pub zero: bool,
    /// Bit 3 of the result.
    pub negative: bool,
    /// Signed two's-complement overflow for ADD/SUB.
    pub overflow: bool,
}

impl Flags {
    /// Computes the flags for an evaluated operation.
    ///
    /// This is the single definition of flag semantics; both the ALU core
    /// and the testbench's expected-value path go through it.
    ///
    /// # Arguments
    ///
    /// * `op`     - The operation that produced `result`.
    /// * `a`      - First operand.
    /// * `b`      - Second operand.
    /// * `result` - The 4-bit result of `op` on `a` and `b`.
    pub fn compute(op: AluOp, a: Nibble, b: Nibble, result: Nibble) -> Flags {
        let (carry, overflow) = match op {
            AluOp::Add => (
                a.get() + b.get() > NIBBLE_MAX,
                Self::add_overflow(a, b, result),
            ),
            AluOp::Sub => (a.get() < b.get(), Self::sub_overflow(a, b, result)),
            _ => (false, false),
        };

        Flags {
            carry,
            zero: result.is_zero(),
            negative: result.msb(),
            overflow,
        }
    }

    /// Both operands share a sign and the result's sign differs from it.
    fn add_overflow(a: Nibble, b: Nibble, result: Nibble) -> bool {
        a.msb() == b.msb() && result.msb() != a.msb()
    }

    /// Operand signs differ and the result's sign differs from A's.
    fn sub_overflow(a: Nibble, b: Nibble, result: Nibble) -> bool {
        a.msb() != b.msb() && result.msb() != a.msb()
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.carry as u8, self.zero as u8, self.negative as u8, self.overflow as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u8) -> Nibble {
        Nibble::from_low_bits(v)
    }

    #[test]
    fn add_carry_and_overflow() {
        // 7 + 1 = 8: signed overflow (+7 + +1 -> -8), no unsigned carry.
        let f = Flags::compute(AluOp::Add, n(7), n(1), n(8));
        assert!(!f.carry);
        assert!(f.overflow);
        assert!(f.negative);

        // 8 + 8 = 16: carry, result 0, signed overflow (-8 + -8).
        let f = Flags::compute(AluOp::Add, n(8), n(8), n(0));
        assert!(f.carry);
        assert!(f.zero);
        assert!(f.overflow);
    }

    #[test]
    fn sub_borrow_and_overflow() {
        // 2 - 3 = -1: borrow, no signed overflow.
        let f = Flags::compute(AluOp::Sub, n(2), n(3), n(0xF));
        assert!(f.carry);
        assert!(!f.overflow);

        // 8 - 1 = 7: -8 - +1 overflows.
        let f = Flags::compute(AluOp::Sub, n(8), n(1), n(7));
        assert!(!f.carry);
        assert!(f.overflow);
    }

    #[test]
    fn shifts_leave_carry_clear() {
        let f = Flags::compute(AluOp::Shl, n(0b1000), n(0), n(0));
        assert!(!f.carry);
        assert!(f.zero);
        let f = Flags::compute(AluOp::Shr, n(0b0001), n(0), n(0));
        assert!(!f.carry);
    }

    #[test]
    fn display_order_is_cznv() {
        let f = Flags {
            carry: true,
            zero: false,
            negative: true,
            overflow: false,
        };
        assert_eq!(f.to_string(), "1010");
    }
}
