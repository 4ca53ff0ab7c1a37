//! 4-bit Values.
//!
//! Every operand, selector code and result in the ALU is a 4-bit quantity.
//! `Nibble` is the validated carrier for such a value: once constructed it is
//! guaranteed to lie in `0..=15`, so the core never needs to re-check or
//! re-mask its inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{AluError, Result};

/// Mask selecting the low four bits of a byte.
pub const NIBBLE_MASK: u8 = 0x0F;

/// Bit position of the sign bit under a two's-complement interpretation.
pub const SIGN_BIT: u8 = 3;

/// A validated unsigned 4-bit value.
///
/// Construction from a raw integer goes through [`Nibble::new`], which
/// rejects anything above 15. Internal code that derives a value from wider
/// arithmetic uses [`Nibble::from_low_bits`], which keeps only bits `[3:0]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Nibble(u8);

impl Nibble {
    /// The all-zeros value `0000`.
    pub const ZERO: Nibble = Nibble(0);

    /// The value `0001`.
    pub const ONE: Nibble = Nibble(1);

    /// The all-ones value `1111`.
    pub const MAX: Nibble = Nibble(NIBBLE_MASK);

    /// Creates a nibble from a raw value.
    ///
    /// # Arguments
    ///
    /// * `value` - Raw value, must be in `0..=15`.
    ///
    /// # Returns
    ///
    /// The validated nibble, or `AluError::OperandOutOfRange` if `value`
    /// does not fit in four bits.
    pub fn new(value: u8) -> Result<Self> {
        if value > NIBBLE_MASK {
            return Err(AluError::OperandOutOfRange(value));
        }
        Ok(Nibble(value))
    }

    /// Creates a nibble from the low four bits of `value`.
    ///
    /// Used where truncation is the defined behavior: modular arithmetic
    /// results and fields extracted from wider pin words.
    pub const fn from_low_bits(value: u8) -> Self {
        Nibble(value & NIBBLE_MASK)
    }

    /// Returns the raw value in `0..=15`.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns bit `n` (0 = least significant) as a boolean.
    pub const fn bit(self, n: u8) -> bool {
        (self.0 >> n) & 1 != 0
    }

    /// Returns the sign bit (bit 3).
    pub const fn msb(self) -> bool {
        self.bit(SIGN_BIT)
    }

    /// Returns the least significant bit (bit 0).
    pub const fn lsb(self) -> bool {
        self.bit(0)
    }

    /// Returns `true` if every bit is clear.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Iterates over all sixteen nibbles in ascending order.
    pub fn all() -> impl Iterator<Item = Nibble> + Clone {
        (0..=NIBBLE_MASK).map(Nibble)
    }
}

impl TryFrom<u8> for Nibble {
    type Error = AluError;

    fn try_from(value: u8) -> Result<Self> {
        Nibble::new(value)
    }
}

impl From<Nibble> for u8 {
    fn from(n: Nibble) -> u8 {
        n.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for Nibble {
    /// Formats as four binary digits unless a width is given.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.width().is_some() {
            fmt::Binary::fmt(&self.0, f)
        } else {
            write!(f, "{:04b}", self.0)
        }
    }
}
