//! ALU operation selector.
//!
//! This module defines the sixteen operations of the ALU and their 4-bit
//! selector encoding. The encoding is fully decoded: every code in `0..=15`
//! names exactly one operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{AluError, Nibble, Result};

/// ALU operation types.
///
/// The discriminant of each variant is its selector code.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AluOp {
    /// Addition modulo 16.
    #[default]
    Add = 0b0000,
    /// Subtraction modulo 16 (two's-complement wraparound).
    Sub = 0b0001,
    /// Multiplication modulo 16.
    Mul = 0b0010,
    /// Unsigned floor division, `1111` when dividing by zero.
    Div = 0b0011,
    /// Shift left by one.
    Shl = 0b0100,
    /// Logical shift right by one.
    Shr = 0b0101,
    /// Rotate left by one.
    Rol = 0b0110,
    /// Rotate right by one.
    Ror = 0b0111,
    /// Bitwise AND.
    And = 0b1000,
    /// Bitwise OR.
    Or = 0b1001,
    /// Bitwise XOR.
    Xor = 0b1010,
    /// Bitwise NOR.
    Nor = 0b1011,
    /// Bitwise NAND.
    Nand = 0b1100,
    /// Bitwise XNOR.
    Xnor = 0b1101,
    /// Unsigned greater-than comparison.
    Gt = 0b1110,
    /// Equality comparison.
    Eq = 0b1111,
}

impl AluOp {
    /// All operations in selector order.
    pub const ALL: [AluOp; 16] = [
        AluOp::Add,
        AluOp::Sub,
        AluOp::Mul,
        AluOp::Div,
        AluOp::Shl,
        AluOp::Shr,
        AluOp::Rol,
        AluOp::Ror,
        AluOp::And,
        AluOp::Or,
        AluOp::Xor,
        AluOp::Nor,
        AluOp::Nand,
        AluOp::Xnor,
        AluOp::Gt,
        AluOp::Eq,
    ];

    /// Decodes a selector code.
    ///
    /// Total over the 4-bit domain.
    pub const fn from_selector(sel: Nibble) -> AluOp {
        AluOp::ALL[sel.get() as usize]
    }

    /// Returns the 4-bit selector code of this operation.
    pub const fn selector(self) -> Nibble {
        Nibble::from_low_bits(self as u8)
    }

    /// Returns the upper-case mnemonic, e.g. `"XNOR"`.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
            AluOp::Div => "DIV",
            AluOp::Shl => "SHL",
            AluOp::Shr => "SHR",
            AluOp::Rol => "ROL",
            AluOp::Ror => "ROR",
            AluOp::And => "AND",
            AluOp::Or => "OR",
            AluOp::Xor => "XOR",
            AluOp::Nor => "NOR",
            AluOp::Nand => "NAND",
            AluOp::Xnor => "XNOR",
            AluOp::Gt => "GT",
            AluOp::Eq => "EQ",
        }
    }

    /// Returns `true` for the operations that define carry and overflow.
    pub const fn is_additive(self) -> bool {
        matches!(self, AluOp::Add | AluOp::Sub)
    }

    /// Returns `true` if the result is unchanged when A and B are swapped.
    ///
    /// The unary operations (shifts and rotates) ignore B and are reported
    /// as non-commutative.
    pub const fn is_commutative(self) -> bool {
        matches!(
            self,
            AluOp::Add
                | AluOp::Mul
                | AluOp::And
                | AluOp::Or
                | AluOp::Xor
                | AluOp::Nor
                | AluOp::Nand
                | AluOp::Xnor
                | AluOp::Eq
        )
    }

    /// Returns `true` for operations that only read operand A.
    pub const fn is_unary(self) -> bool {
        matches!(self, AluOp::Shl | AluOp::Shr | AluOp::Rol | AluOp::Ror)
    }
}

impl TryFrom<u8> for AluOp {
    type Error = AluError;

    fn try_from(sel: u8) -> Result<Self> {
        let sel = Nibble::new(sel).map_err(|_| AluError::SelectorOutOfRange(sel.to_string()))?;
        Ok(AluOp::from_selector(sel))
    }
}

impl From<AluOp> for u8 {
    fn from(op: AluOp) -> u8 {
        op as u8
    }
}

impl FromStr for AluOp {
    type Err = AluError;

    /// Parses a mnemonic (case-insensitive) or a selector number.
    ///
    /// Selector numbers may be written in decimal (`"10"`) or binary with a
    /// `0b` prefix (`"0b1010"`). A well-formed number above 15 is reported
    /// as out of range however many digits it has.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(op) = AluOp::ALL
            .iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
        {
            return Ok(*op);
        }

        let (digits, radix) = match s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
            Some(bits) => (bits, 2),
            None => (s, 10),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(AluError::UnknownOperation(s.to_string()));
        }
        match u8::from_str_radix(digits, radix) {
            Ok(code) => AluOp::try_from(code),
            Err(_) => Err(AluError::SelectorOutOfRange(s.to_string())),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_round_trips_through_table() {
        for (code, op) in AluOp::ALL.iter().enumerate() {
            assert_eq!(op.selector().get() as usize, code);
        }
    }

    #[test]
    fn parses_names_and_codes() {
        assert_eq!("xnor".parse::<AluOp>().unwrap(), AluOp::Xnor);
        assert_eq!("GT".parse::<AluOp>().unwrap(), AluOp::Gt);
        assert_eq!("3".parse::<AluOp>().unwrap(), AluOp::Div);
        assert_eq!("0b1010".parse::<AluOp>().unwrap(), AluOp::Xor);
        assert!(matches!(
            "16".parse::<AluOp>(),
            Err(AluError::SelectorOutOfRange(s)) if s == "16"
        ));
        assert!(matches!(
            "256".parse::<AluOp>(),
            Err(AluError::SelectorOutOfRange(s)) if s == "256"
        ));
        assert!(matches!(
            "0b100000000".parse::<AluOp>(),
            Err(AluError::SelectorOutOfRange(_))
        ));
        assert!(matches!(
            "0b".parse::<AluOp>(),
            Err(AluError::UnknownOperation(_))
        ));
        assert!(matches!(
            "mod".parse::<AluOp>(),
            Err(AluError::UnknownOperation(_))
        ));
    }
}
