//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational 4-bit ALU. It evaluates one of
//! sixteen operations on two 4-bit operands and produces a 4-bit result
//! together with the carry, zero, negative and overflow flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div
//! - [`shifts`]:     Shl, Shr, Rol, Ror
//! - [`logic`]:      And, Or, Xor, Nor, Nand, Xnor, Gt, Eq
//!
//! Flags are derived afterwards by [`flags::Flags::compute`], the only place
//! carry and overflow are defined.

/// Integer arithmetic operations (add, subtract, multiply, divide).
pub mod arithmetic;

/// Status flag definitions and computation.
pub mod flags;

/// Bitwise logical and comparison operations.
pub mod logic;

/// Shift and rotate operations.
pub mod shifts;

use serde::Serialize;

use crate::common::{Nibble, Result};
use crate::core::signals::AluOp;

pub use flags::Flags;

/// Bit position of the overflow flag in a packed output byte.
pub const OVERFLOW_BIT: u8 = 4;
/// Bit position of the negative flag in a packed output byte.
pub const NEGATIVE_BIT: u8 = 5;
/// Bit position of the zero flag in a packed output byte.
pub const ZERO_BIT: u8 = 6;
/// Bit position of the carry flag in a packed output byte.
pub const CARRY_BIT: u8 = 7;

/// Operands and selector presented to the ALU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AluInputs {
    /// Operand A.
    pub a: Nibble,
    /// Operand B.
    pub b: Nibble,
    /// Selected operation.
    pub op: AluOp,
}

impl AluInputs {
    /// Bundles an input triple.
    pub const fn new(a: Nibble, b: Nibble, op: AluOp) -> Self {
        Self { a, b, op }
    }

    /// Evaluates this triple on the combinational ALU.
    pub fn evaluate(self) -> AluOutput {
        Alu::evaluate(self.a, self.b, self.op)
    }
}

/// Result and status flags produced by one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AluOutput {
    /// 4-bit result.
    pub result: Nibble,
    /// Status flags.
    pub flags: Flags,
}

impl AluOutput {
    /// Output held by the registered ALU while reset is asserted.
    ///
    /// The result is zero, so the zero flag is set and every other flag is
    /// clear.
    pub const RESET: AluOutput = AluOutput {
        result: Nibble::ZERO,
        flags: Flags {
            carry: false,
            zero: true,
            negative: false,
            overflow: false,
        },
    };

    /// Packs the output into one byte.
    ///
    /// Layout: bits `[3:0]` result, bit 4 overflow, bit 5 negative,
    /// bit 6 zero, bit 7 carry.
    pub const fn to_bits(self) -> u8 {
        self.result.get()
            | (self.flags.overflow as u8) << OVERFLOW_BIT
            | (self.flags.negative as u8) << NEGATIVE_BIT
            | (self.flags.zero as u8) << ZERO_BIT
            | (self.flags.carry as u8) << CARRY_BIT
    }

    /// Unpacks an output from the layout produced by [`AluOutput::to_bits`].
    pub const fn from_bits(bits: u8) -> AluOutput {
        AluOutput {
            result: Nibble::from_low_bits(bits),
            flags: Flags {
                carry: (bits >> CARRY_BIT) & 1 != 0,
                zero: (bits >> ZERO_BIT) & 1 != 0,
                negative: (bits >> NEGATIVE_BIT) & 1 != 0,
                overflow: (bits >> OVERFLOW_BIT) & 1 != 0,
            },
        }
    }
}

/// Arithmetic Logic Unit for 4-bit operands.
///
/// Stateless; every method is an associated function and may be called from
/// any thread.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Evaluates one ALU operation.
    ///
    /// Dispatches to the appropriate submodule based on the operation type
    /// and then derives the status flags from the operands and result.
    ///
    /// # Arguments
    ///
    /// * `a`  - First operand
    /// * `b`  - Second operand (ignored by shifts and rotates)
    /// * `op` - The ALU operation to perform
    ///
    /// # Returns
    ///
    /// The 4-bit result and flags. Total over all 4096 input triples.
    ///
    /// # Examples
    ///
    /// ```
    /// use alu4::common::Nibble;
    /// use alu4::core::signals::AluOp;
    /// use alu4::core::units::alu::Alu;
    ///
    /// let a = Nibble::new(3).unwrap();
    /// let b = Nibble::new(5).unwrap();
    /// let out = Alu::evaluate(a, b, AluOp::Add);
    /// assert_eq!(out.result.get(), 8);
    /// assert!(out.flags.negative);
    /// assert!(out.flags.overflow);
    ///
    /// // Division by zero saturates.
    /// let out = Alu::evaluate(a, Nibble::ZERO, AluOp::Div);
    /// assert_eq!(out.result.get(), 0b1111);
    /// ```
    pub fn evaluate(a: Nibble, b: Nibble, op: AluOp) -> AluOutput {
        let result = match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div => arithmetic::execute(op, a, b),

            AluOp::Shl | AluOp::Shr | AluOp::Rol | AluOp::Ror => shifts::execute(op, a),

            AluOp::And
            | AluOp::Or
            | AluOp::Xor
            | AluOp::Nor
            | AluOp::Nand
            | AluOp::Xnor
            | AluOp::Gt
            | AluOp::Eq => logic::execute(op, a, b),
        };

        AluOutput {
            result,
            flags: Flags::compute(op, a, b, result),
        }
    }

    /// Evaluates an operation given raw integer inputs.
    ///
    /// # Returns
    ///
    /// `AluError::OperandOutOfRange` or `AluError::SelectorOutOfRange` if
    /// any input exceeds 15; values are never masked.
    pub fn evaluate_raw(a: u8, b: u8, sel: u8) -> Result<AluOutput> {
        let a = Nibble::new(a)?;
        let b = Nibble::new(b)?;
        let op = AluOp::try_from(sel)?;
        Ok(Self::evaluate(a, b, op))
    }
}
