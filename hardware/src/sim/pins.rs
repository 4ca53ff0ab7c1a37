//! Pin-level Word Packing.
//!
//! The ALU is exposed to the harness through three 8-bit words and an enable
//! line:
//!
//! | Word     | Bits    | Meaning                  |
//! |----------|---------|--------------------------|
//! | `ui_in`  | `[3:0]` | operand A                |
//! | `ui_in`  | `[7:4]` | operand B                |
//! | `uio_in` | `[3:0]` | selector                 |
//! | `uio_in` | `[7:4]` | not connected            |
//! | `uo_out` | `[3:0]` | result                   |
//! | `uo_out` | `4`     | overflow                 |
//! | `uo_out` | `5`     | negative                 |
//! | `uo_out` | `6`     | zero                     |
//! | `uo_out` | `7`     | carry                    |
//!
//! Field extraction keeps only the wired bits; it is pin wiring, not operand
//! masking, since no field can carry a value wider than four bits.

use crate::common::Nibble;
use crate::core::signals::AluOp;
use crate::core::units::alu::{AluInputs, AluOutput};

/// Bit offset of operand B within `ui_in`.
const B_SHIFT: u8 = 4;

/// The harness-facing pin words.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinBus {
    /// Dedicated inputs: B in the high nibble, A in the low nibble.
    pub ui_in: u8,
    /// Bidirectional pins used as inputs: selector in the low nibble.
    pub uio_in: u8,
    /// Dedicated outputs: flags in the high nibble, result in the low nibble.
    pub uo_out: u8,
    /// Enable line.
    pub ena: bool,
}

impl PinBus {
    /// Encodes operands into a `ui_in` word.
    pub const fn encode_operands(a: Nibble, b: Nibble) -> u8 {
        (b.get() << B_SHIFT) | a.get()
    }

    /// Drives `inputs` onto `ui_in` and `uio_in`.
    pub fn drive(&mut self, inputs: AluInputs) {
        self.ui_in = Self::encode_operands(inputs.a, inputs.b);
        self.uio_in = u8::from(inputs.op);
    }

    /// Decodes the input words.
    pub fn inputs(&self) -> AluInputs {
        AluInputs {
            a: Nibble::from_low_bits(self.ui_in),
            b: Nibble::from_low_bits(self.ui_in >> B_SHIFT),
            op: AluOp::from_selector(Nibble::from_low_bits(self.uio_in)),
        }
    }

    /// Places an ALU output on `uo_out` and returns the word.
    pub fn capture(&mut self, out: AluOutput) -> u8 {
        self.uo_out = out.to_bits();
        self.uo_out
    }

    /// Decodes `uo_out`.
    pub fn output(&self) -> AluOutput {
        AluOutput::from_bits(self.uo_out)
    }

    /// Returns only the result field of `uo_out`.
    pub fn result(&self) -> Nibble {
        Nibble::from_low_bits(self.uo_out)
    }
}
