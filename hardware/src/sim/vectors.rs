//! Input vector sets.

use serde::Deserialize;

use crate::common::Nibble;
use crate::core::signals::AluOp;
use crate::core::units::alu::AluInputs;

/// Operand pairs swept through every operation by the directed set.
pub const DIRECTED_OPERANDS: [(u8, u8); 5] = [
    (0b0011, 0b0010),
    (0b1111, 0b0001),
    (0b0111, 0b0111),
    (0b0000, 0b0101),
    (0b1010, 0b0101),
];

/// Which input triples a testbench run applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VectorSet {
    /// All 4096 (A, B, selector) triples; A outermost, selector innermost.
    #[default]
    Exhaustive,
    /// Every operation on a handful of hand-picked operand pairs.
    Directed,
}

impl VectorSet {
    /// Generates the input triples of this set in application order.
    pub fn generate(self) -> Vec<AluInputs> {
        match self {
            VectorSet::Exhaustive => Nibble::all()
                .flat_map(|a| {
                    Nibble::all().flat_map(move |b| {
                        AluOp::ALL.iter().map(move |&op| AluInputs::new(a, b, op))
                    })
                })
                .collect(),
            VectorSet::Directed => DIRECTED_OPERANDS
                .iter()
                .flat_map(|&(a, b)| {
                    let (a, b) = (Nibble::from_low_bits(a), Nibble::from_low_bits(b));
                    AluOp::ALL.iter().map(move |&op| AluInputs::new(a, b, op))
                })
                .collect(),
        }
    }

    /// Number of triples in this set.
    pub fn len(self) -> usize {
        match self {
            VectorSet::Exhaustive => 16 * 16 * AluOp::ALL.len(),
            VectorSet::Directed => DIRECTED_OPERANDS.len() * AluOp::ALL.len(),
        }
    }

    /// Always `false`; every set applies at least one vector.
    pub fn is_empty(self) -> bool {
        false
    }
}
