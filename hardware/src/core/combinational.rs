//! Combinational ALU.
//!
//! The output follows the inputs within the same cycle. The unit has no
//! state beyond the currently driven inputs, so clock and reset have no
//! effect on it.

use crate::core::traits::Dut;
use crate::core::units::alu::{AluInputs, AluOutput};

/// ALU whose output is a direct function of its current inputs.
///
/// Enable is accepted through [`Dut::set_enable`] and ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombinationalAlu {
    inputs: AluInputs,
}

impl CombinationalAlu {
    /// Creates a unit driving `ADD 0, 0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the inputs currently driven.
    pub fn inputs(&self) -> AluInputs {
        self.inputs
    }
}

impl Dut for CombinationalAlu {
    fn drive(&mut self, inputs: AluInputs) {
        self.inputs = inputs;
    }

    fn set_enable(&mut self, _enable: bool) {}

    fn set_reset(&mut self, _asserted: bool) {}

    fn clock_edge(&mut self) {}

    fn sample(&self) -> AluOutput {
        self.inputs.evaluate()
    }

    fn latency(&self) -> u32 {
        0
    }
}
