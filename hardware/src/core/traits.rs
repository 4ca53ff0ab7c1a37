//! Device-under-test interface.
//!
//! Defines the behavior the testbench needs from an ALU variant so that the
//! combinational and registered units can be driven by the same loop.

use crate::core::units::alu::{AluInputs, AluOutput};

/// An ALU variant that can be driven and sampled by a testbench.
pub trait Dut {
    /// Drives operands and selector onto the unit's inputs.
    fn drive(&mut self, inputs: AluInputs);

    /// Drives the enable input.
    fn set_enable(&mut self, enable: bool);

    /// Asserts or releases reset.
    ///
    /// # Arguments
    ///
    /// * `asserted` - Logical reset state, independent of line polarity.
    fn set_reset(&mut self, asserted: bool);

    /// Processes one rising clock edge.
    fn clock_edge(&mut self);

    /// Returns the currently observable output.
    fn sample(&self) -> AluOutput;

    /// Number of clock edges between driving an input and observing it.
    fn latency(&self) -> u32;
}
