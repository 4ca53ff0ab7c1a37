//! Registered (clocked) ALU.
//!
//! Wraps the combinational ALU with an edge-triggered output register. The
//! unit has two states:
//!
//! * **Reset**: the reset line is asserted. The observable output is
//!   [`AluOutput::RESET`].
//! * **Run**: every rising clock edge samples the driven inputs, evaluates
//!   them and latches the result.
//!
//! Asserting reset clears the latch at once, so the reset value is visible
//! before the next edge arrives, and it stays cleared on every edge for as
//! long as reset is held. Releasing reset moves the unit to `Run` without
//! touching the latch; the first new value appears on the next edge. Inputs driven between two edges are therefore observable one edge
//! later.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::core::latches::{LatchObserver, OutputLatch};
use crate::core::traits::Dut;
use crate::core::units::alu::{AluInputs, AluOutput};

/// Level at which the reset line is considered asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolarity {
    /// Reset is asserted when the line is low (`rst_n`).
    #[default]
    ActiveLow,
    /// Reset is asserted when the line is high (`rst`).
    ActiveHigh,
}

impl ResetPolarity {
    /// Returns the line level that asserts reset.
    pub const fn asserted_level(self) -> bool {
        matches!(self, ResetPolarity::ActiveHigh)
    }

    /// Returns `true` if `level` asserts reset under this polarity.
    pub const fn is_asserted(self, level: bool) -> bool {
        level == self.asserted_level()
    }
}

/// State of the registered ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterState {
    /// Reset asserted; output forced to the reset value.
    Reset,
    /// Normal operation; output updated on each rising edge.
    Run,
}

/// ALU with a one-cycle output register.
#[derive(Debug)]
pub struct RegisteredAlu {
    polarity: ResetPolarity,
    reset_line: bool,
    state: RegisterState,
    inputs: AluInputs,
    enable: bool,
    latch: Arc<OutputLatch>,
    edges: u64,
    updates: u64,
}

impl RegisteredAlu {
    /// Creates a registered ALU in power-on reset.
    ///
    /// The reset line starts at its asserted level; call
    /// [`RegisteredAlu::release_reset`] before clocking in data.
    pub fn new(polarity: ResetPolarity) -> Self {
        Self {
            polarity,
            reset_line: polarity.asserted_level(),
            state: RegisterState::Reset,
            inputs: AluInputs::default(),
            enable: true,
            latch: Arc::new(OutputLatch::default()),
            edges: 0,
            updates: 0,
        }
    }

    /// Drives the raw reset line to `level`.
    ///
    /// The level is interpreted through the configured polarity.
    pub fn set_reset_line(&mut self, level: bool) {
        self.reset_line = level;
        if self.polarity.is_asserted(level) {
            if self.state != RegisterState::Reset {
                debug!(edge = self.edges, "reset asserted");
            }
            self.state = RegisterState::Reset;
            self.latch.store(AluOutput::RESET);
        } else if self.state == RegisterState::Reset {
            debug!(edge = self.edges, "reset released");
            self.state = RegisterState::Run;
        }
    }

    /// Asserts reset regardless of polarity.
    pub fn assert_reset(&mut self) {
        self.set_reset_line(self.polarity.asserted_level());
    }

    /// Deasserts reset regardless of polarity.
    pub fn release_reset(&mut self) {
        self.set_reset_line(!self.polarity.asserted_level());
    }

    /// Drives new operands and selector. Takes effect on the next edge.
    pub fn drive(&mut self, inputs: AluInputs) {
        self.inputs = inputs;
    }

    /// Sets the enable input.
    ///
    /// Enable is recorded but does not gate the register.
    pub fn set_enable(&mut self, enable: bool) {
        self.enable = enable;
    }

    /// Processes one rising clock edge.
    pub fn rising_edge(&mut self) {
        self.edges += 1;
        match self.state {
            RegisterState::Reset => self.latch.store(AluOutput::RESET),
            RegisterState::Run => {
                let out = self.inputs.evaluate();
                self.latch.store(out);
                self.updates += 1;
                debug!(
                    edge = self.edges,
                    a = self.inputs.a.get(),
                    b = self.inputs.b.get(),
                    op = %self.inputs.op,
                    result = out.result.get(),
                    flags = %out.flags,
                    "latched"
                );
            }
        }
    }

    /// Returns the currently observable output.
    pub fn output(&self) -> AluOutput {
        self.latch.load()
    }

    /// Returns a handle that can read the output from other threads.
    pub fn observer(&self) -> LatchObserver {
        LatchObserver::new(Arc::clone(&self.latch))
    }

    /// Returns the current state.
    pub fn state(&self) -> RegisterState {
        self.state
    }

    /// Returns the raw reset line level.
    pub fn reset_line(&self) -> bool {
        self.reset_line
    }

    /// Returns the enable input.
    pub fn enable(&self) -> bool {
        self.enable
    }

    /// Number of rising edges processed.
    pub fn edges(&self) -> u64 {
        self.edges
    }

    /// Number of edges on which a new value was latched.
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Default for RegisteredAlu {
    fn default() -> Self {
        Self::new(ResetPolarity::default())
    }
}

impl Dut for RegisteredAlu {
    fn drive(&mut self, inputs: AluInputs) {
        RegisteredAlu::drive(self, inputs);
    }

    fn set_enable(&mut self, enable: bool) {
        RegisteredAlu::set_enable(self, enable);
    }

    fn set_reset(&mut self, asserted: bool) {
        if asserted {
            self.assert_reset();
        } else {
            self.release_reset();
        }
    }

    fn clock_edge(&mut self) {
        self.rising_edge();
    }

    fn sample(&self) -> AluOutput {
        self.output()
    }

    fn latency(&self) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Nibble;
    use crate::core::signals::AluOp;

    fn inputs(a: u8, b: u8, op: AluOp) -> AluInputs {
        AluInputs {
            a: Nibble::new(a).unwrap(),
            b: Nibble::new(b).unwrap(),
            op,
        }
    }

    #[test]
    fn power_on_is_reset() {
        let alu = RegisteredAlu::new(ResetPolarity::ActiveLow);
        assert_eq!(alu.state(), RegisterState::Reset);
        assert!(!alu.reset_line());
        assert_eq!(alu.output(), AluOutput::RESET);
    }

    #[test]
    fn active_high_polarity() {
        let mut alu = RegisteredAlu::new(ResetPolarity::ActiveHigh);
        assert!(alu.reset_line());
        alu.set_reset_line(false);
        assert_eq!(alu.state(), RegisterState::Run);
        alu.set_reset_line(true);
        assert_eq!(alu.state(), RegisterState::Reset);
    }

    #[test]
    fn edges_in_reset_do_not_latch() {
        let mut alu = RegisteredAlu::default();
        alu.drive(inputs(3, 2, AluOp::Add));
        alu.rising_edge();
        alu.rising_edge();
        assert_eq!(alu.output(), AluOutput::RESET);
        assert_eq!(alu.edges(), 2);
        assert_eq!(alu.updates(), 0);
    }

    #[test]
    fn assert_clears_immediately() {
        let mut alu = RegisteredAlu::default();
        alu.release_reset();
        alu.drive(inputs(15, 15, AluOp::Or));
        alu.rising_edge();
        assert_eq!(alu.output().result.get(), 15);
        alu.assert_reset();
        assert_eq!(alu.output(), AluOutput::RESET);
    }
}
