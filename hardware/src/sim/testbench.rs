//! Testbench Driver.
//!
//! Applies input vectors to a device under test through the pin words,
//! clocks it when it is registered, and checks every sampled output against
//! the combinational reference. The flow mirrors the HDL harness:
//!
//! 1. **Reset:** assert reset for the configured number of edges (the output
//!    must read as the reset value on each), release it, and clock one more
//!    edge.
//! 2. **Apply:** for each vector, drive `ui_in`/`uio_in`; a registered unit
//!    receives one rising edge before its output is sampled.
//! 3. **Check:** decode `uo_out` and compare result and all four flags with
//!    the reference evaluation.

use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::traits::Dut;
use crate::core::units::alu::{AluInputs, AluOutput};
use crate::core::{CombinationalAlu, RegisteredAlu, ResetPolarity};
use crate::sim::clock::Clock;
use crate::sim::pins::PinBus;
use crate::sim::report::{Record, ResultTable};
use crate::sim::vectors::VectorSet;
use crate::stats::SimStats;

/// Which ALU variant the testbench instantiates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DutMode {
    /// Output follows inputs in the same cycle.
    Combinational,
    /// Output latched on the rising edge.
    #[default]
    Registered,
}

impl DutMode {
    /// Instantiates the selected variant.
    pub fn instantiate(self, polarity: ResetPolarity) -> Box<dyn Dut> {
        match self {
            DutMode::Combinational => Box::new(CombinationalAlu::new()),
            DutMode::Registered => Box::new(RegisteredAlu::new(polarity)),
        }
    }
}

/// Drives one device under test and collects results.
pub struct Testbench {
    dut: Box<dyn Dut>,
    clock: Clock,
    pins: PinBus,
    reset_cycles: u32,
    trace: bool,
    pub stats: SimStats,
    pub table: ResultTable,
}

impl Testbench {
    /// Creates a testbench around `dut`.
    ///
    /// # Arguments
    ///
    /// * `dut`          - The unit to drive.
    /// * `period_ns`    - Clock period.
    /// * `reset_cycles` - Edges to hold reset for during [`Testbench::reset`].
    pub fn new(dut: Box<dyn Dut>, period_ns: u64, reset_cycles: u32) -> Self {
        Self {
            dut,
            clock: Clock::new(period_ns),
            pins: PinBus {
                ena: true,
                ..PinBus::default()
            },
            reset_cycles,
            trace: cfg!(feature = "always-trace"),
            stats: SimStats::default(),
            table: ResultTable::new(),
        }
    }

    /// Builds the testbench described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let dut = config.bench.mode.instantiate(config.clock.reset_polarity);
        let mut tb = Self::new(dut, config.clock.period_ns, config.clock.reset_cycles);
        tb.set_trace(config.general.trace_vectors);
        tb.set_enable(config.bench.enable);
        tb
    }

    /// Enables per-vector logging.
    pub fn set_trace(&mut self, trace: bool) {
        self.trace = trace || cfg!(feature = "always-trace");
    }

    /// Drives the enable line.
    pub fn set_enable(&mut self, ena: bool) {
        self.pins.ena = ena;
        self.dut.set_enable(ena);
    }

    /// Runs the reset sequence.
    ///
    /// For a registered unit, each edge spent in reset is checked against
    /// [`AluOutput::RESET`]; deviations are counted as reset violations.
    pub fn reset(&mut self) {
        self.dut.set_reset(true);
        for _ in 0..self.reset_cycles {
            self.edge();
            self.stats.reset_cycles += 1;
            let out = self.dut.sample();
            if self.dut.latency() > 0 && out != AluOutput::RESET {
                self.stats.reset_violations += 1;
                warn!(
                    cycle = self.clock.cycles(),
                    observed = out.to_bits(),
                    "output not cleared during reset"
                );
            }
        }
        self.dut.set_reset(false);
        self.edge();
    }

    /// Applies one vector and checks the sampled output.
    ///
    /// # Returns
    ///
    /// The record added to the result table.
    pub fn apply(&mut self, inputs: AluInputs) -> Record {
        self.pins.drive(inputs);
        self.dut.drive(self.pins.inputs());
        for _ in 0..self.dut.latency() {
            self.edge();
        }

        let _ = self.pins.capture(self.dut.sample());
        let observed = self.pins.output();
        let expected = inputs.evaluate();
        let record = Record::new(self.clock.cycles(), inputs, observed, expected);

        self.stats.record(inputs.op, observed, record.passed());
        if !record.passed() {
            warn!(
                a = inputs.a.get(),
                b = inputs.b.get(),
                op = %inputs.op,
                got = observed.result.get(),
                got_flags = %observed.flags,
                exp = expected.result.get(),
                exp_flags = %expected.flags,
                "ALU mismatch"
            );
        } else if self.trace {
            info!(
                "A={:b}({}) B={:b}({}) Sel={:b}({}) => Out={:b}({}) Flags [CZNV]={}",
                inputs.a,
                inputs.a,
                inputs.b,
                inputs.b,
                inputs.op.selector(),
                inputs.op,
                observed.result,
                observed.result,
                observed.flags
            );
        }

        self.table.push(record);
        record
    }

    /// Resets the unit and applies every vector of `set`.
    ///
    /// Statistics and the result table start fresh on every run.
    ///
    /// # Returns
    ///
    /// `true` if all checks passed.
    pub fn run(&mut self, set: VectorSet) -> bool {
        let vectors = set.generate();
        info!(vectors = vectors.len(), set = ?set, "starting run");
        self.table = ResultTable::with_capacity(vectors.len());
        self.stats = SimStats::default();

        self.reset();
        for v in vectors {
            let _ = self.apply(v);
        }

        info!(
            checks = self.stats.checks,
            mismatches = self.stats.mismatches,
            cycles = self.stats.cycles,
            "run complete"
        );
        self.stats.all_passed()
    }

    /// Current pin words.
    pub fn pins(&self) -> PinBus {
        self.pins
    }

    /// The bench clock.
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    fn edge(&mut self) {
        let _ = self.clock.tick();
        self.dut.clock_edge();
        self.stats.cycles += 1;
    }
}
