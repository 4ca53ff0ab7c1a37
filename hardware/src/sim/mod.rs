//! Verification bench.
//!
//! Drives an ALU variant the way the HDL harness does: a free-running
//! clock, a reset sequence, operand/selector words on 8-bit input pins and
//! a result word on an 8-bit output pin. Every observed output is checked
//! against the combinational reference and recorded in a result table.

/// Clock generator.
pub mod clock;

/// Pin-level word packing.
pub mod pins;

/// Result tables (CSV and JSON).
pub mod report;

/// Testbench driver and checker.
pub mod testbench;

/// Input vector sets.
pub mod vectors;

pub use pins::PinBus;
pub use report::{Record, ResultTable};
pub use testbench::{DutMode, Testbench};
pub use vectors::VectorSet;
