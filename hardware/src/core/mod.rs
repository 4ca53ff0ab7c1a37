//! ALU core.
//!
//! This module contains the combinational ALU, its registered (clocked)
//! wrapper and the operation selector definitions.

/// Combinational ALU variant.
pub mod combinational;

/// Atomic output latch shared by the registered variant and its observers.
pub mod latches;

/// Registered ALU variant with a one-cycle output latch.
pub mod registered;

/// Operation selector encoding.
pub mod signals;

/// Testbench-facing traits.
pub mod traits;

/// Execution units.
pub mod units;

pub use combinational::CombinationalAlu;
pub use registered::{RegisteredAlu, ResetPolarity};
pub use signals::AluOp;
pub use units::alu::{Alu, AluInputs, AluOutput, Flags};
