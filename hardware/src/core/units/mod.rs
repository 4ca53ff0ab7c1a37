//! Execution units.

/// 4-bit arithmetic logic unit.
pub mod alu;
