//! 4-bit ALU Behavioral Model.
//!
//! This crate models a 4-bit Arithmetic Logic Unit: sixteen operations on two
//! 4-bit operands producing a 4-bit result and carry/zero/negative/overflow
//! flags. It provides a combinational variant and a registered variant with
//! a one-cycle output latch, plus the verification bench used to check them.
//!
//! # Architecture
//!
//! * **Core**: pure evaluation function, operation selector, output latch.
//! * **Bench**: clock/reset driver, pin-word packing, vector sets, result
//!   tables.
//!
//! # Modules
//!
//! * `common`: Validated 4-bit values and error handling.
//! * `config`: Configuration loading and parsing.
//! * `core`: ALU implementation.
//! * `sim`: Testbench harness and result tables.
//! * `stats`: Testbench statistics collection.

/// Shared types and error handling.
///
/// Provides the `Nibble` value type used for every operand, selector and
/// result, and the crate-wide error enum.
pub mod common;

/// Configuration system for testbench runs.
///
/// Loads and parses TOML configuration files selecting the unit variant,
/// clock and reset settings, vector set and output files.
pub mod config;

/// ALU core implementation.
///
/// Implements the combinational evaluation function, the sixteen-entry
/// operation table and the registered wrapper.
pub mod core;

/// Testbench harness.
///
/// Drives a unit through its pin words, checks it against the reference
/// evaluation and records the results.
pub mod sim;

/// Testbench statistics collection and reporting.
pub mod stats;
