//! Common types used throughout the ALU model.
//!
//! This module provides the validated 4-bit value type and the error
//! definitions that are shared between the core, the testbench and the CLI.

/// Error types and the crate-wide `Result` alias.
pub mod error;

/// Validated 4-bit value type.
pub mod nibble;

pub use error::{AluError, Result};
pub use nibble::Nibble;
