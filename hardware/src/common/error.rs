//! Error definitions.
//!
//! The arithmetic core itself never fails: every operand/selector triple in
//! the 4-bit domain has a defined output. Errors only arise at the edges of
//! the crate:
//! 1. **Input validation:** raw integers that do not fit in four bits.
//! 2. **Name parsing:** unknown operation mnemonics given on the command line.
//! 3. **Configuration:** unreadable or malformed TOML files.
//! 4. **Result tables:** I/O and serialization failures while writing reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the ALU model and its verification bench.
#[derive(Debug, Error)]
pub enum AluError {
    /// An operand value does not fit in four bits.
    ///
    /// Out-of-range operands are rejected rather than masked.
    #[error("operand value {0} is outside the 4-bit range 0..=15")]
    OperandOutOfRange(u8),

    /// A selector value does not fit in four bits.
    ///
    /// Holds the value as written, which may not fit in a `u8` either.
    #[error("selector value {0} is outside the 4-bit range 0..=15")]
    SelectorOutOfRange(String),

    /// An operation name did not match any mnemonic.
    #[error("unknown ALU operation '{0}'")]
    UnknownOperation(String),

    /// A configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Writing a result table failed.
    #[error("failed to write results: {0}")]
    Io(#[from] io::Error),

    /// Serializing a JSON report failed.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AluError>;
