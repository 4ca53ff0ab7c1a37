use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::common::{AluError, Result};
use crate::core::ResetPolarity;
use crate::sim::testbench::DutMode;
use crate::sim::vectors::VectorSet;

const CLOCK_PERIOD_NS: u64 = 10;
const RESET_CYCLES: u32 = 1;

/// Testbench configuration loaded from TOML.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub bench: BenchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AluError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every applied vector at info level.
    #[serde(default)]
    pub trace_vectors: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_period_ns")]
    pub period_ns: u64,

    #[serde(default)]
    pub reset_polarity: ResetPolarity,

    /// Rising edges spent with reset asserted before the run starts.
    #[serde(default = "default_reset_cycles")]
    pub reset_cycles: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            period_ns: CLOCK_PERIOD_NS,
            reset_polarity: ResetPolarity::default(),
            reset_cycles: RESET_CYCLES,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub mode: DutMode,

    #[serde(default)]
    pub vectors: VectorSet,

    /// Level driven on the enable input.
    #[serde(default = "default_enable")]
    pub enable: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            mode: DutMode::default(),
            vectors: VectorSet::default(),
            enable: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Path of the CSV result table, if one should be written.
    pub csv: Option<PathBuf>,

    /// Path of the JSON report, if one should be written.
    pub json: Option<PathBuf>,
}

fn default_period_ns() -> u64 {
    CLOCK_PERIOD_NS
}

fn default_reset_cycles() -> u32 {
    RESET_CYCLES
}

fn default_enable() -> bool {
    true
}
