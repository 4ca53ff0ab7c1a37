//! Configuration loading tests.

use std::fs;
use std::path::PathBuf;

use alu4::common::AluError;
use alu4::config::*;
use alu4::core::ResetPolarity;
use alu4::sim::{DutMode, VectorSet};

/// Tests defaults for an empty document.
#[test]
fn test_config_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert!(!config.general.trace_vectors);
    assert_eq!(config.clock.period_ns, 10);
    assert_eq!(config.clock.reset_polarity, ResetPolarity::ActiveLow);
    assert_eq!(config.clock.reset_cycles, 1);
    assert_eq!(config.bench.mode, DutMode::Registered);
    assert_eq!(config.bench.vectors, VectorSet::Exhaustive);
    assert!(config.bench.enable);
    assert!(config.output.csv.is_none());
    assert!(config.output.json.is_none());
}

/// Tests `Config::default` agrees with an empty document.
#[test]
fn test_config_default_impl() {
    let config = Config::default();
    assert_eq!(config.clock.period_ns, 10);
    assert_eq!(config.clock.reset_cycles, 1);
    assert!(config.bench.enable);
}

/// Tests partially specified sections fall back per field.
#[test]
fn test_config_partial_sections() {
    let config = Config::from_toml_str(
        r#"
        [clock]
        period_ns = 20

        [output]
        csv = "out.csv"
        "#,
    )
    .unwrap();
    assert_eq!(config.clock.period_ns, 20);
    assert_eq!(config.clock.reset_cycles, 1);
    assert_eq!(config.output.csv, Some(PathBuf::from("out.csv")));
}

/// Tests unknown enum values are rejected.
#[test]
fn test_config_rejects_bad_polarity() {
    let err = Config::from_toml_str("[clock]\nreset_polarity = \"sideways\"\n").unwrap_err();
    assert!(matches!(err, AluError::ConfigParse(_)));
}

/// Tests a missing file reports its path.
#[test]
fn test_config_missing_file() {
    let err = Config::load("/nonexistent/alu4.toml").unwrap_err();
    match err {
        AluError::ConfigRead { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/alu4.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

/// Tests the bundled default configuration parses.
#[test]
fn test_config_bundled_default() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/default.toml");
    let config = Config::load(path).unwrap();
    assert_eq!(config.bench.mode, DutMode::Registered);
    assert_eq!(config.output.csv, Some(PathBuf::from("alu_results.csv")));
}

/// Tests loading from a file on disk.
#[test]
fn test_config_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.toml");
    fs::write(&path, "[bench]\nmode = \"combinational\"\nvectors = \"directed\"\n").unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.bench.mode, DutMode::Combinational);
    assert_eq!(config.bench.vectors, VectorSet::Directed);
}
