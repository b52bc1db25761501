//! Integration tests for Settings layered loading.
//!
//! These tests use temp files only; they assume no global config and no
//! `GENEALOGY_*` variables in the test environment.

use std::fs;

use tempfile::TempDir;

use vampire_genealogy::config::{Settings, DEFAULT_MILLENNIAL_THRESHOLD};
use vampire_genealogy::GenealogyError;

#[test]
fn given_local_config_when_load_then_overrides_threshold() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("genealogy.toml");
    fs::write(&path, "millennial_threshold = 1999\n").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.millennial_threshold, 1999);
}

#[test]
fn given_empty_local_config_when_load_then_keeps_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("genealogy.toml");
    fs::write(&path, "").unwrap();

    let settings = Settings::load(Some(&path)).expect("load settings");

    assert_eq!(settings.millennial_threshold, DEFAULT_MILLENNIAL_THRESHOLD);
}

#[test]
fn given_missing_local_config_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(GenealogyError::Config(_))));
}

#[test]
fn given_malformed_threshold_when_load_then_returns_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("genealogy.toml");
    fs::write(&path, "millennial_threshold = \"soon\"\n").unwrap();

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(GenealogyError::Config(_))));
}
