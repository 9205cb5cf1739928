//! Tests for configuration management

use std::fs;

use missionctl::config::{Config, OutputConfig, RunConfig};
use tempfile::TempDir;

// =============================================================================
// BASIC CONFIG TESTS
// =============================================================================

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.output.json);
    assert!(!config.run.keep_going);
}

#[test]
fn test_config_path_is_under_missionctl_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("missionctl/config.toml"));
}

// =============================================================================
// LOAD / SAVE TESTS
// =============================================================================

#[test]
fn test_config_load_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[output]\njson = true\n\n[run]\nkeep_going = true\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert!(config.output.json);
    assert!(config.run.keep_going);
}

#[test]
fn test_config_missing_sections_use_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[run]\nkeep_going = true\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(!config.output.json);
    assert!(config.run.keep_going);
}

#[test]
fn test_config_empty_file_is_default() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_config_missing_explicit_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config"));
}

#[test]
fn test_config_invalid_toml_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[output]\njson = \"maybe\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn test_config_save_and_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    let config = Config {
        output: OutputConfig { json: true },
        run: RunConfig { keep_going: false },
    };
    config.save(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}
