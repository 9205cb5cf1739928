//! TOML parser for scenario files
//!
//! Handles reading and deserializing scenario files.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Scenario;

/// Errors that can occur while loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// Scenario file could not be read
    #[error("cannot read scenario {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Scenario file is not valid TOML or has the wrong shape
    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a scenario from TOML text
pub fn parse_scenario(content: &str) -> Result<Scenario, ScenarioError> {
    Ok(toml::from_str(content)?)
}

/// Load a scenario from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(&content)
}
