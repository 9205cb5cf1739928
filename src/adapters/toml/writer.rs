//! TOML writer for scenario files
//!
//! Handles creating scenario files, including the example written by `init`.

use std::fs;
use std::path::Path;

use crate::core::models::{MissionStatus, RocketStatus, Scenario, Step};

/// The scenario written by `missionctl init`
#[must_use]
pub fn example_scenario() -> Scenario {
    let names = |xs: &[&str]| xs.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();

    Scenario {
        rockets: names(&["Dragon 1", "Dragon 2", "Dragon 3"]),
        missions: names(&["Mars", "Luna", "Transit"]),
        steps: vec![
            Step::AssignMany {
                rockets: names(&["Dragon 1", "Dragon 2"]),
                mission: "Mars".to_string(),
            },
            Step::Assign {
                rocket: "Dragon 3".to_string(),
                mission: "Luna".to_string(),
            },
            Step::RocketStatus {
                rocket: "Dragon 2".to_string(),
                status: RocketStatus::InRepair,
            },
            Step::MissionStatus {
                mission: "Transit".to_string(),
                status: MissionStatus::Ended,
            },
        ],
    }
}

/// Format a `Scenario` as TOML
///
/// # Errors
///
/// Returns an error if the scenario cannot be serialized.
pub fn format_scenario(scenario: &Scenario) -> Result<String, toml::ser::Error> {
    let body = toml::to_string_pretty(scenario)?;
    Ok(format!("# missionctl scenario\n\n{body}"))
}

/// Write a scenario file, refusing to overwrite unless `force` is set
///
/// Returns `false` if the file already existed and was left alone.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_scenario(path: &Path, scenario: &Scenario, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format_scenario(scenario)?)?;
    Ok(true)
}
