//! Validate a scenario without running it

use std::path::Path;

use missionctl::adapters::toml::load_scenario;
use missionctl::core::services::runner;
use missionctl::output::{OutputMode, ValidateResult};

/// Check that a scenario only refers to rockets and missions it declares
pub fn validate(scenario_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let scenario = load_scenario(scenario_path)?;
    let problems = runner::validate(&scenario);

    let result = ValidateResult {
        scenario: scenario_path.display().to_string(),
        valid: problems.is_empty(),
        steps: scenario.steps.len(),
        problems,
    };
    result.render(mode);

    if !result.valid {
        anyhow::bail!("scenario has {} problem(s)", result.problems.len());
    }
    Ok(())
}
