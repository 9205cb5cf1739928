//! Run a scenario through the assignment engine

use std::path::Path;

use missionctl::adapters::InMemoryStore;
use missionctl::adapters::toml::load_scenario;
use missionctl::core::services::AssignmentEngine;
use missionctl::core::services::runner::{register_entities, run_steps};
use missionctl::output::{OutputMode, RunResult};

/// Register the scenario's entities, apply its steps and print the summary
pub fn run(scenario_path: &Path, keep_going: bool, mode: OutputMode) -> anyhow::Result<()> {
    let scenario = load_scenario(scenario_path)?;

    let mut engine = AssignmentEngine::new(InMemoryStore::new());
    register_entities(&mut engine, &scenario)?;

    let report = run_steps(&mut engine, &scenario, keep_going);
    let failures = report.failures();

    let result = RunResult {
        scenario: scenario_path.display().to_string(),
        passed: report.passed(),
        report,
        missions: engine.mission_summary(),
    };
    result.render(mode);

    if failures > 0 {
        anyhow::bail!("{failures} step(s) failed");
    }
    Ok(())
}
