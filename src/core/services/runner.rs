//! Scenario runner
//!
//! Registers a scenario's rockets and missions with an engine, then applies
//! its steps in order and records the outcome of each one.

use std::collections::HashSet;

use log::{info, warn};
use serde::Serialize;

use super::assignment::AssignmentEngine;
use crate::core::error::FleetError;
use crate::core::models::{Mission, Rocket, Scenario, Step};
use crate::core::ports::EntityStore;

/// Outcome of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    /// 1-based step number
    pub index: usize,
    /// Human-readable step description
    pub step: String,
    /// Error code if the step failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message if the step failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StepOutcome {
    /// Whether the step succeeded
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of running a scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Outcomes of the steps that were attempted
    pub steps: Vec<StepOutcome>,
    /// Steps never attempted because an earlier one failed
    pub skipped: usize,
}

impl RunReport {
    /// Number of failed steps
    #[must_use]
    pub fn failures(&self) -> usize {
        self.steps.iter().filter(|s| !s.succeeded()).count()
    }

    /// Whether every step was attempted and succeeded
    #[must_use]
    pub fn passed(&self) -> bool {
        self.skipped == 0 && self.failures() == 0
    }
}

/// Register every rocket and mission declared by `scenario`
pub fn register_entities<S: EntityStore>(
    engine: &mut AssignmentEngine<S>,
    scenario: &Scenario,
) -> Result<(), FleetError> {
    for name in &scenario.rockets {
        engine.add_rocket(Rocket::new(name.as_str()))?;
    }
    for name in &scenario.missions {
        engine.add_mission(Mission::new(name.as_str()))?;
    }
    Ok(())
}

/// Apply one step to the engine
pub fn apply_step<S: EntityStore>(
    engine: &mut AssignmentEngine<S>,
    step: &Step,
) -> Result<(), FleetError> {
    match step {
        Step::Assign { rocket, mission } => engine.assign_rocket(rocket, mission),
        Step::AssignMany { rockets, mission } => engine.assign_rockets(rockets, mission),
        Step::RocketStatus { rocket, status } => engine.change_rocket_status(rocket, *status),
        Step::MissionStatus { mission, status } => engine.change_mission_status(mission, *status),
    }
}

/// Apply the scenario's steps in order
///
/// Without `keep_going` the run stops at the first failed step and the rest
/// are counted as skipped.
pub fn run_steps<S: EntityStore>(
    engine: &mut AssignmentEngine<S>,
    scenario: &Scenario,
    keep_going: bool,
) -> RunReport {
    let mut report = RunReport::default();

    for (i, step) in scenario.steps.iter().enumerate() {
        let description = step.describe();
        let outcome = match apply_step(engine, step) {
            Ok(()) => StepOutcome {
                index: i + 1,
                step: description,
                code: None,
                error: None,
            },
            Err(err) => {
                warn!("Step {} ({description}) failed: {err}", i + 1);
                StepOutcome {
                    index: i + 1,
                    step: description,
                    code: Some(err.code().to_string()),
                    error: Some(err.to_string()),
                }
            },
        };

        let failed = !outcome.succeeded();
        report.steps.push(outcome);
        if failed && !keep_going {
            report.skipped = scenario.steps.len() - (i + 1);
            break;
        }
    }

    info!(
        "Ran {} step(s): {} failed, {} skipped",
        report.steps.len(),
        report.failures(),
        report.skipped
    );
    report
}

/// Structural problems found in a scenario without running it
#[must_use]
pub fn validate(scenario: &Scenario) -> Vec<String> {
    let mut problems = Vec::new();

    let rockets = unique_names(&scenario.rockets, "rocket", &mut problems);
    let missions = unique_names(&scenario.missions, "mission", &mut problems);

    for (i, step) in scenario.steps.iter().enumerate() {
        for rocket in step.rocket_refs() {
            if !rockets.contains(rocket) {
                problems.push(format!("step {}: unknown rocket '{rocket}'", i + 1));
            }
        }
        if let Some(mission) = step.mission_ref().filter(|m| !missions.contains(m)) {
            problems.push(format!("step {}: unknown mission '{mission}'", i + 1));
        }
    }

    problems
}

fn unique_names<'a>(names: &'a [String], kind: &str, problems: &mut Vec<String>) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            problems.push(format!("duplicate {kind} '{name}'"));
        }
    }
    seen
}
