//! Tests for scenario files and the scenario runner

use std::fs;

use missionctl::adapters::toml::{
    ScenarioError, example_scenario, format_scenario, load_scenario, parse_scenario, write_scenario,
};
use missionctl::core::models::{MissionStatus, RocketStatus, Scenario, Step};
use proptest::prelude::*;
use missionctl::core::services::runner::{register_entities, run_steps, validate};
use tempfile::TempDir;

use crate::common::engine;

// =============================================================================
// PARSING
// =============================================================================

#[test]
fn test_parse_every_step_kind() {
    let scenario = parse_scenario(
        r#"
rockets = ["Dragon 1", "Dragon 2"]
missions = ["Mars"]

[[step]]
op = "assign"
rocket = "Dragon 1"
mission = "Mars"

[[step]]
op = "assign_many"
rockets = ["Dragon 2"]
mission = "Mars"

[[step]]
op = "rocket_status"
rocket = "Dragon 1"
status = "in_repair"

[[step]]
op = "mission_status"
mission = "Mars"
status = "pending"
"#,
    )
    .unwrap();

    assert_eq!(scenario.steps.len(), 4);
    assert!(matches!(&scenario.steps[1], Step::AssignMany { rockets, .. } if rockets.len() == 1));
    assert!(matches!(
        scenario.steps[2],
        Step::RocketStatus {
            status: RocketStatus::InRepair,
            ..
        }
    ));
    assert!(matches!(
        scenario.steps[3],
        Step::MissionStatus {
            status: MissionStatus::Pending,
            ..
        }
    ));
}

#[test]
fn test_parse_empty_scenario() {
    let scenario = parse_scenario("").unwrap();
    assert!(scenario.rockets.is_empty());
    assert!(scenario.missions.is_empty());
    assert!(scenario.steps.is_empty());
}

#[test]
fn test_parse_unknown_op_fails() {
    let err = parse_scenario("[[step]]\nop = \"launch\"\nrocket = \"Dragon 1\"\n").unwrap_err();
    assert!(matches!(err, ScenarioError::Parse(_)));
}

#[test]
fn test_load_missing_file_fails() {
    let temp = TempDir::new().unwrap();
    let err = load_scenario(&temp.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, ScenarioError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

// =============================================================================
// WRITING
// =============================================================================

#[test]
fn test_write_and_load_example() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missions.toml");

    assert!(write_scenario(&path, &example_scenario(), false).unwrap());
    assert_eq!(load_scenario(&path).unwrap(), example_scenario());
}

#[test]
fn test_write_does_not_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missions.toml");
    fs::write(&path, "# mine\n").unwrap();

    assert!(!write_scenario(&path, &example_scenario(), false).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

    assert!(write_scenario(&path, &example_scenario(), true).unwrap());
    assert_ne!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

proptest! {
    /// Any names survive formatting and parsing unchanged
    #[test]
    fn formatted_scenario_parses_back(
        rockets in prop::collection::vec(any::<String>(), 0..4),
        mission in any::<String>(),
        status in prop_oneof![Just(RocketStatus::InSpace), Just(RocketStatus::InRepair)]
    ) {
        let mut steps = vec![Step::AssignMany {
            rockets: rockets.clone(),
            mission: mission.clone(),
        }];
        if let Some(rocket) = rockets.first() {
            steps.push(Step::RocketStatus {
                rocket: rocket.clone(),
                status,
            });
        }
        let scenario = Scenario {
            rockets,
            missions: vec![mission],
            steps,
        };

        let text = format_scenario(&scenario).unwrap();
        prop_assert_eq!(parse_scenario(&text).unwrap(), scenario);
    }
}

#[test]
fn test_format_escapes_awkward_names() {
    let scenario = Scenario {
        rockets: vec!["Dragon\u{7f}".to_string(), "Bell\u{7}".to_string()],
        missions: vec!["Zero\u{200b}Width".to_string()],
        steps: vec![Step::Assign {
            rocket: "Bell\u{7}".to_string(),
            mission: "Zero\u{200b}Width".to_string(),
        }],
    };

    let text = format_scenario(&scenario).unwrap();
    assert_eq!(parse_scenario(&text).unwrap(), scenario);
}

// =============================================================================
// RUNNING
// =============================================================================

#[test]
fn test_run_example_scenario() {
    let scenario = example_scenario();
    let mut engine = engine();
    register_entities(&mut engine, &scenario).unwrap();

    let report = run_steps(&mut engine, &scenario, false);
    assert!(report.passed());

    let summary: Vec<(String, MissionStatus, usize)> = engine
        .mission_summary()
        .into_iter()
        .map(|m| {
            let count = m.rocket_count();
            (m.name, m.status, count)
        })
        .collect();
    assert_eq!(
        summary,
        [
            ("Mars".to_string(), MissionStatus::Pending, 2),
            ("Luna".to_string(), MissionStatus::InProgress, 1),
            ("Transit".to_string(), MissionStatus::Ended, 0),
        ]
    );
}

#[test]
fn test_run_keep_going_attempts_every_step() {
    let scenario = parse_scenario(
        r#"
rockets = ["Dragon 1"]
missions = ["Mars"]

[[step]]
op = "mission_status"
mission = "Mars"
status = "in_progress"

[[step]]
op = "assign"
rocket = "Dragon 1"
mission = "Mars"
"#,
    )
    .unwrap();

    let mut engine = engine();
    register_entities(&mut engine, &scenario).unwrap();
    let report = run_steps(&mut engine, &scenario, true);

    assert_eq!(report.steps.len(), 2);
    assert_eq!(report.failures(), 1);
    assert_eq!(report.skipped, 0);
    assert!(!report.passed());
    assert_eq!(report.steps[0].code.as_deref(), Some("INVALID_TRANSITION"));
    assert_eq!(engine.mission("Mars").unwrap().status(), MissionStatus::InProgress);
}

#[test]
fn test_register_duplicate_rocket_fails() {
    let scenario = parse_scenario("rockets = [\"Dragon 1\", \"Dragon 1\"]\n").unwrap();
    let mut engine = engine();
    assert!(register_entities(&mut engine, &scenario).is_err());
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_validate_example_is_clean() {
    assert!(validate(&example_scenario()).is_empty());
}

#[test]
fn test_validate_reports_unknown_references() {
    let scenario = parse_scenario(
        r#"
rockets = ["Dragon 1"]
missions = ["Mars"]

[[step]]
op = "assign_many"
rockets = ["Dragon 1", "Ghost"]
mission = "Pluto"
"#,
    )
    .unwrap();

    let problems = validate(&scenario);
    assert_eq!(
        problems,
        ["step 1: unknown rocket 'Ghost'", "step 1: unknown mission 'Pluto'"]
    );
}

#[test]
fn test_validate_reports_duplicates() {
    let scenario = parse_scenario("rockets = [\"A\", \"A\"]\nmissions = [\"M\", \"M\"]\n").unwrap();
    assert_eq!(validate(&scenario), ["duplicate rocket 'A'", "duplicate mission 'M'"]);
}
