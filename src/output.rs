//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::services::{MissionReport, RunReport, format_missions};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Ordered mission summary
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    /// Missions in summary order
    pub missions: Vec<MissionReport>,
}

/// Result of running a scenario
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Scenario file that was run
    pub scenario: String,
    /// Whether every step succeeded
    pub passed: bool,
    /// Per-step outcomes
    #[serde(flatten)]
    pub report: RunReport,
    /// Mission summary after the run
    pub missions: Vec<MissionReport>,
}

/// Result of validating a scenario
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Scenario file that was checked
    pub scenario: String,
    /// Whether no problems were found
    pub valid: bool,
    /// Number of steps declared
    pub steps: usize,
    /// Problems found
    pub problems: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl SummaryResult {
    /// Human-readable text
    #[must_use]
    pub fn human(&self) -> String {
        if self.missions.is_empty() {
            return "No missions.".to_string();
        }
        format_missions(&self.missions)
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl RunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Running {} ({} step(s))...\n", self.scenario, self.report.steps.len() + self.report.skipped);

        for outcome in &self.report.steps {
            match &outcome.error {
                None => println!("  [ok]   {}. {}", outcome.index, outcome.step),
                Some(err) => {
                    println!("  [FAIL] {}. {}", outcome.index, outcome.step);
                    println!("         {err}");
                },
            }
        }
        if self.report.skipped > 0 {
            println!("  ({} step(s) skipped)", self.report.skipped);
        }

        println!("\nMissions:");
        let summary = SummaryResult {
            missions: self.missions.clone(),
        };
        println!("{}", summary.human());

        if !self.passed {
            println!("\nFAILED: {} step(s) failed", self.report.failures());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.valid {
                    println!("{}: OK ({} step(s))", self.scenario, self.steps);
                } else {
                    println!("{}: {} problem(s)", self.scenario, self.problems.len());
                    for problem in &self.problems {
                        println!("  - {problem}");
                    }
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
