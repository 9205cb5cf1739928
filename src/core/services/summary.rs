//! Mission summary reporting
//!
//! Builds an ordered projection of all missions and renders it as text.
//! Missions are ordered by rocket count (most first), ties broken by name in
//! reverse lexicographic order. Rockets keep their attachment order.

use std::cmp::Ordering;
use std::fmt::Write;

use serde::Serialize;

use crate::core::models::{Mission, MissionStatus, Rocket, RocketStatus};
use crate::core::ports::EntityStore;

/// One mission line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionReport {
    /// Mission name
    pub name: String,
    /// Mission status
    pub status: MissionStatus,
    /// Attached rockets in attachment order
    pub rockets: Vec<RocketReport>,
}

/// One rocket line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RocketReport {
    /// Rocket name
    pub name: String,
    /// Rocket status
    pub status: RocketStatus,
}

impl MissionReport {
    /// Project a mission, resolving its rockets through the store
    ///
    /// Rockets the store does not know are skipped.
    #[must_use]
    pub fn from_store<S: EntityStore + ?Sized>(mission: &Mission, store: &S) -> Self {
        Self {
            name: mission.name().to_string(),
            status: mission.status(),
            rockets: mission
                .rockets()
                .iter()
                .filter_map(|name| store.find_rocket(name))
                .map(RocketReport::from)
                .collect(),
        }
    }

    /// Number of attached rockets
    #[must_use]
    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }
}

impl From<&Rocket> for RocketReport {
    fn from(rocket: &Rocket) -> Self {
        Self {
            name: rocket.name().to_string(),
            status: rocket.status(),
        }
    }
}

/// Summary ordering: rocket count descending, then name descending
#[must_use]
pub fn summary_order(a_count: usize, a_name: &str, b_count: usize, b_name: &str) -> Ordering {
    b_count.cmp(&a_count).then_with(|| b_name.cmp(a_name))
}

/// Sort mission reports into summary order
pub fn sort_reports(reports: &mut [MissionReport]) {
    reports.sort_by(|a, b| summary_order(a.rocket_count(), &a.name, b.rocket_count(), &b.name));
}

/// Build the ordered summary of every mission in the store
#[must_use]
pub fn mission_summary<S: EntityStore + ?Sized>(store: &S) -> Vec<MissionReport> {
    let mut reports: Vec<MissionReport> = store
        .all_missions()
        .into_iter()
        .map(|mission| MissionReport::from_store(mission, store))
        .collect();
    sort_reports(&mut reports);
    reports
}

/// Render reports as text, one block per mission, without a trailing newline
#[must_use]
pub fn format_missions(reports: &[MissionReport]) -> String {
    reports.iter().map(format_mission).collect::<Vec<_>>().join("\n")
}

fn format_mission(report: &MissionReport) -> String {
    let mut out = format!(
        "• {} – {} – Dragons: {}",
        report.name,
        report.status.label(),
        report.rocket_count()
    );
    for rocket in &report.rockets {
        let _ = write!(out, "\n   • {} – {}", rocket.name, rocket.status.label());
    }
    out
}
