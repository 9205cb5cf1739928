//! Scenario model
//!
//! A scenario declares rockets and missions up front, then lists the
//! operations to run against them in order.

use serde::{Deserialize, Serialize};

use super::{MissionStatus, RocketStatus};

/// A declarative fleet scenario
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Rocket names to register (all start on the ground)
    #[serde(default)]
    pub rockets: Vec<String>,

    /// Mission names to register (all start scheduled)
    #[serde(default)]
    pub missions: Vec<String>,

    /// Operations to run, in order
    #[serde(default, rename = "step", skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// A single operation against the assignment engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Assign one rocket to a mission
    Assign {
        /// Rocket name
        rocket: String,
        /// Mission name
        mission: String,
    },
    /// Assign several rockets to a mission, stopping at the first failure
    AssignMany {
        /// Rocket names in assignment order
        rockets: Vec<String>,
        /// Mission name
        mission: String,
    },
    /// Change a rocket's status
    RocketStatus {
        /// Rocket name
        rocket: String,
        /// New status
        status: RocketStatus,
    },
    /// Explicitly change a mission's status
    MissionStatus {
        /// Mission name
        mission: String,
        /// Target status
        status: MissionStatus,
    },
}

impl Step {
    /// Short description used in run reports and logs
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Assign { rocket, mission } => format!("assign {rocket} -> {mission}"),
            Self::AssignMany { rockets, mission } => {
                format!("assign [{}] -> {mission}", rockets.join(", "))
            },
            Self::RocketStatus { rocket, status } => format!("rocket {rocket} -> {status}"),
            Self::MissionStatus { mission, status } => format!("mission {mission} -> {status}"),
        }
    }

    /// Rocket names this step refers to
    #[must_use]
    pub fn rocket_refs(&self) -> Vec<&str> {
        match self {
            Self::Assign { rocket, .. } | Self::RocketStatus { rocket, .. } => vec![rocket.as_str()],
            Self::AssignMany { rockets, .. } => rockets.iter().map(String::as_str).collect(),
            Self::MissionStatus { .. } => Vec::new(),
        }
    }

    /// Mission name this step refers to, if any
    #[must_use]
    pub fn mission_ref(&self) -> Option<&str> {
        match self {
            Self::Assign { mission, .. }
            | Self::AssignMany { mission, .. }
            | Self::MissionStatus { mission, .. } => Some(mission.as_str()),
            Self::RocketStatus { .. } => None,
        }
    }
}
