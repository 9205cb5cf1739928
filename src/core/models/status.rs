//! Rocket and mission status enums
//!
//! `Display` yields the snake_case identifier used in scenario files and JSON.
//! [`RocketStatus::label`] and [`MissionStatus::label`] yield the text used in
//! the human-readable summary.

use serde::{Deserialize, Serialize};

/// Operational status of a rocket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RocketStatus {
    /// Parked and available for assignment
    #[default]
    OnGround,
    /// Flying as part of a mission
    InSpace,
    /// Under repair; holds its mission in `Pending`
    InRepair,
}

impl RocketStatus {
    /// Human-readable label used in summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnGround => "On ground",
            Self::InSpace => "In space",
            Self::InRepair => "In repair",
        }
    }
}

impl std::fmt::Display for RocketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OnGround => write!(f, "on_ground"),
            Self::InSpace => write!(f, "in_space"),
            Self::InRepair => write!(f, "in_repair"),
        }
    }
}

impl std::str::FromStr for RocketStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "on_ground" | "onground" | "ground" => Ok(Self::OnGround),
            "in_space" | "inspace" | "space" => Ok(Self::InSpace),
            "in_repair" | "inrepair" | "repair" => Ok(Self::InRepair),
            _ => Err(format!("Invalid rocket status: {s}. Use: on_ground, in_space, in_repair")),
        }
    }
}

/// Status of a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionStatus {
    /// No rockets attached yet
    #[default]
    Scheduled,
    /// At least one attached rocket is in repair
    Pending,
    /// Rockets attached, none in repair
    InProgress,
    /// Closed; only reachable through an explicit status change
    Ended,
}

impl MissionStatus {
    /// Human-readable label used in summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Ended => "Ended",
        }
    }
}

impl std::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheduled => write!(f, "scheduled"),
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Ended => write!(f, "ended"),
        }
    }
}

impl std::str::FromStr for MissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "pending" => Ok(Self::Pending),
            "in_progress" | "inprogress" | "started" => Ok(Self::InProgress),
            "ended" | "end" | "done" => Ok(Self::Ended),
            _ => Err(format!(
                "Invalid mission status: {s}. Use: scheduled, pending, in_progress, ended"
            )),
        }
    }
}
