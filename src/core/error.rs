//! Fleet error types
//!
//! Every engine operation surfaces one of these to the caller. None of them
//! are retried internally; they all describe invalid caller-supplied state.

use thiserror::Error;

use super::models::{MissionStatus, RocketStatus};

/// Kind of entity an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// A rocket
    Rocket,
    /// A mission
    Mission,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rocket => write!(f, "Rocket"),
            Self::Mission => write!(f, "Mission"),
        }
    }
}

/// Errors raised by the entity store and the assignment engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    /// An entity with this name is already registered
    #[error("{kind} already exists: {name}")]
    DuplicateEntity {
        /// Entity kind
        kind: EntityKind,
        /// Conflicting name
        name: String,
    },

    /// No entity with this name is registered
    #[error("{kind} is not found: {name}")]
    NotFound {
        /// Entity kind
        kind: EntityKind,
        /// Missing name
        name: String,
    },

    /// The rocket is not on the ground
    #[error("Rocket is not available for assignment: {name} is {}", .status.label())]
    RocketUnavailable {
        /// Rocket name
        name: String,
        /// Its current status
        status: RocketStatus,
    },

    /// The mission has ended
    #[error("Mission is not available for assignment: {name} has ended")]
    MissionUnavailable {
        /// Mission name
        name: String,
    },

    /// An explicit mission status change violates its rocket-set precondition
    #[error("Mission {mission} cannot be set to {}: {reason}", .target.label())]
    InvalidTransition {
        /// Mission name
        mission: String,
        /// Requested status
        target: MissionStatus,
        /// Which precondition failed
        reason: &'static str,
    },
}

impl FleetError {
    /// Shorthand for a missing rocket
    #[must_use]
    pub fn rocket_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Rocket,
            name: name.to_string(),
        }
    }

    /// Shorthand for a missing mission
    #[must_use]
    pub fn mission_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: EntityKind::Mission,
            name: name.to_string(),
        }
    }

    /// Stable machine-readable code for JSON output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEntity { .. } => "DUPLICATE_ENTITY",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::RocketUnavailable { .. } => "ROCKET_UNAVAILABLE",
            Self::MissionUnavailable { .. } => "MISSION_UNAVAILABLE",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}
