//! Mission status rules
//!
//! Pure functions over the statuses of a mission's attached rockets: the
//! automatic recompute and the preconditions for explicit status changes.

use crate::core::error::FleetError;
use crate::core::models::{MissionStatus, RocketStatus};

/// Derive a mission's status from its attached rockets
///
/// Never yields [`MissionStatus::Ended`]; that status is only reachable
/// through an explicit change.
#[must_use]
pub fn derive_mission_status(rockets: &[RocketStatus]) -> MissionStatus {
    if rockets.is_empty() {
        MissionStatus::Scheduled
    } else if rockets.contains(&RocketStatus::InRepair) {
        MissionStatus::Pending
    } else {
        MissionStatus::InProgress
    }
}

/// Validate an explicit status change for `mission`
///
/// # Errors
///
/// Returns [`FleetError::InvalidTransition`] when the attached rockets do not
/// satisfy the precondition of `target`.
pub fn check_transition(
    mission: &str,
    target: MissionStatus,
    rockets: &[RocketStatus],
) -> Result<(), FleetError> {
    let any_in_repair = rockets.contains(&RocketStatus::InRepair);

    let violation = match target {
        MissionStatus::Ended if !rockets.is_empty() => Some("rockets are still assigned"),
        MissionStatus::Scheduled if !rockets.is_empty() => Some("rockets are still assigned"),
        MissionStatus::Pending if rockets.is_empty() => Some("no rockets are assigned"),
        MissionStatus::Pending if !any_in_repair => Some("no assigned rocket is in repair"),
        MissionStatus::InProgress if rockets.is_empty() => Some("no rockets are assigned"),
        MissionStatus::InProgress if any_in_repair => Some("an assigned rocket is in repair"),
        MissionStatus::Ended
        | MissionStatus::Scheduled
        | MissionStatus::Pending
        | MissionStatus::InProgress => None,
    };

    match violation {
        Some(reason) => Err(FleetError::InvalidTransition {
            mission: mission.to_string(),
            target,
            reason,
        }),
        None => Ok(()),
    }
}
