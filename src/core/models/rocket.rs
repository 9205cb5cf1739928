//! Rocket model
//!
//! A rocket is identified by its name and carries an operational status.
//! While attached to a mission it also remembers that mission's name.

use serde::Serialize;

use super::RocketStatus;

/// A rocket tracked by the fleet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rocket {
    name: String,
    status: RocketStatus,
    /// Mission this rocket is attached to; mirrors that mission's rocket set
    #[serde(skip_serializing_if = "Option::is_none")]
    mission: Option<String>,
}

impl Rocket {
    /// Create a rocket on the ground
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_status(name, RocketStatus::OnGround)
    }

    /// Create an unattached rocket with a given starting status
    #[must_use]
    pub fn with_status(name: impl Into<String>, status: RocketStatus) -> Self {
        Self {
            name: name.into(),
            status,
            mission: None,
        }
    }

    /// Rocket name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> RocketStatus {
        self.status
    }

    /// Name of the mission this rocket is attached to, if any
    #[must_use]
    pub fn mission(&self) -> Option<&str> {
        self.mission.as_deref()
    }

    /// Whether the rocket can be assigned to a mission
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == RocketStatus::OnGround
    }

    pub(crate) fn set_status(&mut self, status: RocketStatus) {
        self.status = status;
    }

    pub(crate) fn attach_to(&mut self, mission: &str) {
        self.mission = Some(mission.to_string());
    }

    /// Clear the back-reference, returning the mission it pointed to
    pub(crate) fn detach(&mut self) -> Option<String> {
        self.mission.take()
    }
}
