//! Mission model
//!
//! A mission owns the set of rocket names currently attached to it. The set
//! keeps attachment order, which is the order rockets appear in summaries.

use serde::Serialize;

use super::MissionStatus;

/// A mission and its attached rockets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    name: String,
    status: MissionStatus,
    /// Attached rocket names in attachment order, no duplicates
    rockets: Vec<String>,
}

impl Mission {
    /// Create a scheduled mission with no rockets
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: MissionStatus::Scheduled,
            rockets: Vec::new(),
        }
    }

    /// Mission name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> MissionStatus {
        self.status
    }

    /// Attached rocket names in attachment order
    #[must_use]
    pub fn rockets(&self) -> &[String] {
        &self.rockets
    }

    /// Number of attached rockets
    #[must_use]
    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    /// Whether a rocket with this name is attached
    #[must_use]
    pub fn has_rocket(&self, rocket: &str) -> bool {
        self.rockets.iter().any(|r| r == rocket)
    }

    /// Whether the mission accepts new rockets
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status != MissionStatus::Ended
    }

    pub(crate) fn set_status(&mut self, status: MissionStatus) {
        self.status = status;
    }

    /// Attach a rocket; returns false if it was already attached
    pub(crate) fn add_rocket(&mut self, rocket: &str) -> bool {
        if self.has_rocket(rocket) {
            return false;
        }
        self.rockets.push(rocket.to_string());
        true
    }

    /// Detach a rocket; returns false if it was not attached
    pub(crate) fn remove_rocket(&mut self, rocket: &str) -> bool {
        let before = self.rockets.len();
        self.rockets.retain(|r| r != rocket);
        self.rockets.len() < before
    }
}
