//! Entity store port
//!
//! Defines the interface for holding rockets and missions by name.

use crate::core::error::FleetError;
use crate::core::models::{Mission, Rocket};

/// Keyed storage for rockets and missions
///
/// The store exclusively owns every entity. The assignment engine reads and
/// mutates entities in place through the `_mut` accessors and never keeps
/// copies of its own.
pub trait EntityStore: Send + Sync {
    /// Register a rocket
    ///
    /// Fails with [`FleetError::DuplicateEntity`] if the name is taken.
    fn register_rocket(&mut self, rocket: Rocket) -> Result<(), FleetError>;

    /// Register a mission
    ///
    /// Fails with [`FleetError::DuplicateEntity`] if the name is taken.
    fn register_mission(&mut self, mission: Mission) -> Result<(), FleetError>;

    /// Look up a rocket by name
    fn find_rocket(&self, name: &str) -> Option<&Rocket>;

    /// Look up a rocket by name for mutation
    fn find_rocket_mut(&mut self, name: &str) -> Option<&mut Rocket>;

    /// Look up a mission by name
    fn find_mission(&self, name: &str) -> Option<&Mission>;

    /// Look up a mission by name for mutation
    fn find_mission_mut(&mut self, name: &str) -> Option<&mut Mission>;

    /// All missions, in no meaningful order
    fn all_missions(&self) -> Vec<&Mission>;

    /// All rockets, in no meaningful order
    fn all_rockets(&self) -> Vec<&Rocket>;

    /// Number of registered rockets
    fn rocket_count(&self) -> usize {
        self.all_rockets().len()
    }

    /// Number of registered missions
    fn mission_count(&self) -> usize {
        self.all_missions().len()
    }
}
