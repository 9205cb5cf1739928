//! In-memory entity store
//!
//! Two name-keyed hash maps. Iteration order of `all_missions` and
//! `all_rockets` is unspecified.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::core::error::{EntityKind, FleetError};
use crate::core::models::{Mission, Rocket};
use crate::core::ports::EntityStore;

/// `EntityStore` backed by hash maps
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rockets: HashMap<String, Rocket>,
    missions: HashMap<String, Mission>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for InMemoryStore {
    fn register_rocket(&mut self, rocket: Rocket) -> Result<(), FleetError> {
        match self.rockets.entry(rocket.name().to_string()) {
            Entry::Occupied(_) => Err(FleetError::DuplicateEntity {
                kind: EntityKind::Rocket,
                name: rocket.name().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(rocket);
                Ok(())
            },
        }
    }

    fn register_mission(&mut self, mission: Mission) -> Result<(), FleetError> {
        match self.missions.entry(mission.name().to_string()) {
            Entry::Occupied(_) => Err(FleetError::DuplicateEntity {
                kind: EntityKind::Mission,
                name: mission.name().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(mission);
                Ok(())
            },
        }
    }

    fn find_rocket(&self, name: &str) -> Option<&Rocket> {
        self.rockets.get(name)
    }

    fn find_rocket_mut(&mut self, name: &str) -> Option<&mut Rocket> {
        self.rockets.get_mut(name)
    }

    fn find_mission(&self, name: &str) -> Option<&Mission> {
        self.missions.get(name)
    }

    fn find_mission_mut(&mut self, name: &str) -> Option<&mut Mission> {
        self.missions.get_mut(name)
    }

    fn all_missions(&self) -> Vec<&Mission> {
        self.missions.values().collect()
    }

    fn all_rockets(&self) -> Vec<&Rocket> {
        self.rockets.values().collect()
    }

    fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    fn mission_count(&self) -> usize {
        self.missions.len()
    }
}
