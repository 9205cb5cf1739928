//! Shared engine handle for multiple callers
//!
//! A single global lock guards the whole engine, so every
//! lookup -> mutate -> recompute sequence runs without interleaving.

use std::sync::Arc;

use parking_lot::Mutex;

use super::assignment::AssignmentEngine;
use super::summary::MissionReport;
use crate::core::error::FleetError;
use crate::core::models::{Mission, MissionStatus, Rocket, RocketStatus};
use crate::core::ports::EntityStore;

/// Cloneable, lock-guarded handle to an [`AssignmentEngine`]
#[derive(Debug)]
pub struct SharedEngine<S> {
    inner: Arc<Mutex<AssignmentEngine<S>>>,
}

impl<S> Clone for SharedEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: EntityStore> SharedEngine<S> {
    /// Wrap an engine for shared use
    #[must_use]
    pub fn new(engine: AssignmentEngine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Create a shared engine directly over a store
    #[must_use]
    pub fn from_store(store: S) -> Self {
        Self::new(AssignmentEngine::new(store))
    }

    /// Register a rocket
    pub fn add_rocket(&self, rocket: Rocket) -> Result<(), FleetError> {
        self.inner.lock().add_rocket(rocket)
    }

    /// Register a mission
    pub fn add_mission(&self, mission: Mission) -> Result<(), FleetError> {
        self.inner.lock().add_mission(mission)
    }

    /// See [`AssignmentEngine::assign_rocket`]
    pub fn assign_rocket(&self, rocket: &str, mission: &str) -> Result<(), FleetError> {
        self.inner.lock().assign_rocket(rocket, mission)
    }

    /// See [`AssignmentEngine::assign_rockets`]
    ///
    /// The lock is held for the whole batch.
    pub fn assign_rockets<R: AsRef<str>>(&self, rockets: &[R], mission: &str) -> Result<(), FleetError> {
        self.inner.lock().assign_rockets(rockets, mission)
    }

    /// See [`AssignmentEngine::change_rocket_status`]
    pub fn change_rocket_status(&self, rocket: &str, status: RocketStatus) -> Result<(), FleetError> {
        self.inner.lock().change_rocket_status(rocket, status)
    }

    /// See [`AssignmentEngine::change_mission_status`]
    pub fn change_mission_status(&self, mission: &str, status: MissionStatus) -> Result<(), FleetError> {
        self.inner.lock().change_mission_status(mission, status)
    }

    /// Snapshot of a rocket
    #[must_use]
    pub fn rocket(&self, name: &str) -> Option<Rocket> {
        self.inner.lock().rocket(name).cloned()
    }

    /// Snapshot of a mission
    #[must_use]
    pub fn mission(&self, name: &str) -> Option<Mission> {
        self.inner.lock().mission(name).cloned()
    }

    /// Ordered summary of all missions
    #[must_use]
    pub fn mission_summary(&self) -> Vec<MissionReport> {
        self.inner.lock().mission_summary()
    }

    /// Run `f` with exclusive access to the engine
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut AssignmentEngine<S>) -> T) -> T {
        f(&mut *self.inner.lock())
    }
}
