//! Assignment engine - rocket/mission state machine
//!
//! Owns an [`EntityStore`] and is the only code that mutates rockets and
//! missions. After every change to a mission's rocket set, or to the status of
//! a rocket in it, the mission's status is recomputed before the call returns.
//!
//! A rocket's back-reference and its mission's rocket set are always updated
//! together: a rocket names mission `M` if and only if `M` lists the rocket.

use log::{debug, info};

use super::rules::{check_transition, derive_mission_status};
use super::summary::{self, MissionReport};
use crate::core::error::FleetError;
use crate::core::models::{Mission, MissionStatus, Rocket, RocketStatus};
use crate::core::ports::EntityStore;

/// Validates and applies rocket/mission assignments and status changes
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine<S> {
    store: S,
}

impl<S: EntityStore> AssignmentEngine<S> {
    /// Create an engine over `store`
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read-only access to the underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine and return its store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Register a rocket
    pub fn add_rocket(&mut self, rocket: Rocket) -> Result<(), FleetError> {
        debug!("Registering rocket {}", rocket.name());
        self.store.register_rocket(rocket)
    }

    /// Register a mission
    pub fn add_mission(&mut self, mission: Mission) -> Result<(), FleetError> {
        debug!("Registering mission {}", mission.name());
        self.store.register_mission(mission)
    }

    /// Look up a rocket
    #[must_use]
    pub fn rocket(&self, name: &str) -> Option<&Rocket> {
        self.store.find_rocket(name)
    }

    /// Look up a mission
    #[must_use]
    pub fn mission(&self, name: &str) -> Option<&Mission> {
        self.store.find_mission(name)
    }

    /// The mission a rocket is attached to, if any
    #[must_use]
    pub fn mission_of(&self, rocket: &str) -> Option<&Mission> {
        self.store
            .find_rocket(rocket)
            .and_then(Rocket::mission)
            .and_then(|mission| self.store.find_mission(mission))
    }

    /// Rockets attached to a mission, in attachment order
    pub fn rockets_of(&self, mission: &str) -> Result<Vec<&Rocket>, FleetError> {
        let mission = self
            .store
            .find_mission(mission)
            .ok_or_else(|| FleetError::mission_not_found(mission))?;
        Ok(mission.rockets().iter().filter_map(|r| self.store.find_rocket(r)).collect())
    }

    /// Assign a rocket to a mission
    ///
    /// The rocket must be on the ground and the mission must not have ended.
    /// On success the rocket is in space and the mission status is recomputed.
    pub fn assign_rocket(&mut self, rocket_name: &str, mission_name: &str) -> Result<(), FleetError> {
        let rocket = self
            .store
            .find_rocket(rocket_name)
            .ok_or_else(|| FleetError::rocket_not_found(rocket_name))?;
        let mission = self
            .store
            .find_mission(mission_name)
            .ok_or_else(|| FleetError::mission_not_found(mission_name))?;

        if !mission.is_open() {
            return Err(FleetError::MissionUnavailable {
                name: mission_name.to_string(),
            });
        }
        if !rocket.is_available() {
            return Err(FleetError::RocketUnavailable {
                name: rocket_name.to_string(),
                status: rocket.status(),
            });
        }

        if let Some(rocket) = self.store.find_rocket_mut(rocket_name) {
            rocket.set_status(RocketStatus::InSpace);
            rocket.attach_to(mission_name);
        }
        if let Some(mission) = self.store.find_mission_mut(mission_name) {
            mission.add_rocket(rocket_name);
        }
        let status = self.recompute(mission_name)?;

        info!("Assigned {rocket_name} to {mission_name} (mission now {status})");
        Ok(())
    }

    /// Assign several rockets to one mission, in order
    ///
    /// Stops at the first failure. Rockets assigned before the failure stay
    /// assigned.
    pub fn assign_rockets<R: AsRef<str>>(
        &mut self,
        rocket_names: &[R],
        mission_name: &str,
    ) -> Result<(), FleetError> {
        for rocket_name in rocket_names {
            self.assign_rocket(rocket_name.as_ref(), mission_name)?;
        }
        Ok(())
    }

    /// Change a rocket's status
    ///
    /// If the rocket is attached, its mission is recomputed. Returning a rocket
    /// to the ground also detaches it from its mission.
    pub fn change_rocket_status(
        &mut self,
        rocket_name: &str,
        status: RocketStatus,
    ) -> Result<(), FleetError> {
        let rocket = self
            .store
            .find_rocket_mut(rocket_name)
            .ok_or_else(|| FleetError::rocket_not_found(rocket_name))?;

        let previous = rocket.status();
        rocket.set_status(status);
        let mission_name = if status == RocketStatus::OnGround {
            rocket.detach()
        } else {
            rocket.mission().map(str::to_string)
        };
        debug!("Rocket {rocket_name}: {previous} -> {status}");

        let Some(mission_name) = mission_name else {
            return Ok(());
        };

        if status == RocketStatus::OnGround {
            if let Some(mission) = self.store.find_mission_mut(&mission_name) {
                mission.remove_rocket(rocket_name);
            }
            info!("Detached {rocket_name} from {mission_name}");
        }
        self.recompute(&mission_name)?;
        Ok(())
    }

    /// Explicitly change a mission's status
    ///
    /// The target must be consistent with the attached rockets; `Ended` and
    /// `Scheduled` need an empty rocket set.
    pub fn change_mission_status(
        &mut self,
        mission_name: &str,
        status: MissionStatus,
    ) -> Result<(), FleetError> {
        let statuses = self.attached_statuses(mission_name)?;
        check_transition(mission_name, status, &statuses)?;

        let mission = self
            .store
            .find_mission_mut(mission_name)
            .ok_or_else(|| FleetError::mission_not_found(mission_name))?;
        let previous = mission.status();
        mission.set_status(status);

        info!("Mission {mission_name}: {previous} -> {status}");
        Ok(())
    }

    /// Ordered summary of all missions
    #[must_use]
    pub fn mission_summary(&self) -> Vec<MissionReport> {
        summary::mission_summary(&self.store)
    }

    /// Statuses of the rockets attached to a mission
    fn attached_statuses(&self, mission_name: &str) -> Result<Vec<RocketStatus>, FleetError> {
        let mission = self
            .store
            .find_mission(mission_name)
            .ok_or_else(|| FleetError::mission_not_found(mission_name))?;
        Ok(mission
            .rockets()
            .iter()
            .filter_map(|r| self.store.find_rocket(r))
            .map(Rocket::status)
            .collect())
    }

    /// Re-derive a mission's status from its attached rockets
    fn recompute(&mut self, mission_name: &str) -> Result<MissionStatus, FleetError> {
        let status = derive_mission_status(&self.attached_statuses(mission_name)?);
        if let Some(mission) = self.store.find_mission_mut(mission_name) {
            mission.set_status(status);
        }
        Ok(status)
    }
}
