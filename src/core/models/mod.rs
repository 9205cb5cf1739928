//! Domain models for missionctl
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Rocket`] - A vehicle with an operational status
//! - [`Mission`] - A named mission owning a set of attached rockets
//! - [`RocketStatus`] / [`MissionStatus`] - Closed status enums
//! - [`Scenario`] - A declarative list of fleet operations

mod mission;
mod rocket;
mod scenario;
mod status;

pub use mission::Mission;
pub use rocket::Rocket;
pub use scenario::{Scenario, Step};
pub use status::{MissionStatus, RocketStatus};
