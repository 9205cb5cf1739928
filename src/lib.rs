//! missionctl - rocket and mission tracking
//!
//! This library tracks rockets and missions and keeps their statuses
//! consistent as rockets are assigned to missions, repaired, or brought back
//! to the ground.
//!
//! # Examples
//!
//! ```
//! use missionctl::adapters::InMemoryStore;
//! use missionctl::core::models::{Mission, MissionStatus, Rocket, RocketStatus};
//! use missionctl::core::services::AssignmentEngine;
//!
//! let mut engine = AssignmentEngine::new(InMemoryStore::new());
//! engine.add_rocket(Rocket::new("Dragon 1")).unwrap();
//! engine.add_mission(Mission::new("Mars")).unwrap();
//!
//! engine.assign_rocket("Dragon 1", "Mars").unwrap();
//! assert_eq!(engine.rocket("Dragon 1").unwrap().status(), RocketStatus::InSpace);
//! assert_eq!(engine.mission("Mars").unwrap().status(), MissionStatus::InProgress);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
