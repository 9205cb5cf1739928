//! Core domain logic for missionctl
//!
//! This module contains the assignment rules with no I/O dependencies.
//! Storage is abstracted through the [`ports::EntityStore`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Rocket, Mission, statuses, Scenario)
//! - `services/` - Assignment engine, status rules, summary, scenario runner
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Typed failures surfaced by every operation

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{EntityKind, FleetError};
