//! Business logic services
//!
//! - [`assignment`] - The assignment engine (rocket/mission state machine)
//! - [`rules`] - Pure mission status rules (recompute and explicit transitions)
//! - [`summary`] - Ordered mission summary and its text rendering
//! - [`shared`] - Lock-guarded engine handle for multiple callers
//! - [`runner`] - Apply a scenario's steps to an engine

pub mod assignment;
pub mod rules;
pub mod runner;
pub mod shared;
pub mod summary;

pub use assignment::AssignmentEngine;
pub use rules::{check_transition, derive_mission_status};
pub use runner::{RunReport, StepOutcome};
pub use shared::SharedEngine;
pub use summary::{MissionReport, RocketReport, format_missions, mission_summary};
