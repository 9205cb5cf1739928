//! Adapter implementations for port traits
//!
//! This module contains concrete implementations:
//!
//! - `memory/` - Hash-map backed `EntityStore`
//! - `toml/` - Scenario file parsing and writing

pub mod memory;
pub mod toml;

pub use memory::InMemoryStore;
