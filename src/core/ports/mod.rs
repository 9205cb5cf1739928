//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the assignment rules and the
//! storage that holds rockets and missions.
//!
//! Implementations live in the `adapters` module.

mod entity_store;

pub use entity_store::EntityStore;
