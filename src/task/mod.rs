//! Farm task management.
//!
//! Tasks describe operational work (sanitation, watering, harvesting and so
//! on) bound to one asset domain of the farm. The module follows hexagonal
//! architecture:
//!
//! - Domain types, validation, and the status state machine in [`domain`]
//! - Port contracts for persistence and asset lookups in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
