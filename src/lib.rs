//! Fieldwork: operational task tracking for farm assets.
//!
//! This crate models the tasks a farm team carries out (sanitation,
//! watering, harvesting and so on), binds each task to one asset domain of
//! the farm, and tracks its status from creation to completion.
//!
//! # Architecture
//!
//! Fieldwork follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and asset lookups
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`async_result`]: One-shot result envelopes returned by every port
//! - [`task`]: Task creation, domain binding, and status lifecycle

pub mod async_result;
pub mod task;
