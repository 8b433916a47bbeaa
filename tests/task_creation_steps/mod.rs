//! Step definitions for task creation scenarios.

pub mod given;
