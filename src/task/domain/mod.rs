//! Domain model for farm tasks.
//!
//! A task is bound to exactly one asset domain, validated on creation, and
//! moved through a small status state machine. Lookups into other
//! aggregates go through the query facade port; persistence stays outside
//! the domain boundary.

mod category;
mod config;
mod error;
mod ids;
mod priority;
mod status;
mod task;
mod task_domain;

pub use category::TaskCategory;
pub use config::TaskCreationConfig;
pub use error::{ParseTaskStatusError, TaskCreationError, TaskDomainError};
pub use ids::{AreaId, AssetId, CropId, MaterialId, TaskId};
pub use priority::Priority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDraft};
pub use task_domain::TaskDomain;
