//! Error types for task domain validation and parsing.

use super::{AssetId, MaterialId, TaskId, TaskStatus};
use crate::task::ports::TaskQueryError;
use thiserror::Error;

/// Errors returned while validating task fields, constructing task domains,
/// or changing task status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    TitleEmpty,

    /// The due date lies before the task creation time.
    #[error("task due date must not be earlier than its creation date")]
    DueDateInvalid,

    /// No priority was supplied.
    #[error("task priority must not be empty")]
    PriorityEmpty,

    /// The priority is not a recognised code.
    #[error("invalid task priority: {0}")]
    InvalidPriority(String),

    /// No category was supplied.
    #[error("task category must not be empty")]
    CategoryEmpty,

    /// The category is not a recognised code.
    #[error("invalid task category: {0}")]
    InvalidCategory(String),

    /// The attached asset does not resolve in the task domain's registry.
    #[error("asset {0} does not exist for this task domain")]
    InvalidAssetId(AssetId),

    /// The inventory material backing a crop task does not exist.
    #[error("inventory material {0} does not exist")]
    InvalidInventoryId(MaterialId),

    /// No task domain code was supplied.
    #[error("task domain must not be empty")]
    DomainEmpty,

    /// The task domain code is not recognised.
    #[error("invalid task domain: {0}")]
    InvalidDomain(String),

    /// A crop task domain was requested without an inventory material.
    #[error("crop task domain requires an inventory identifier")]
    InventoryIdRequired,

    /// The requested status change is not permitted.
    #[error("task {task_id} cannot transition from {from} to {to}")]
    InvalidStatusTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

/// Errors returned while creating a task or one of its domain variants.
///
/// Validation failures and infrastructure failures from the query facade are
/// kept apart so callers can report them differently.
#[derive(Debug, Clone, Error)]
pub enum TaskCreationError {
    /// Field or domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// An asset lookup failed for reasons other than a missing asset.
    #[error(transparent)]
    Query(#[from] TaskQueryError),
}

impl TaskCreationError {
    /// Returns the validation error, if this is one.
    #[must_use]
    pub const fn domain_error(&self) -> Option<&TaskDomainError> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Query(_) => None,
        }
    }
}

/// Error returned while parsing a task status code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
