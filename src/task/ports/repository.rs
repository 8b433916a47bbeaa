//! Repository port for task persistence and lookup.

use crate::async_result::{AsyncResult, ResultChannelClosed};
use crate::task::domain::{Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Envelope returned by task repository operations.
pub type TaskRepositoryResult<T> = AsyncResult<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations must make a saved task visible to every later
/// `find_by_id` for the same identifier, and saves of different tasks must
/// not interfere with each other.
///
/// Saves carry no version, so the last save of an identifier wins. Callers
/// that load, mutate, and save must serialize those steps themselves, as
/// `TaskLifecycleService` does for status changes.
pub trait TaskRepository: Send + Sync {
    /// Stores a task, replacing any earlier version with the same
    /// identifier.
    fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Resolves to `None` when the task does not exist.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every stored task, oldest first.
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),

    /// The operation was abandoned before it produced an answer.
    #[error(transparent)]
    ChannelClosed(#[from] ResultChannelClosed),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
