//! In-memory task repository.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::async_result::AsyncResult;
use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Every operation completes before returning, so envelopes are handed back
/// already resolved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn save_now(&self, task: &Task) -> Result<(), TaskRepositoryError> {
        let mut tasks = self.tasks.write().map_err(poisoned)?;
        tasks.insert(task.uid(), task.clone());
        Ok(())
    }

    fn find_by_id_now(&self, id: TaskId) -> Result<Option<Task>, TaskRepositoryError> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        Ok(tasks.get(&id).cloned())
    }

    fn find_all_now(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        let tasks = self.tasks.read().map_err(poisoned)?;
        let mut all: Vec<Task> = tasks.values().cloned().collect();
        all.sort_by_key(|task| (task.created_date(), task.uid()));
        Ok(all)
    }
}

fn poisoned(err: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl TaskRepository for InMemoryTaskRepository {
    fn save(&self, task: &Task) -> TaskRepositoryResult<()> {
        AsyncResult::ready(self.save_now(task))
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        AsyncResult::ready(self.find_by_id_now(id))
    }

    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        AsyncResult::ready(self.find_all_now())
    }
}
