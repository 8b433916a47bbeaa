//! Service layer for task creation, lookup, and status changes.

use crate::task::{
    domain::{
        AssetId, MaterialId, ParseTaskStatusError, Task, TaskCreationConfig, TaskCreationError,
        TaskDomain, TaskDomainError, TaskDraft, TaskId, TaskStatus,
    },
    ports::{TaskQueryError, TaskQueryService, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Request payload for creating a task from raw field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: String,
    domain: String,
    inventory_id: Option<MaterialId>,
    category: String,
    asset_id: Option<AssetId>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// `domain` is a domain code such as `AREA` or `CROP`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: impl Into<String>,
        domain: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: priority.into(),
            domain: domain.into(),
            inventory_id: None,
            category: category.into(),
            asset_id: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the inventory material used by crop tasks.
    #[must_use]
    pub const fn with_inventory_id(mut self, inventory_id: MaterialId) -> Self {
        self.inventory_id = Some(inventory_id);
        self
    }

    /// Attaches an asset reference.
    #[must_use]
    pub const fn with_asset_id(mut self, asset_id: AssetId) -> Self {
        self.asset_id = Some(asset_id);
        self
    }
}

/// Request payload for moving a task to a named status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTaskStatusRequest {
    task_id: TaskId,
    status: String,
}

impl ChangeTaskStatusRequest {
    /// Creates a status change request.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// An asset lookup failed.
    #[error(transparent)]
    Query(#[from] TaskQueryError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The requested status is not a known status code.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

impl From<TaskCreationError> for TaskLifecycleError {
    fn from(err: TaskCreationError) -> Self {
        match err {
            TaskCreationError::Domain(domain) => Self::Domain(domain),
            TaskCreationError::Query(query) => Self::Query(query),
        }
    }
}

impl TaskLifecycleError {
    /// Returns `true` when the request itself was at fault, as opposed to
    /// the infrastructure behind the service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(_)
                | Self::InvalidStatus(_)
                | Self::Repository(TaskRepositoryError::NotFound(_))
        )
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Status changes run load, mutate, save one at a time across this service
/// and its clones. Writers that bypass the service are not coordinated with.
pub struct TaskLifecycleService<R, Q, C>
where
    R: TaskRepository,
    Q: TaskQueryService,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    query: Arc<Q>,
    clock: Arc<C>,
    config: TaskCreationConfig,
    transitions: Arc<Mutex<()>>,
}

impl<R, Q, C> Clone for TaskLifecycleService<R, Q, C>
where
    R: TaskRepository,
    Q: TaskQueryService,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            query: Arc::clone(&self.query),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
            transitions: Arc::clone(&self.transitions),
        }
    }
}

impl<R, Q, C> TaskLifecycleService<R, Q, C>
where
    R: TaskRepository,
    Q: TaskQueryService,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service with the default creation rules.
    #[must_use]
    pub fn new(repository: Arc<R>, query: Arc<Q>, clock: Arc<C>) -> Self {
        Self::with_config(repository, query, clock, TaskCreationConfig::default())
    }

    /// Creates a new task lifecycle service with custom creation rules.
    #[must_use]
    pub fn with_config(
        repository: Arc<R>,
        query: Arc<Q>,
        clock: Arc<C>,
        config: TaskCreationConfig,
    ) -> Self {
        Self {
            repository,
            query,
            clock,
            config,
            transitions: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the creation rules in use.
    #[must_use]
    pub const fn config(&self) -> &TaskCreationConfig {
        &self.config
    }

    /// Validates a request, creates the task, and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a field or the domain
    /// binding is invalid, [`TaskLifecycleError::Query`] when an asset lookup
    /// fails, or [`TaskLifecycleError::Repository`] when the task cannot be
    /// stored.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
            priority,
            domain,
            inventory_id,
            category,
            asset_id,
        } = request;
        debug!(domain = %domain, category = %category, "creating task");

        let task_domain = TaskDomain::from_code(&domain, inventory_id, &*self.query)
            .await
            .inspect_err(|err| warn!(domain = %domain, error = %err, "task domain rejected"))?;

        let mut draft = TaskDraft::new(title, priority, task_domain, category);
        if let Some(description) = description {
            draft = draft.with_description(description);
        }
        if let Some(due_date) = due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(asset_id) = asset_id {
            draft = draft.with_asset_id(asset_id);
        }

        let task = Task::create(draft, &*self.query, &*self.clock, &self.config)
            .await
            .inspect_err(|err| warn!(error = %err, "task creation rejected"))?;

        self.repository.save(&task).await?;
        info!(task_id = %task.uid(), domain = %task.domain(), "task created");
        Ok(task)
    }

    /// Finds a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns every stored task, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Moves a task to the named status and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown status
    /// code, [`TaskRepositoryError::NotFound`] for an unknown task, and
    /// [`TaskDomainError::InvalidStatusTransition`] when the state machine
    /// rejects the change.
    pub async fn change_status(
        &self,
        request: ChangeTaskStatusRequest,
    ) -> TaskLifecycleResult<Task> {
        let target = TaskStatus::try_from(request.status.as_str())?;
        self.transition(request.task_id, |task| task.change_status(target))
            .await
    }

    /// Cancels a task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for an unknown task and
    /// [`TaskDomainError::InvalidStatusTransition`] for a finished task.
    pub async fn cancel_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.transition(id, Task::cancel).await
    }

    /// Completes a task and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for an unknown task and
    /// [`TaskDomainError::InvalidStatusTransition`] for a finished task.
    pub async fn complete_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.transition(id, Task::complete).await
    }

    /// Marks a task as due and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] for an unknown task and
    /// [`TaskDomainError::InvalidStatusTransition`] unless the task is still
    /// in its created state.
    pub async fn set_task_as_due(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.transition(id, Task::set_as_due).await
    }

    async fn transition<F>(&self, id: TaskId, apply: F) -> TaskLifecycleResult<Task>
    where
        F: FnOnce(&mut Task) -> Result<(), TaskDomainError> + Send,
    {
        let _guard = self.transitions.lock().await;
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;

        let from = task.status();
        apply(&mut task)
            .inspect_err(|err| warn!(task_id = %id, error = %err, "status change rejected"))?;

        self.repository.save(&task).await?;
        info!(task_id = %id, from = %from, to = %task.status(), "task status changed");
        Ok(task)
    }
}
