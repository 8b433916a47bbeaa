//! Task aggregate root and its creation pipeline.

use super::{
    AssetId, Priority, TaskCategory, TaskCreationConfig, TaskCreationError, TaskDomain,
    TaskDomainError, TaskId, TaskStatus,
};
use crate::task::ports::TaskQueryService;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Raw, unvalidated input for a new task.
///
/// The domain binding is already constructed; everything else is checked by
/// [`Task::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: String,
    domain: TaskDomain,
    category: String,
    asset_id: Option<AssetId>,
}

impl TaskDraft {
    /// Creates a draft with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: impl Into<String>,
        domain: TaskDomain,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: priority.into(),
            domain,
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

    /// Attaches an asset reference.
    #[must_use]
    pub const fn with_asset_id(mut self, asset_id: AssetId) -> Self {
        self.asset_id = Some(asset_id);
        self
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    uid: TaskId,
    title: String,
    description: Option<String>,
    created_date: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    priority: Priority,
    category: TaskCategory,
    domain: TaskDomain,
    asset_id: Option<AssetId>,
    status: TaskStatus,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub uid: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted creation timestamp.
    pub created_date: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted category.
    pub category: TaskCategory,
    /// Persisted domain binding.
    pub domain: TaskDomain,
    /// Persisted asset reference, if any.
    pub asset_id: Option<AssetId>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
}

impl Task {
    /// Validates a draft and creates a new task in [`TaskStatus::Created`].
    ///
    /// Rules run in a fixed order and the first failure is reported: title,
    /// due date, priority, category, then the attached asset. The asset is
    /// only looked up when one is attached. Nothing is persisted.
    ///
    /// The title is trimmed: a whitespace-only title counts as empty and the
    /// stored title has no surrounding whitespace. An empty description is
    /// stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCreationError::Domain`] for the first failed rule and
    /// [`TaskCreationError::Query`] when the asset lookup itself fails.
    pub async fn create<Q, C>(
        draft: TaskDraft,
        query: &Q,
        clock: &C,
        config: &TaskCreationConfig,
    ) -> Result<Self, TaskCreationError>
    where
        Q: TaskQueryService + ?Sized,
        C: Clock + Sync + ?Sized,
    {
        let created_date = clock.utc();
        let (priority, category) = validate_fields(&draft, created_date, config)?;

        if let Some(asset_id) = draft.asset_id {
            draft.domain.resolve_asset(query, asset_id).await?;
        }

        let TaskDraft {
            title,
            description,
            due_date,
            domain,
            asset_id,
            ..
        } = draft;

        Ok(Self {
            uid: TaskId::new(),
            title: title.trim().to_owned(),
            description: description.filter(|text| !text.is_empty()),
            created_date,
            due_date,
            priority,
            category,
            domain,
            asset_id,
            status: TaskStatus::Created,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            uid: data.uid,
            title: data.title,
            description: data.description,
            created_date: data.created_date,
            due_date: data.due_date,
            priority: data.priority,
            category: data.category,
            domain: data.domain,
            asset_id: data.asset_id,
            status: data.status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn uid(&self) -> TaskId {
        self.uid
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category.
    #[must_use]
    pub const fn category(&self) -> TaskCategory {
        self.category
    }

    /// Returns the domain binding.
    #[must_use]
    pub const fn domain(&self) -> &TaskDomain {
        &self.domain
    }

    /// Returns the attached asset reference, if any.
    #[must_use]
    pub const fn asset_id(&self) -> Option<AssetId> {
        self.asset_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Moves the task to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the state
    /// machine does not permit the change. The status is left untouched.
    pub const fn change_status(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.uid,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }

    /// Cancels the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// already cancelled or completed.
    pub const fn cancel(&mut self) -> Result<(), TaskDomainError> {
        self.change_status(TaskStatus::Cancelled)
    }

    /// Completes the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// already cancelled or completed.
    pub const fn complete(&mut self) -> Result<(), TaskDomainError> {
        self.change_status(TaskStatus::Completed)
    }

    /// Marks a freshly created task as due.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] unless the task
    /// is in [`TaskStatus::Created`].
    pub const fn set_as_due(&mut self) -> Result<(), TaskDomainError> {
        self.change_status(TaskStatus::Due)
    }
}

/// Runs the synchronous creation rules in order.
fn validate_fields(
    draft: &TaskDraft,
    created_date: DateTime<Utc>,
    config: &TaskCreationConfig,
) -> Result<(Priority, TaskCategory), TaskDomainError> {
    if draft.title.trim().is_empty() {
        return Err(TaskDomainError::TitleEmpty);
    }

    if let Some(due_date) = draft.due_date {
        let too_early = if config.allow_due_at_creation {
            due_date < created_date
        } else {
            due_date <= created_date
        };
        if too_early {
            return Err(TaskDomainError::DueDateInvalid);
        }
    }

    let priority = Priority::try_from(draft.priority.as_str())?;
    let category = TaskCategory::try_from(draft.category.as_str())?;
    Ok((priority, category))
}
