//! Tunable rules for task creation.

/// Configuration for the task creation pipeline.
///
/// # Examples
///
/// ```
/// use fieldwork::task::domain::TaskCreationConfig;
///
/// let config = TaskCreationConfig::default();
/// assert!(config.allow_due_at_creation);
///
/// let strict = TaskCreationConfig::strict();
/// assert!(!strict.allow_due_at_creation);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCreationConfig {
    /// Whether a due date equal to the creation timestamp is accepted.
    pub allow_due_at_creation: bool,
}

impl Default for TaskCreationConfig {
    fn default() -> Self {
        Self {
            allow_due_at_creation: true,
        }
    }
}

impl TaskCreationConfig {
    /// Creates a configuration that requires due dates strictly after the
    /// creation timestamp.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_due_at_creation: false,
        }
    }
}
