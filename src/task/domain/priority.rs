//! Task priority.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Regular work.
    Normal,
    /// Work that should be picked up first.
    Urgent,
}

impl Priority {
    /// Returns the canonical priority code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Codes are matched exactly; `"urgent"` is not a priority.
impl TryFrom<&str> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "" => Err(TaskDomainError::PriorityEmpty),
            "NORMAL" => Ok(Self::Normal),
            "URGENT" => Ok(Self::Urgent),
            _ => Err(TaskDomainError::InvalidPriority(value.to_owned())),
        }
    }
}
