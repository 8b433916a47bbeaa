//! Task lifecycle status and its transition rules.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Task has been created and is open.
    Created,
    /// Task has reached its due date and is still open.
    Due,
    /// Task was called off.
    Cancelled,
    /// Task was carried out.
    Completed,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Created, Self::Due, Self::Cancelled, Self::Completed];

    /// Returns the canonical status code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Due => "DUE",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Returns `true` when no further transition is allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Returns `true` when a task in this status may move to `target`.
    ///
    /// Open tasks can be cancelled or completed; only freshly created tasks
    /// can become due.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Created, Self::Due | Self::Cancelled | Self::Completed)
                | (Self::Due, Self::Cancelled | Self::Completed)
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "CREATED" => Ok(Self::Created),
            "DUE" => Ok(Self::Due),
            "CANCELLED" => Ok(Self::Cancelled),
            "COMPLETED" | "COMPLETE" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
