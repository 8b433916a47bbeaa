//! Task category.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of work a task describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskCategory {
    /// Area upkeep.
    Area,
    /// Crop care.
    Crop,
    /// Bookkeeping.
    Finance,
    /// Anything else.
    General,
    /// Stock handling.
    Inventory,
    /// Nutrient dosing.
    Nutrient,
    /// Pest control.
    #[serde(rename = "PESTCONTROL")]
    PestControl,
    /// Reservoir upkeep.
    Reservoir,
    /// Safety checks.
    Safety,
    /// Cleaning and sanitation.
    Sanitation,
    /// Harvesting.
    Harvest,
    /// Watering.
    Watering,
}

impl TaskCategory {
    /// Every recognised category.
    pub const ALL: [Self; 12] = [
        Self::Area,
        Self::Crop,
        Self::Finance,
        Self::General,
        Self::Inventory,
        Self::Nutrient,
        Self::PestControl,
        Self::Reservoir,
        Self::Safety,
        Self::Sanitation,
        Self::Harvest,
        Self::Watering,
    ];

    /// Returns the canonical category code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Area => "AREA",
            Self::Crop => "CROP",
            Self::Finance => "FINANCE",
            Self::General => "GENERAL",
            Self::Inventory => "INVENTORY",
            Self::Nutrient => "NUTRIENT",
            Self::PestControl => "PESTCONTROL",
            Self::Reservoir => "RESERVOIR",
            Self::Safety => "SAFETY",
            Self::Sanitation => "SANITATION",
            Self::Harvest => "HARVEST",
            Self::Watering => "WATERING",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskCategory {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(TaskDomainError::CategoryEmpty);
        }
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| TaskDomainError::InvalidCategory(value.to_owned()))
    }
}
