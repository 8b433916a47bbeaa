//! Query facade used by the task domain to check that referenced assets
//! exist.
//!
//! The facade is the only way task creation reaches into other aggregates.
//! Each lookup hands back an [`AsyncResult`], so the domain issues one
//! request and awaits it once.

use crate::async_result::{AsyncResult, ResultChannelClosed};
use crate::task::domain::{AreaId, CropId, MaterialId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Envelope returned by query facade lookups.
pub type TaskQueryResult<T> = AsyncResult<T, TaskQueryError>;

/// Asset registries the facade can consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Farm areas.
    Area,
    /// Crop batches.
    Crop,
    /// Inventory materials.
    Material,
}

impl AssetKind {
    /// Returns the canonical name of the registry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Crop => "crop",
            Self::Material => "material",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read model of an area, as seen by the task subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSummary {
    /// Area identifier.
    pub uid: AreaId,
    /// Display name.
    pub name: String,
}

/// Read model of a crop batch, as seen by the task subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropSummary {
    /// Crop identifier.
    pub uid: CropId,
    /// Human-readable batch code.
    pub batch_id: String,
}

/// Read model of an inventory material, as seen by the task subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSummary {
    /// Material identifier.
    pub uid: MaterialId,
    /// Display name.
    pub name: String,
}

/// Asset existence lookups needed by task validation.
pub trait TaskQueryService: Send + Sync {
    /// Looks up an area.
    fn find_area_by_id(&self, id: AreaId) -> TaskQueryResult<AreaSummary>;

    /// Looks up a crop batch.
    fn find_crop_by_id(&self, id: CropId) -> TaskQueryResult<CropSummary>;

    /// Looks up an inventory material.
    fn find_material_by_id(&self, id: MaterialId) -> TaskQueryResult<MaterialSummary>;
}

/// Errors delivered through query facade envelopes.
#[derive(Debug, Clone, Error)]
pub enum TaskQueryError {
    /// The asset does not exist in its registry.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Registry that was consulted.
        kind: AssetKind,
        /// Requested identifier.
        id: Uuid,
    },

    /// The backing registry could not answer.
    #[error("asset registry unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The lookup was abandoned before it produced an answer.
    #[error(transparent)]
    ChannelClosed(#[from] ResultChannelClosed),
}

impl TaskQueryError {
    /// Wraps a registry failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }

    /// Returns `true` when the asset is missing rather than unreachable.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
