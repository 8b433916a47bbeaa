//! Lookup ports owned by the asset subsystems.
//!
//! Each asset store answers lookups for its own records. The task query
//! facade composes one query per store.

use super::{AreaSummary, CropSummary, MaterialSummary, TaskQueryError};
use crate::task::domain::{AreaId, CropId, MaterialId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for asset store lookups.
pub type AssetQueryResult<T> = Result<T, AssetQueryError>;

/// Area lookups.
#[async_trait]
pub trait AreaQuery: Send + Sync {
    /// Finds an area by identifier, returning `None` when it does not exist.
    async fn find_area(&self, id: AreaId) -> AssetQueryResult<Option<AreaSummary>>;
}

/// Crop lookups.
#[async_trait]
pub trait CropQuery: Send + Sync {
    /// Finds a crop batch by identifier, returning `None` when it does not
    /// exist.
    async fn find_crop(&self, id: CropId) -> AssetQueryResult<Option<CropSummary>>;
}

/// Inventory material lookups.
#[async_trait]
pub trait MaterialQuery: Send + Sync {
    /// Finds a material by identifier, returning `None` when it does not
    /// exist.
    async fn find_material(&self, id: MaterialId) -> AssetQueryResult<Option<MaterialSummary>>;
}

/// Errors returned by asset store implementations.
#[derive(Debug, Clone, Error)]
pub enum AssetQueryError {
    /// Storage-layer failure.
    #[error("asset storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssetQueryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}

impl From<AssetQueryError> for TaskQueryError {
    fn from(err: AssetQueryError) -> Self {
        match err {
            AssetQueryError::Storage(source) => Self::Unavailable(source),
        }
    }
}
