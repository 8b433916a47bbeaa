//! Port contracts for task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the task domain
//! and services.

pub mod assets;
pub mod query;
pub mod repository;

pub use assets::{AreaQuery, AssetQueryError, AssetQueryResult, CropQuery, MaterialQuery};
pub use query::{
    AreaSummary, AssetKind, CropSummary, MaterialSummary, TaskQueryError, TaskQueryResult,
    TaskQueryService,
};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
