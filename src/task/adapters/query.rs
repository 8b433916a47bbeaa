//! Query facade backed by the asset subsystems' lookup ports.

use std::sync::Arc;

use crate::async_result::AsyncResult;
use crate::task::{
    domain::{AreaId, CropId, MaterialId},
    ports::{
        AreaQuery, AreaSummary, AssetKind, CropQuery, CropSummary, MaterialQuery,
        MaterialSummary, TaskQueryError, TaskQueryResult, TaskQueryService,
    },
};

/// [`TaskQueryService`] that delegates to one lookup port per asset store.
///
/// Each lookup runs as its own Tokio task and its answer is delivered back
/// through the returned envelope. Missing assets become
/// [`TaskQueryError::NotFound`].
#[derive(Debug)]
pub struct AssetQueryService<A, C, M> {
    areas: Arc<A>,
    crops: Arc<C>,
    materials: Arc<M>,
}

impl<A, C, M> AssetQueryService<A, C, M>
where
    A: AreaQuery + 'static,
    C: CropQuery + 'static,
    M: MaterialQuery + 'static,
{
    /// Creates a facade over the given asset stores.
    #[must_use]
    pub const fn new(areas: Arc<A>, crops: Arc<C>, materials: Arc<M>) -> Self {
        Self {
            areas,
            crops,
            materials,
        }
    }
}

impl<A, C, M> Clone for AssetQueryService<A, C, M> {
    fn clone(&self) -> Self {
        Self {
            areas: Arc::clone(&self.areas),
            crops: Arc::clone(&self.crops),
            materials: Arc::clone(&self.materials),
        }
    }
}

impl<A, C, M> TaskQueryService for AssetQueryService<A, C, M>
where
    A: AreaQuery + 'static,
    C: CropQuery + 'static,
    M: MaterialQuery + 'static,
{
    fn find_area_by_id(&self, id: AreaId) -> TaskQueryResult<AreaSummary> {
        let areas = Arc::clone(&self.areas);
        AsyncResult::spawn(async move {
            areas
                .find_area(id)
                .await
                .map_err(TaskQueryError::from)
                .and_then(|found| {
                    found.ok_or_else(|| not_found(AssetKind::Area, id.into_inner()))
                })
        })
    }

    fn find_crop_by_id(&self, id: CropId) -> TaskQueryResult<CropSummary> {
        let crops = Arc::clone(&self.crops);
        AsyncResult::spawn(async move {
            crops
                .find_crop(id)
                .await
                .map_err(TaskQueryError::from)
                .and_then(|found| {
                    found.ok_or_else(|| not_found(AssetKind::Crop, id.into_inner()))
                })
        })
    }

    fn find_material_by_id(&self, id: MaterialId) -> TaskQueryResult<MaterialSummary> {
        let materials = Arc::clone(&self.materials);
        AsyncResult::spawn(async move {
            materials
                .find_material(id)
                .await
                .map_err(TaskQueryError::from)
                .and_then(|found| {
                    found.ok_or_else(|| not_found(AssetKind::Material, id.into_inner()))
                })
        })
    }
}

fn not_found(kind: AssetKind, id: uuid::Uuid) -> TaskQueryError {
    tracing::debug!(%kind, %id, "asset lookup found nothing");
    TaskQueryError::NotFound { kind, id }
}
