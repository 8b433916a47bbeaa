//! In-memory asset stores answering the asset lookup ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{AreaId, CropId, MaterialId},
    ports::{
        AreaQuery, AreaSummary, AssetQueryError, AssetQueryResult, CropQuery, CropSummary,
        MaterialQuery, MaterialSummary,
    },
};

/// Asset read model that can be kept in an [`InMemoryAssetStore`].
pub trait StoredAsset: Clone + fmt::Debug + Send + Sync + 'static {
    /// Identifier type of the asset.
    type Id: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    /// Returns the asset identifier.
    fn id(&self) -> Self::Id;
}

impl StoredAsset for AreaSummary {
    type Id = AreaId;

    fn id(&self) -> AreaId {
        self.uid
    }
}

impl StoredAsset for CropSummary {
    type Id = CropId;

    fn id(&self) -> CropId {
        self.uid
    }
}

impl StoredAsset for MaterialSummary {
    type Id = MaterialId;

    fn id(&self) -> MaterialId {
        self.uid
    }
}

/// Thread-safe in-memory store for one kind of asset.
#[derive(Debug)]
pub struct InMemoryAssetStore<S: StoredAsset> {
    records: Arc<RwLock<HashMap<S::Id, S>>>,
}

/// In-memory area store.
pub type InMemoryAreaStore = InMemoryAssetStore<AreaSummary>;
/// In-memory crop store.
pub type InMemoryCropStore = InMemoryAssetStore<CropSummary>;
/// In-memory material store.
pub type InMemoryMaterialStore = InMemoryAssetStore<MaterialSummary>;

impl<S: StoredAsset> InMemoryAssetStore<S> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an asset.
    ///
    /// # Errors
    ///
    /// Returns [`AssetQueryError::Storage`] when the store lock is poisoned.
    pub fn insert(&self, asset: S) -> AssetQueryResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.insert(asset.id(), asset);
        Ok(())
    }

    /// Removes an asset, returning it if it was present.
    ///
    /// # Errors
    ///
    /// Returns [`AssetQueryError::Storage`] when the store lock is poisoned.
    pub fn remove(&self, id: S::Id) -> AssetQueryResult<Option<S>> {
        let mut records = self.records.write().map_err(poisoned)?;
        Ok(records.remove(&id))
    }

    fn get(&self, id: S::Id) -> AssetQueryResult<Option<S>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.get(&id).cloned())
    }
}

impl<S: StoredAsset> Default for InMemoryAssetStore<S> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<S: StoredAsset> Clone for InMemoryAssetStore<S> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

fn poisoned(err: impl ToString) -> AssetQueryError {
    AssetQueryError::storage(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AreaQuery for InMemoryAreaStore {
    async fn find_area(&self, id: AreaId) -> AssetQueryResult<Option<AreaSummary>> {
        self.get(id)
    }
}

#[async_trait]
impl CropQuery for InMemoryCropStore {
    async fn find_crop(&self, id: CropId) -> AssetQueryResult<Option<CropSummary>> {
        self.get(id)
    }
}

#[async_trait]
impl MaterialQuery for InMemoryMaterialStore {
    async fn find_material(&self, id: MaterialId) -> AssetQueryResult<Option<MaterialSummary>> {
        self.get(id)
    }
}
