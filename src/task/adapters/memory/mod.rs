//! In-memory adapters for tasks and the asset registries they reference.

mod assets;
mod task;

pub use assets::{
    InMemoryAreaStore, InMemoryAssetStore, InMemoryCropStore, InMemoryMaterialStore, StoredAsset,
};
pub use task::InMemoryTaskRepository;
