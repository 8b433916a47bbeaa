//! Asset domains a task can be bound to.

use super::{AssetId, MaterialId, TaskCreationError, TaskDomainError};
use crate::task::ports::{AssetKind, TaskQueryError, TaskQueryService};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of asset a task is bound to.
///
/// Each variant carries only the fields its domain needs. Variants that
/// depend on another aggregate are checked through the query facade when
/// they are constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskDomain {
    /// Work on a farm area.
    Area,
    /// Work on a crop, using an inventory material.
    Crop {
        /// Material the crop work consumes.
        inventory_id: MaterialId,
    },
    /// Bookkeeping work.
    Finance,
    /// Work not tied to a particular asset.
    General,
    /// Stock handling.
    Inventory,
    /// Reservoir upkeep.
    Reservoir,
}

impl TaskDomain {
    /// Every domain code, in declaration order.
    pub const CODES: [&'static str; 6] = [
        "AREA",
        "CROP",
        "FINANCE",
        "GENERAL",
        "INVENTORY",
        "RESERVOIR",
    ];

    /// Creates the area domain.
    #[must_use]
    pub const fn area() -> Self {
        Self::Area
    }

    /// Creates the finance domain.
    #[must_use]
    pub const fn finance() -> Self {
        Self::Finance
    }

    /// Creates the general domain.
    #[must_use]
    pub const fn general() -> Self {
        Self::General
    }

    /// Creates the inventory domain.
    #[must_use]
    pub const fn inventory() -> Self {
        Self::Inventory
    }

    /// Creates the reservoir domain.
    #[must_use]
    pub const fn reservoir() -> Self {
        Self::Reservoir
    }

    /// Creates the crop domain after checking that the inventory material
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidInventoryId`] when the material is
    /// unknown, or [`TaskCreationError::Query`] when the lookup itself fails.
    pub async fn crop<Q>(query: &Q, inventory_id: MaterialId) -> Result<Self, TaskCreationError>
    where
        Q: TaskQueryService + ?Sized,
    {
        match query.find_material_by_id(inventory_id).await {
            Ok(_) => Ok(Self::Crop { inventory_id }),
            Err(err) if err.is_not_found() => {
                Err(TaskDomainError::InvalidInventoryId(inventory_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Resolves a domain from its code.
    ///
    /// Codes are matched exactly. The inventory identifier is only consulted
    /// for `CROP`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DomainEmpty`], [`TaskDomainError::InvalidDomain`]
    /// or [`TaskDomainError::InventoryIdRequired`] for bad input, and the
    /// errors of [`TaskDomain::crop`] for crop domains.
    pub async fn from_code<Q>(
        code: &str,
        inventory_id: Option<MaterialId>,
        query: &Q,
    ) -> Result<Self, TaskCreationError>
    where
        Q: TaskQueryService + ?Sized,
    {
        match code {
            "" => Err(TaskDomainError::DomainEmpty.into()),
            "AREA" => Ok(Self::area()),
            "CROP" => {
                let id = inventory_id.ok_or(TaskDomainError::InventoryIdRequired)?;
                Self::crop(query, id).await
            }
            "FINANCE" => Ok(Self::finance()),
            "GENERAL" => Ok(Self::general()),
            "INVENTORY" => Ok(Self::inventory()),
            "RESERVOIR" => Ok(Self::reservoir()),
            _ => Err(TaskDomainError::InvalidDomain(code.to_owned()).into()),
        }
    }

    /// Returns the canonical domain code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Area => "AREA",
            Self::Crop { .. } => "CROP",
            Self::Finance => "FINANCE",
            Self::General => "GENERAL",
            Self::Inventory => "INVENTORY",
            Self::Reservoir => "RESERVOIR",
        }
    }

    /// Returns the registry that resolves assets attached to tasks of this
    /// domain, if there is one.
    #[must_use]
    pub const fn asset_kind(&self) -> Option<AssetKind> {
        match self {
            Self::Area => Some(AssetKind::Area),
            Self::Crop { .. } => Some(AssetKind::Crop),
            Self::Inventory => Some(AssetKind::Material),
            Self::Finance | Self::General | Self::Reservoir => None,
        }
    }

    /// Checks that `asset_id` exists in this domain's registry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidAssetId`] when the asset is unknown
    /// or the domain has no registry, and [`TaskCreationError::Query`] when
    /// the lookup itself fails.
    pub async fn resolve_asset<Q>(
        &self,
        query: &Q,
        asset_id: AssetId,
    ) -> Result<(), TaskCreationError>
    where
        Q: TaskQueryService + ?Sized,
    {
        let Some(kind) = self.asset_kind() else {
            return Err(TaskDomainError::InvalidAssetId(asset_id).into());
        };

        let lookup: Result<(), TaskQueryError> = match kind {
            AssetKind::Area => query.find_area_by_id(asset_id.into()).await.map(|_| ()),
            AssetKind::Crop => query.find_crop_by_id(asset_id.into()).await.map(|_| ()),
            AssetKind::Material => query
                .find_material_by_id(asset_id.into())
                .await
                .map(|_| ()),
        };

        match lookup {
            Ok(()) => Ok(()),
            Err(err) if err.is_not_found() => {
                Err(TaskDomainError::InvalidAssetId(asset_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl fmt::Display for TaskDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
