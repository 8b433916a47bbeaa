//! Asset lookups through the in-memory query facade.

use super::helpers::{Farm, farm};
use eyre::ensure;
use fieldwork::task::{
    domain::{AreaId, CropId, MaterialId},
    ports::{AssetKind, TaskQueryError, TaskQueryService},
};
use rstest::rstest;
use uuid::Uuid;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn registered_assets_are_found(farm: Farm) -> eyre::Result<()> {
    let area_id = farm.add_area("Greenhouse 2")?;
    let crop_id = farm.add_crop("BAS-2024-11")?;
    let material_id = farm.add_material("Neem oil")?;
    let query = farm.query();

    let area = query.find_area_by_id(area_id).await?;
    let crop = query.find_crop_by_id(crop_id).await?;
    let material = query.find_material_by_id(material_id).await?;

    ensure!(area.name == "Greenhouse 2");
    ensure!(crop.batch_id == "BAS-2024-11");
    ensure!(material.uid == material_id);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_assets_report_kind_and_id(farm: Farm) {
    let query = farm.query();
    let crop_uuid = Uuid::new_v4();

    let result = query.find_crop_by_id(CropId::from_uuid(crop_uuid)).await;

    assert!(matches!(
        result,
        Err(TaskQueryError::NotFound { kind: AssetKind::Crop, id }) if id == crop_uuid
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookups_are_scoped_to_their_registry(farm: Farm) -> eyre::Result<()> {
    let area_id = farm.add_area("Nursery")?;
    let query = farm.query();

    let as_material = query
        .find_material_by_id(MaterialId::from_uuid(area_id.into_inner()))
        .await;
    let as_area = query.find_area_by_id(AreaId::from_uuid(area_id.into_inner())).await;

    ensure!(as_material.as_ref().is_err_and(TaskQueryError::is_not_found));
    ensure!(as_area.is_ok());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn removed_asset_is_no_longer_found(farm: Farm) -> eyre::Result<()> {
    let material_id = farm.add_material("Copper fungicide")?;
    farm.materials.remove(material_id)?;

    let result = farm.query().find_material_by_id(material_id).await;

    ensure!(result.is_err_and(|err| err.is_not_found()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lookup_envelope_can_be_awaited_repeatedly(farm: Farm) -> eyre::Result<()> {
    let area_id = farm.add_area("Orchard")?;
    let mut envelope = farm.query().find_area_by_id(area_id);

    let first = envelope.wait().await?;
    let second = envelope.wait().await?;

    ensure!(first == second);
    ensure!(envelope.is_resolved());
    Ok(())
}
