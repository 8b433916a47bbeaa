//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Farm, farm};
use chrono::{Duration, Utc};
use eyre::ensure;
use fieldwork::task::{
    domain::{AssetId, TaskDomain, TaskDomainError, TaskStatus},
    ports::TaskRepository,
    services::{ChangeTaskStatusRequest, CreateTaskRequest, TaskLifecycleError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn crop_task_is_created_and_stored(farm: Farm) -> eyre::Result<()> {
    let inventory_id = farm.add_material("Foliar feed")?;
    let crop_id = farm.add_crop("TOM-2024-05")?;
    let request = CreateTaskRequest::new("My Task", "URGENT", "CROP", "SANITATION")
        .with_description("My Description")
        .with_due_date(Utc::now() + Duration::days(365))
        .with_inventory_id(inventory_id)
        .with_asset_id(AssetId::from_uuid(crop_id.into_inner()));

    let created = farm.service.create_task(request).await?;
    let stored = farm.repository.find_by_id(created.uid()).await?;

    ensure!(created.status() == TaskStatus::Created);
    ensure!(created.domain() == &TaskDomain::Crop { inventory_id });
    ensure!(stored == Some(created));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn area_task_binds_to_registered_area(farm: Farm) -> eyre::Result<()> {
    let area_id = farm.add_area("Greenhouse 1")?;
    let asset_id = AssetId::from_uuid(area_id.into_inner());
    let request =
        CreateTaskRequest::new("Sweep floor", "NORMAL", "AREA", "AREA").with_asset_id(asset_id);

    let created = farm.service.create_task(request).await?;

    ensure!(created.asset_id() == Some(asset_id));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_creation_stores_nothing(farm: Farm) -> eyre::Result<()> {
    let request = CreateTaskRequest::new("Late task", "NORMAL", "GENERAL", "GENERAL")
        .with_due_date(Utc::now() - Duration::days(1));

    let result = farm.service.create_task(request).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::DueDateInvalid))
    ));
    ensure!(farm.service.find_all().await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finance_task_rejects_asset_reference(farm: Farm) -> eyre::Result<()> {
    let area_id = farm.add_area("Office")?;
    let asset_id = AssetId::from_uuid(area_id.into_inner());
    let request = CreateTaskRequest::new("Pay invoices", "NORMAL", "FINANCE", "FINANCE")
        .with_asset_id(asset_id);

    let result = farm.service.create_task(request).await;

    ensure!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::InvalidAssetId(id))) if id == asset_id
    ));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_changes_are_persisted(farm: Farm) -> eyre::Result<()> {
    let task = farm
        .service
        .create_task(CreateTaskRequest::new(
            "Top up reservoir",
            "URGENT",
            "RESERVOIR",
            "WATERING",
        ))
        .await?;

    farm.service
        .change_status(ChangeTaskStatusRequest::new(task.uid(), "DUE"))
        .await?;
    farm.service.cancel_task(task.uid()).await?;

    let stored = farm.repository.find_by_id(task.uid()).await?;
    ensure!(stored.map(|t| t.status()) == Some(TaskStatus::Cancelled));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_stays_completed(farm: Farm) -> eyre::Result<()> {
    let task = farm
        .service
        .create_task(CreateTaskRequest::new(
            "Count stock",
            "NORMAL",
            "INVENTORY",
            "INVENTORY",
        ))
        .await?;
    farm.service.complete_task(task.uid()).await?;

    for status in ["CREATED", "DUE", "CANCELLED", "COMPLETED"] {
        let result = farm
            .service
            .change_status(ChangeTaskStatusRequest::new(task.uid(), status))
            .await;
        ensure!(
            result.as_ref().is_err_and(TaskLifecycleError::is_client_error),
            "expected {status} to be rejected, got {result:?}"
        );
    }

    let stored = farm.repository.find_by_id(task.uid()).await?;
    ensure!(stored.map(|t| t.status()) == Some(TaskStatus::Completed));
    Ok(())
}
