//! Given steps for task creation BDD scenarios.

use super::world::TaskCreationWorld;
use fieldwork::task::{
    domain::{CropId, MaterialId},
    ports::{CropSummary, MaterialSummary},
};
use rstest_bdd_macros::given;
use uuid::Uuid;

#[given(r#"a registered material "{name}""#)]
fn registered_material(world: &mut TaskCreationWorld, name: String) -> Result<(), eyre::Report> {
    let uid = MaterialId::from_uuid(Uuid::new_v4());
    world.materials.insert(MaterialSummary { uid, name })?;
    world.material_id = Some(uid);
    Ok(())
}

#[given(r#"a registered crop batch "{batch_id}""#)]
fn registered_crop(world: &mut TaskCreationWorld, batch_id: String) -> Result<(), eyre::Report> {
    let uid = CropId::from_uuid(Uuid::new_v4());
    world.crops.insert(CropSummary { uid, batch_id })?;
    world.crop_id = Some(uid);
    Ok(())
}
