//! Plant Commands
//!
//! Frontend bindings for plant endpoints.

use serde::Serialize;

use super::{encode, get_json, post_json, put_json};
use crate::models::Plant;

#[derive(Serialize)]
pub struct CreatePlantArgs<'a> {
    #[serde(rename = "experimentId")]
    pub experiment_id: &'a str,
    pub code: &'a str,
    pub strain: Option<&'a str>,
}

#[derive(Serialize)]
struct AssignTrayArgs<'a> {
    #[serde(rename = "trayId")]
    tray_id: Option<&'a str>,
}

#[derive(Serialize)]
struct SetGradeArgs<'a> {
    grade: Option<&'a str>,
}

pub async fn list_plants(experiment_id: &str) -> Result<Vec<Plant>, String> {
    get_json(&format!("/plants?experiment={}", encode(experiment_id))).await
}

pub async fn create_plant(args: &CreatePlantArgs<'_>) -> Result<Plant, String> {
    post_json("/plants", args).await
}

/// Moves the plant into a tray, or back to the unplaced roster with `None`.
pub async fn assign_plant_to_tray(plant_id: &str, tray_id: Option<&str>) -> Result<Plant, String> {
    put_json(&format!("/plants/{}/tray", encode(plant_id)), &AssignTrayArgs { tray_id }).await
}

pub async fn set_plant_grade(plant_id: &str, grade: Option<&str>) -> Result<Plant, String> {
    put_json(&format!("/plants/{}/grade", encode(plant_id)), &SetGradeArgs { grade }).await
}
