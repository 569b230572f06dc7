//! Journal Commands
//!
//! Frontend bindings for baseline and rotation endpoints.

use serde::Serialize;

use super::{encode, get_json, post_json};
use crate::models::{Baseline, Rotation};

#[derive(Serialize)]
pub struct CreateBaselineArgs<'a> {
    #[serde(rename = "plantId")]
    pub plant_id: &'a str,
    #[serde(rename = "heightMm")]
    pub height_mm: u32,
    #[serde(rename = "nodeCount")]
    pub node_count: u32,
    pub notes: Option<&'a str>,
}

#[derive(Serialize)]
pub struct CreateRotationArgs<'a> {
    #[serde(rename = "trayId")]
    pub tray_id: &'a str,
    #[serde(rename = "quarterTurns")]
    pub quarter_turns: u32,
    pub operator: Option<&'a str>,
}

pub async fn list_baselines(plant_id: &str) -> Result<Vec<Baseline>, String> {
    get_json(&format!("/baselines?plant={}", encode(plant_id))).await
}

pub async fn create_baseline(args: &CreateBaselineArgs<'_>) -> Result<Baseline, String> {
    post_json("/baselines", args).await
}

pub async fn list_rotations(experiment_id: &str) -> Result<Vec<Rotation>, String> {
    get_json(&format!("/rotations?experiment={}", encode(experiment_id))).await
}

pub async fn create_rotation(args: &CreateRotationArgs<'_>) -> Result<Rotation, String> {
    post_json("/rotations", args).await
}
