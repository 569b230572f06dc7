//! Layout Commands
//!
//! Frontend bindings for tent/shelf/slot structure endpoints.

use serde::Serialize;

use super::{encode, get_json, post_json, put_json};
use crate::models::Tent;

#[derive(Serialize)]
pub struct CreateTentArgs<'a> {
    #[serde(rename = "experimentId")]
    pub experiment_id: &'a str,
    pub code: &'a str,
    pub label: Option<&'a str>,
}

/// One shelf's slot count in a structure save, positional per shelf index.
#[derive(Serialize)]
pub struct ShelfStructureArgs {
    #[serde(rename = "shelfIndex")]
    pub shelf_index: u32,
    #[serde(rename = "slotCount")]
    pub slot_count: u32,
}

#[derive(Serialize)]
struct SaveStructureArgs {
    shelves: Vec<ShelfStructureArgs>,
}

#[derive(Serialize)]
struct AssignTrayArgs<'a> {
    #[serde(rename = "trayId")]
    tray_id: Option<&'a str>,
}

/// Full persisted layout for an experiment: tents with shelves and slots.
pub async fn list_tents(experiment_id: &str) -> Result<Vec<Tent>, String> {
    get_json(&format!("/tents?experiment={}", encode(experiment_id))).await
}

pub async fn create_tent(args: &CreateTentArgs<'_>) -> Result<Tent, String> {
    post_json("/tents", args).await
}

/// Replaces a tent's shelf/slot structure with the drafted counts.
pub async fn save_tent_structure(tent_id: &str, shelves: Vec<ShelfStructureArgs>) -> Result<Tent, String> {
    put_json(&format!("/tents/{}/structure", encode(tent_id)), &SaveStructureArgs { shelves }).await
}

/// Puts a tray into a slot, or clears the slot when `tray_id` is `None`.
pub async fn assign_tray_to_slot(slot_id: &str, tray_id: Option<&str>) -> Result<(), String> {
    let _: serde_json::Value =
        put_json(&format!("/slots/{}/tray", encode(slot_id)), &AssignTrayArgs { tray_id }).await?;
    Ok(())
}
