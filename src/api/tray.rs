//! Tray Commands
//!
//! Frontend bindings for tray endpoints.

use serde::Serialize;

use super::{delete, encode, get_json, post_json, put_json};
use crate::models::Tray;

#[derive(Serialize)]
pub struct CreateTrayArgs<'a> {
    #[serde(rename = "experimentId")]
    pub experiment_id: &'a str,
    pub code: &'a str,
    pub label: Option<&'a str>,
    pub capacity: u32,
}

#[derive(Serialize)]
struct UpdateTrayArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    capacity: Option<u32>,
}

#[derive(Serialize)]
struct AssignRecipeArgs<'a> {
    #[serde(rename = "recipeCode")]
    recipe_code: Option<&'a str>,
}

pub async fn list_trays(experiment_id: &str) -> Result<Vec<Tray>, String> {
    get_json(&format!("/trays?experiment={}", encode(experiment_id))).await
}

pub async fn create_tray(args: &CreateTrayArgs<'_>) -> Result<Tray, String> {
    post_json("/trays", args).await
}

pub async fn update_tray(id: &str, label: Option<&str>, capacity: Option<u32>) -> Result<Tray, String> {
    put_json(&format!("/trays/{}", encode(id)), &UpdateTrayArgs { label, capacity }).await
}

pub async fn delete_tray(id: &str) -> Result<(), String> {
    delete(&format!("/trays/{}", encode(id))).await
}

/// Assigns or clears the tray's feeding recipe.
pub async fn assign_recipe(tray_id: &str, recipe_code: Option<&str>) -> Result<Tray, String> {
    put_json(&format!("/trays/{}/recipe", encode(tray_id)), &AssignRecipeArgs { recipe_code }).await
}
