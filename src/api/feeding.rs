//! Feeding Commands
//!
//! Frontend bindings for feeding-schedule endpoints.

use serde::Serialize;

use super::{encode, get_json, post_json, put_json};
use crate::models::{FeedingAction, FeedingStatus};

#[derive(Serialize)]
pub struct ScheduleFeedingArgs<'a> {
    #[serde(rename = "experimentId")]
    pub experiment_id: &'a str,
    #[serde(rename = "recipeCode")]
    pub recipe_code: Option<&'a str>,
    #[serde(rename = "scheduledFor")]
    pub scheduled_for: &'a str,
    pub solution: Option<&'a str>,
    #[serde(rename = "volumeMl")]
    pub volume_ml: u32,
}

#[derive(Serialize)]
struct SetStatusArgs {
    status: FeedingStatus,
}

pub async fn list_feeding_actions(experiment_id: &str) -> Result<Vec<FeedingAction>, String> {
    get_json(&format!("/feedings?experiment={}", encode(experiment_id))).await
}

pub async fn schedule_feeding(args: &ScheduleFeedingArgs<'_>) -> Result<FeedingAction, String> {
    post_json("/feedings", args).await
}

pub async fn set_feeding_status(id: &str, status: FeedingStatus) -> Result<FeedingAction, String> {
    put_json(&format!("/feedings/{}/status", encode(id)), &SetStatusArgs { status }).await
}
