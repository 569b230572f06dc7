//! Experiment Commands
//!
//! Frontend bindings for experiment-related backend endpoints.

use serde::Serialize;

use super::{get_json, post_json};
use crate::models::Experiment;

#[derive(Serialize)]
pub struct CreateExperimentArgs<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

pub async fn list_experiments() -> Result<Vec<Experiment>, String> {
    get_json("/experiments").await
}

pub async fn create_experiment(args: &CreateExperimentArgs<'_>) -> Result<Experiment, String> {
    post_json("/experiments", args).await
}

pub async fn close_experiment(id: &str) -> Result<Experiment, String> {
    post_json(&format!("/experiments/{}/close", super::encode(id)), &()).await
}
