//! Recipe Commands
//!
//! Frontend bindings for recipe endpoints.

use super::get_json;
use crate::models::Recipe;

pub async fn list_recipes() -> Result<Vec<Recipe>, String> {
    get_json("/recipes").await
}
