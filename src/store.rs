//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Experiment, Plant, Recipe, Tent, Tray};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All experiments
    pub experiments: Vec<Experiment>,
    /// Tents (with shelves and slots) of the current experiment
    pub tents: Vec<Tent>,
    /// Trays of the current experiment
    pub trays: Vec<Tray>,
    /// Plants of the current experiment
    pub plants: Vec<Plant>,
    /// All recipes
    pub recipes: Vec<Recipe>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an experiment to the store
pub fn store_add_experiment(store: &AppStore, experiment: Experiment) {
    store.experiments().write().push(experiment);
}

/// Update a tray in the store by ID
pub fn store_update_tray(store: &AppStore, updated_tray: Tray) {
    store
        .trays()
        .write()
        .iter_mut()
        .find(|tray| tray.id == updated_tray.id)
        .map(|tray| *tray = updated_tray);
}

/// Remove a tray from the store by ID
pub fn store_remove_tray(store: &AppStore, tray_id: &str) {
    store.trays().write().retain(|tray| tray.id != tray_id);
}

/// Update a plant in the store by ID
pub fn store_update_plant(store: &AppStore, updated_plant: Plant) {
    store
        .plants()
        .write()
        .iter_mut()
        .find(|plant| plant.id == updated_plant.id)
        .map(|plant| *plant = updated_plant);
}
