//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload data from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload data from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Currently selected experiment - read
    pub current_experiment: ReadSignal<Option<String>>,
    /// Currently selected plant (baseline panel) - read
    pub selected_plant: ReadSignal<Option<String>>,
    set_selected_plant: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_experiment: ReadSignal<Option<String>>,
        selected_plant: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_experiment,
            selected_plant: selected_plant.0,
            set_selected_plant: selected_plant.1,
        }
    }

    /// Trigger a reload of backend data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Select a plant for the baseline panel
    pub fn select_plant(&self, plant_id: Option<String>) {
        self.set_selected_plant.set(plant_id);
    }
}
