//! Layout Spec Builders
//!
//! Pure mappings from backend data (plus wizard draft state) to the
//! GridKit `TentLayoutSpec`. One builder per source shape; builders never
//! mutate their inputs and never fail on missing optional fields.

mod overview;
mod placement;

pub use overview::{build_overview_spec, ordered_plant_roster};
pub use placement::{build_review_spec, build_structure_spec, persisted_shelf_counts, persisted_slot_trays};

use leptos_gridkit::{PlantOccupant, TrayOccupant};

use crate::models::{Plant, Tray};

pub(crate) fn plant_occupant(plant: &Plant) -> PlantOccupant {
    PlantOccupant {
        plant_id: plant.id.clone(),
        title: plant.code.clone(),
        subtitle: plant.strain.clone(),
        status: Some(plant.status.as_str().to_string()),
        grade: plant.grade.clone(),
        recipe_code: plant.recipe_code.clone(),
        is_draft: false,
    }
}

pub(crate) fn tray_occupant(tray: &Tray, nested: Vec<PlantOccupant>, is_draft: bool) -> TrayOccupant {
    TrayOccupant {
        tray_id: tray.id.clone(),
        title: tray.label.clone().unwrap_or_else(|| tray.code.clone()),
        summary: Vec::new(),
        current_count: tray.plant_ids.len() as u32,
        capacity: tray.capacity,
        recipe_code: tray.recipe_code.clone(),
        plants: nested,
        is_draft,
    }
}
