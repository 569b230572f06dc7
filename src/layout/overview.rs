//! Overview Builder
//!
//! Maps the persisted layout plus the plant roster into the overview
//! page's `TentLayoutSpec`. Tent/shelf/slot order follows the backend;
//! plants are ordered placed-before-unplaced, then by tent code, tray
//! code and plant id (case-insensitive).

use std::collections::HashMap;

use leptos_gridkit::{
    spec_id, CellState, EmptySlotOccupant, OccupantSpec, PositionSpec, ShelfSpec, TentLayoutSpec, TentMeta,
    TentSpec, TrayOccupant,
};

use crate::models::{Plant, PlantStatus, Tent, Tray};

use super::{plant_occupant, tray_occupant};

/// Tray id -> owning tent code, resolved through the slot assignments.
fn tent_code_by_tray(tents: &[Tent]) -> HashMap<String, String> {
    let mut index = HashMap::new();
    for tent in tents {
        for shelf in &tent.shelves {
            for slot in &shelf.slots {
                if let Some(tray_id) = &slot.tray_id {
                    index.insert(tray_id.clone(), tent.code.clone());
                }
            }
        }
    }
    index
}

fn placement_rank(status: PlantStatus) -> u8 {
    match status {
        PlantStatus::Placed => 0,
        PlantStatus::Unplaced => 1,
        PlantStatus::Harvested => 2,
    }
}

/// The canonical plant ordering shared by the overview grid and the tray
/// folders: placed before unplaced, then tent code, tray code, plant id,
/// all compared case-insensitively.
pub fn ordered_plant_roster(plants: &[Plant], tents: &[Tent], trays: &[Tray]) -> Vec<Plant> {
    let tent_codes = tent_code_by_tray(tents);
    let tray_codes: HashMap<&str, &str> = trays.iter().map(|t| (t.id.as_str(), t.code.as_str())).collect();

    let mut roster: Vec<Plant> = plants.to_vec();
    roster.sort_by_key(|plant| {
        let tent_code = plant
            .tray_id
            .as_deref()
            .and_then(|tray_id| tent_codes.get(tray_id))
            .map(|code| code.to_lowercase())
            .unwrap_or_default();
        let tray_code = plant
            .tray_id
            .as_deref()
            .and_then(|tray_id| tray_codes.get(tray_id))
            .map(|code| code.to_lowercase())
            .unwrap_or_default();
        (placement_rank(plant.status), tent_code, tray_code, plant.id.to_lowercase())
    });
    roster
}

/// Distinct-strain summary lines for a tray cell, e.g. `2x Blue Haze`.
fn strain_summary(plants: &[Plant]) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for plant in plants {
        let strain = plant.strain.clone().unwrap_or_else(|| "unknown".to_string());
        match counts.iter_mut().find(|(name, _)| *name == strain) {
            Some((_, count)) => *count += 1,
            None => counts.push((strain, 1)),
        }
    }
    counts.into_iter().map(|(name, count)| format!("{count}x {name}")).collect()
}

pub fn build_overview_spec(
    experiment_id: &str,
    tents: &[Tent],
    trays: &[Tray],
    plants: &[Plant],
) -> TentLayoutSpec {
    let roster = ordered_plant_roster(plants, tents, trays);
    let trays_by_id: HashMap<&str, &Tray> = trays.iter().map(|t| (t.id.as_str(), t)).collect();

    let tent_specs = tents
        .iter()
        .map(|tent| {
            let shelves = tent
                .shelves
                .iter()
                .map(|shelf| {
                    let shelf_index = shelf.index.to_string();
                    let shelf_id = spec_id("shelf", &[experiment_id, &tent.id, &shelf_index]);
                    let positions = shelf
                        .slots
                        .iter()
                        .map(|slot| {
                            let slot_index = slot.index.to_string();
                            let occupant = match slot.tray_id.as_deref().and_then(|id| trays_by_id.get(id)) {
                                Some(tray) => OccupantSpec::Tray(overview_tray(tray, &roster)),
                                // Unassigned or unknown tray id: keep the grid shape.
                                None => OccupantSpec::EmptySlot(EmptySlotOccupant::default()),
                            };
                            PositionSpec {
                                id: spec_id("pos", &[experiment_id, &tent.id, &shelf_index, &slot_index]),
                                tent_id: spec_id("tent", &[experiment_id, &tent.id]),
                                shelf_id: shelf_id.clone(),
                                index: slot.index,
                                occupant,
                                label: None,
                                chips: Vec::new(),
                                state: CellState::default(),
                                dnd: None,
                            }
                        })
                        .collect();
                    ShelfSpec {
                        id: shelf_id,
                        label: format!("Shelf {}", shelf.index),
                        positions,
                    }
                })
                .collect();

            TentSpec {
                id: spec_id("tent", &[experiment_id, &tent.id]),
                label: tent.label.clone().unwrap_or_else(|| tent.code.clone()),
                shelves,
                chips: Vec::new(),
                state: CellState::default(),
                dnd: None,
                meta: Some(TentMeta {
                    tent_code: Some(tent.code.clone()),
                    ..TentMeta::default()
                }),
            }
        })
        .collect();

    TentLayoutSpec {
        tents: tent_specs,
        meta: Some(serde_json::json!({ "experiment": experiment_id })),
    }
}

fn overview_tray(tray: &Tray, roster: &[Plant]) -> TrayOccupant {
    let members: Vec<Plant> = roster
        .iter()
        .filter(|plant| plant.tray_id.as_deref() == Some(tray.id.as_str()))
        .cloned()
        .collect();
    let nested = members.iter().map(plant_occupant).collect();
    let mut occupant = tray_occupant(tray, nested, false);
    occupant.summary = strain_summary(&members);
    occupant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shelf, Slot};

    fn make_tent(id: &str, code: &str, shelves: Vec<Shelf>) -> Tent {
        Tent {
            id: id.to_string(),
            experiment_id: "e1".to_string(),
            code: code.to_string(),
            label: None,
            shelves,
        }
    }

    fn make_shelf(id: &str, index: u32, slots: Vec<Slot>) -> Shelf {
        Shelf {
            id: id.to_string(),
            index,
            slots,
        }
    }

    fn make_slot(id: &str, index: u32, tray_id: Option<&str>) -> Slot {
        Slot {
            id: id.to_string(),
            index,
            tray_id: tray_id.map(str::to_string),
        }
    }

    fn make_tray(id: &str, code: &str, plant_ids: &[&str]) -> Tray {
        Tray {
            id: id.to_string(),
            code: code.to_string(),
            label: None,
            capacity: 6,
            plant_ids: plant_ids.iter().map(|s| s.to_string()).collect(),
            recipe_code: None,
        }
    }

    fn make_plant(id: &str, status: PlantStatus, tray_id: Option<&str>) -> Plant {
        Plant {
            id: id.to_string(),
            code: id.to_string(),
            strain: None,
            status,
            grade: None,
            recipe_code: None,
            tray_id: tray_id.map(str::to_string),
        }
    }

    fn fixture() -> (Vec<Tent>, Vec<Tray>, Vec<Plant>) {
        let tents = vec![
            make_tent(
                "t2",
                "T2",
                vec![make_shelf("s21", 1, vec![make_slot("sl21", 1, Some("tr2")), make_slot("sl22", 2, None)])],
            ),
            make_tent("t1", "T1", vec![make_shelf("s11", 1, vec![make_slot("sl11", 1, Some("tr1"))])]),
        ];
        let trays = vec![make_tray("tr1", "A-1", &["P3"]), make_tray("tr2", "B-1", &["P1"])];
        let plants = vec![
            make_plant("P1", PlantStatus::Placed, Some("tr2")),
            make_plant("P2", PlantStatus::Unplaced, None),
            make_plant("P3", PlantStatus::Placed, Some("tr1")),
        ];
        (tents, trays, plants)
    }

    #[test]
    fn test_roster_orders_placed_by_tent_then_unplaced() {
        let (tents, trays, plants) = fixture();
        let roster = ordered_plant_roster(&plants, &tents, &trays);
        let order: Vec<&str> = roster.iter().map(|p| p.id.as_str()).collect();
        // P3 sits in tent T1, P1 in T2, P2 is unplaced.
        assert_eq!(order, vec!["P3", "P1", "P2"]);
    }

    #[test]
    fn test_roster_ordering_is_case_insensitive() {
        let tents = vec![
            make_tent("ta", "a2", vec![make_shelf("sa", 1, vec![make_slot("xa", 1, Some("tr1"))])]),
            make_tent("tb", "A1", vec![make_shelf("sb", 1, vec![make_slot("xb", 1, Some("tr2"))])]),
        ];
        let trays = vec![make_tray("tr1", "c", &[]), make_tray("tr2", "C", &[])];
        let plants = vec![
            make_plant("p1", PlantStatus::Placed, Some("tr1")),
            make_plant("p2", PlantStatus::Placed, Some("tr2")),
        ];
        let roster = ordered_plant_roster(&plants, &tents, &trays);
        // "A1" < "a2" once lowercased.
        assert_eq!(roster[0].id, "p2");
        assert_eq!(roster[1].id, "p1");
    }

    #[test]
    fn test_one_position_per_slot_including_empty() {
        let (tents, trays, plants) = fixture();
        let spec = build_overview_spec("e1", &tents, &trays, &plants);
        assert!(spec.validate().is_ok());

        let total_slots: usize = tents.iter().flat_map(|t| &t.shelves).map(|s| s.slots.len()).sum();
        assert_eq!(spec.positions().count(), total_slots);

        // The unassigned slot is present as an empty occupant, not omitted.
        let empty = spec
            .positions()
            .filter(|p| matches!(p.occupant, OccupantSpec::EmptySlot(_)))
            .count();
        assert_eq!(empty, 1);
    }

    #[test]
    fn test_tray_cells_carry_nested_plants() {
        let (tents, trays, plants) = fixture();
        let spec = build_overview_spec("e1", &tents, &trays, &plants);
        let tray_cell = spec
            .positions()
            .find_map(|p| match &p.occupant {
                OccupantSpec::Tray(tray) if tray.tray_id == "tr2" => Some(tray.clone()),
                _ => None,
            })
            .expect("tray tr2 rendered");
        assert_eq!(tray_cell.current_count, 1);
        assert_eq!(tray_cell.plants.len(), 1);
        assert_eq!(tray_cell.plants[0].plant_id, "P1");
    }

    #[test]
    fn test_builder_is_deterministic() {
        let (tents, trays, plants) = fixture();
        let first = build_overview_spec("e1", &tents, &trays, &plants);
        let second = build_overview_spec("e1", &tents, &trays, &plants);
        assert_eq!(first, second);

        let ids: Vec<&str> = first.positions().map(|p| p.id.as_str()).collect();
        let ids_again: Vec<&str> = second.positions().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ids_again);
        assert!(ids.contains(&"pos:e1:t2:1:2"));
    }
}
