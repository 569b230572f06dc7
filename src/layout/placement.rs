//! Placement Wizard Builders
//!
//! Structure step: persisted tent structure overlaid with drafted
//! shelf/slot counts. Review step: persisted tray assignments overlaid
//! with drafted moves. Draft capacity is synthesized, never implied by
//! omission; removed capacity is flagged through tent metadata.

use std::collections::HashMap;

use leptos_gridkit::{
    get_draft_or_persisted, is_dirty_value, spec_id, CellState, ChipCorner, ChipSpec, DndSpec,
    EmptySlotOccupant, OccupantSpec, PositionSpec, ShelfSpec, SlotDefOccupant, TentLayoutSpec, TentMeta,
    TentSpec, Tone, TrayOccupant, TrayStackOccupant,
};

use crate::models::{Plant, Tent, Tray};

use super::{plant_occupant, tray_occupant};

/// Persisted slot counts per shelf, positionally indexed, for one tent.
pub fn persisted_shelf_counts(tent: &Tent) -> Vec<u32> {
    tent.shelves.iter().map(|shelf| shelf.slots.len() as u32).collect()
}

/// Structure step (wizard step 1). `draft_counts` maps tent id to drafted
/// slot counts per shelf index; the comparison against the persisted
/// structure is positional per shelf index, so a reordered shelf reads as
/// a resize.
pub fn build_structure_spec(
    experiment_id: &str,
    tents: &[Tent],
    draft_counts: &HashMap<String, Vec<u32>>,
) -> TentLayoutSpec {
    let persisted: HashMap<String, Vec<u32>> =
        tents.iter().map(|tent| (tent.id.clone(), persisted_shelf_counts(tent))).collect();

    let tent_specs = tents
        .iter()
        .map(|tent| {
            let persisted_counts = persisted.get(&tent.id).cloned().unwrap_or_default();
            let effective = get_draft_or_persisted(draft_counts, &persisted, &tent.id, Vec::new());
            let dirty = is_dirty_value(&persisted_counts, &effective);
            let tent_spec_id = spec_id("tent", &[experiment_id, &tent.id]);

            let shelves = effective
                .iter()
                .enumerate()
                .map(|(shelf_idx, &slot_count)| {
                    let shelf_no = (shelf_idx + 1) as u32;
                    let shelf_index = shelf_no.to_string();
                    let shelf_id = spec_id("shelf", &[experiment_id, &tent.id, &shelf_index]);
                    let persisted_slots = persisted_counts.get(shelf_idx).copied().unwrap_or(0);

                    let positions = (1..=slot_count)
                        .map(|slot_no| {
                            let slot_index = slot_no.to_string();
                            let position_id =
                                spec_id("pos", &[experiment_id, &tent.id, &shelf_index, &slot_index]);
                            let occupant = if slot_no <= persisted_slots {
                                let slot_id = tent
                                    .shelves
                                    .get(shelf_idx)
                                    .and_then(|shelf| shelf.slots.get(slot_no as usize - 1))
                                    .map(|slot| slot.id.clone())
                                    .unwrap_or_else(|| {
                                        spec_id("slot", &[experiment_id, &tent.id, &shelf_index, &slot_index])
                                    });
                                OccupantSpec::SlotDef(SlotDefOccupant { slot_id, is_draft: false })
                            } else {
                                // Drafted capacity: synthesize a placeholder entry.
                                OccupantSpec::SlotDef(SlotDefOccupant {
                                    slot_id: spec_id("slot", &[experiment_id, &tent.id, &shelf_index, &slot_index]),
                                    is_draft: true,
                                })
                            };
                            PositionSpec {
                                id: position_id,
                                tent_id: tent_spec_id.clone(),
                                shelf_id: shelf_id.clone(),
                                index: slot_no,
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
                        label: format!("Shelf {shelf_no}"),
                        positions,
                    }
                })
                .collect();

            let removed_slots_in_shelf = persisted_counts
                .iter()
                .enumerate()
                .map(|(shelf_idx, &was)| was.saturating_sub(effective.get(shelf_idx).copied().unwrap_or(0)))
                .collect();

            let chips = if dirty {
                vec![ChipSpec {
                    id: spec_id("chip", &[&tent.id, "draft"]),
                    label: "draft changed".to_string(),
                    tone: Tone::Warning,
                    corner: ChipCorner::TopRight,
                }]
            } else {
                Vec::new()
            };

            TentSpec {
                id: tent_spec_id,
                label: tent.label.clone().unwrap_or_else(|| tent.code.clone()),
                shelves,
                chips,
                state: CellState::default(),
                dnd: None,
                meta: Some(TentMeta {
                    tent_code: Some(tent.code.clone()),
                    selected_tray_ids: Vec::new(),
                    removed_slots_in_shelf,
                }),
            }
        })
        .collect();

    TentLayoutSpec {
        tents: tent_specs,
        meta: Some(serde_json::json!({ "experiment": experiment_id })),
    }
}

/// Persisted tray membership per slot id for one experiment's tents.
pub fn persisted_slot_trays(tents: &[Tent]) -> HashMap<String, Vec<String>> {
    let mut map = HashMap::new();
    for tent in tents {
        for shelf in &tent.shelves {
            for slot in &shelf.slots {
                map.insert(slot.id.clone(), slot.tray_id.iter().cloned().collect());
            }
        }
    }
    map
}

/// Review step (wizard step 4). `draft_slots` maps slot id to the drafted
/// tray ids in that slot; more than one tray renders as a stack until the
/// pending moves are resolved.
pub fn build_review_spec(
    experiment_id: &str,
    tents: &[Tent],
    trays: &[Tray],
    plants: &[Plant],
    draft_slots: &HashMap<String, Vec<String>>,
    selected_tray_ids: &[String],
) -> TentLayoutSpec {
    let persisted = persisted_slot_trays(tents);
    let trays_by_id: HashMap<&str, &Tray> = trays.iter().map(|t| (t.id.as_str(), t)).collect();

    let tent_specs = tents
        .iter()
        .map(|tent| {
            let tent_spec_id = spec_id("tent", &[experiment_id, &tent.id]);
            let mut tent_tray_ids: Vec<String> = Vec::new();

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
                            let position_id =
                                spec_id("pos", &[experiment_id, &tent.id, &shelf_index, &slot_index]);

                            let persisted_here = persisted.get(&slot.id).cloned().unwrap_or_default();
                            let effective =
                                get_draft_or_persisted(draft_slots, &persisted, &slot.id, Vec::new());
                            let dirty = is_dirty_value(&persisted_here, &effective);
                            tent_tray_ids.extend(effective.iter().cloned());

                            let mut occupants: Vec<TrayOccupant> = effective
                                .iter()
                                .map(|tray_id| {
                                    review_tray(tray_id, &trays_by_id, plants, !persisted_here.contains(tray_id))
                                })
                                .collect();

                            let occupant = match occupants.len() {
                                0 => OccupantSpec::EmptySlot(EmptySlotOccupant { is_draft: dirty }),
                                1 => OccupantSpec::Tray(occupants.remove(0)),
                                _ => OccupantSpec::TrayStack(TrayStackOccupant { trays: occupants }),
                            };

                            let selected = effective.iter().any(|id| selected_tray_ids.contains(id));
                            let chips = if selected {
                                vec![ChipSpec {
                                    id: spec_id("chip", &[&slot.id, "selected"]),
                                    label: "selected".to_string(),
                                    tone: Tone::Info,
                                    corner: ChipCorner::TopLeft,
                                }]
                            } else {
                                Vec::new()
                            };

                            let draggable_id = match &occupant {
                                OccupantSpec::Tray(tray) => Some(tray.tray_id.clone()),
                                _ => None,
                            };

                            PositionSpec {
                                id: position_id.clone(),
                                tent_id: tent_spec_id.clone(),
                                shelf_id: shelf_id.clone(),
                                index: slot.index,
                                occupant,
                                label: None,
                                chips,
                                state: CellState {
                                    selected,
                                    ..CellState::default()
                                },
                                dnd: Some(DndSpec {
                                    draggable_id,
                                    droppable_id: Some(slot.id.clone()),
                                    meta: None,
                                }),
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

            let selected_in_tent = selected_tray_ids
                .iter()
                .filter(|id| tent_tray_ids.contains(id))
                .cloned()
                .collect();

            TentSpec {
                id: tent_spec_id,
                label: tent.label.clone().unwrap_or_else(|| tent.code.clone()),
                shelves,
                chips: Vec::new(),
                state: CellState::default(),
                dnd: None,
                meta: Some(TentMeta {
                    tent_code: Some(tent.code.clone()),
                    selected_tray_ids: selected_in_tent,
                    removed_slots_in_shelf: Vec::new(),
                }),
            }
        })
        .collect();

    TentLayoutSpec {
        tents: tent_specs,
        meta: Some(serde_json::json!({ "experiment": experiment_id })),
    }
}

fn review_tray(
    tray_id: &str,
    trays_by_id: &HashMap<&str, &Tray>,
    plants: &[Plant],
    is_draft: bool,
) -> TrayOccupant {
    match trays_by_id.get(tray_id) {
        Some(tray) => {
            let nested = plants
                .iter()
                .filter(|plant| plant.tray_id.as_deref() == Some(tray_id))
                .map(plant_occupant)
                .collect();
            tray_occupant(tray, nested, is_draft)
        }
        // Tray roster out of sync with the draft: keep a visible stand-in.
        None => TrayOccupant {
            tray_id: tray_id.to_string(),
            title: tray_id.to_string(),
            summary: Vec::new(),
            current_count: 0,
            capacity: 0,
            recipe_code: None,
            plants: Vec::new(),
            is_draft: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Shelf, Slot};

    fn make_tent(id: &str, code: &str, slot_counts: &[u32]) -> Tent {
        let shelves = slot_counts
            .iter()
            .enumerate()
            .map(|(shelf_idx, &count)| Shelf {
                id: format!("{id}-s{}", shelf_idx + 1),
                index: (shelf_idx + 1) as u32,
                slots: (1..=count)
                    .map(|slot_no| Slot {
                        id: format!("{id}-s{}-{slot_no}", shelf_idx + 1),
                        index: slot_no,
                        tray_id: None,
                    })
                    .collect(),
            })
            .collect();
        Tent {
            id: id.to_string(),
            experiment_id: "e1".to_string(),
            code: code.to_string(),
            label: None,
            shelves,
        }
    }

    fn make_tray(id: &str) -> Tray {
        Tray {
            id: id.to_string(),
            code: id.to_uppercase(),
            label: None,
            capacity: 6,
            plant_ids: Vec::new(),
            recipe_code: None,
        }
    }

    #[test]
    fn test_structure_without_draft_mirrors_persisted() {
        let tents = vec![make_tent("t1", "T1", &[2, 3])];
        let spec = build_structure_spec("e1", &tents, &HashMap::new());

        assert!(spec.validate().is_ok());
        assert_eq!(spec.positions().count(), 5);
        assert!(spec.positions().all(|p| !p.occupant.is_draft()));
        assert!(spec.tents[0].chips.is_empty());
        let meta = spec.tents[0].meta.as_ref().unwrap();
        assert_eq!(meta.removed_slots_in_shelf, vec![0, 0]);
    }

    #[test]
    fn test_structure_draft_synthesizes_added_slots() {
        let tents = vec![make_tent("t1", "T1", &[2, 3])];
        let draft = HashMap::from([("t1".to_string(), vec![4, 3])]);
        let spec = build_structure_spec("e1", &tents, &draft);

        let shelf = &spec.tents[0].shelves[0];
        assert_eq!(shelf.positions.len(), 4);
        let drafted: Vec<u32> = shelf
            .positions
            .iter()
            .filter(|p| p.occupant.is_draft())
            .map(|p| p.index)
            .collect();
        assert_eq!(drafted, vec![3, 4]);
        // The pending change is surfaced on the tent.
        assert_eq!(spec.tents[0].chips.len(), 1);
        assert_eq!(spec.tents[0].chips[0].label, "draft changed");
    }

    #[test]
    fn test_structure_draft_flags_removed_capacity() {
        let tents = vec![make_tent("t1", "T1", &[2, 3])];
        let draft = HashMap::from([("t1".to_string(), vec![2, 1])]);
        let spec = build_structure_spec("e1", &tents, &draft);

        // Shrunk shelf renders the drafted count; the removal is metadata.
        assert_eq!(spec.tents[0].shelves[1].positions.len(), 1);
        let meta = spec.tents[0].meta.as_ref().unwrap();
        assert_eq!(meta.removed_slots_in_shelf, vec![0, 2]);
    }

    #[test]
    fn test_structure_draft_can_add_whole_shelf() {
        let tents = vec![make_tent("t1", "T1", &[2])];
        let draft = HashMap::from([("t1".to_string(), vec![2, 2])]);
        let spec = build_structure_spec("e1", &tents, &draft);

        assert_eq!(spec.tents[0].shelves.len(), 2);
        let added = &spec.tents[0].shelves[1];
        assert!(added.positions.iter().all(|p| p.occupant.is_draft()));
        let meta = spec.tents[0].meta.as_ref().unwrap();
        assert_eq!(meta.removed_slots_in_shelf, vec![0]);
    }

    #[test]
    fn test_review_draft_overlay_wins_and_flags_draft() {
        let mut tents = vec![make_tent("t1", "T1", &[2])];
        tents[0].shelves[0].slots[0].tray_id = Some("tr1".to_string());
        let trays = vec![make_tray("tr1"), make_tray("tr2")];

        // Drafted move: tr2 lands next to tr1; second slot drafted empty.
        let draft = HashMap::from([
            ("t1-s1-1".to_string(), vec!["tr1".to_string(), "tr2".to_string()]),
        ]);
        let spec = build_review_spec("e1", &tents, &trays, &[], &draft, &[]);

        let first = &spec.tents[0].shelves[0].positions[0];
        match &first.occupant {
            OccupantSpec::TrayStack(stack) => {
                assert_eq!(stack.trays.len(), 2);
                assert!(!stack.trays[0].is_draft);
                assert!(stack.trays[1].is_draft);
            }
            other => panic!("expected stack, got {other:?}"),
        }

        let second = &spec.tents[0].shelves[0].positions[1];
        assert!(matches!(&second.occupant, OccupantSpec::EmptySlot(slot) if !slot.is_draft));
    }

    #[test]
    fn test_review_drafted_unassign_marks_empty_slot() {
        let mut tents = vec![make_tent("t1", "T1", &[1])];
        tents[0].shelves[0].slots[0].tray_id = Some("tr1".to_string());
        let trays = vec![make_tray("tr1")];

        let draft = HashMap::from([("t1-s1-1".to_string(), Vec::new())]);
        let spec = build_review_spec("e1", &tents, &trays, &[], &draft, &[]);

        let position = &spec.tents[0].shelves[0].positions[0];
        assert!(matches!(&position.occupant, OccupantSpec::EmptySlot(slot) if slot.is_draft));
    }

    #[test]
    fn test_review_selection_chips_and_dnd_addressing() {
        let mut tents = vec![make_tent("t1", "T1", &[2])];
        tents[0].shelves[0].slots[0].tray_id = Some("tr1".to_string());
        let trays = vec![make_tray("tr1")];
        let selected = vec!["tr1".to_string()];

        let spec = build_review_spec("e1", &tents, &trays, &[], &HashMap::new(), &selected);
        let position = &spec.tents[0].shelves[0].positions[0];

        assert!(position.state.selected);
        assert_eq!(position.chips.len(), 1);
        assert_eq!(position.chips[0].label, "selected");

        let dnd = position.dnd.as_ref().unwrap();
        assert_eq!(dnd.draggable_id.as_deref(), Some("tr1"));
        assert_eq!(dnd.droppable_id.as_deref(), Some("t1-s1-1"));

        let meta = spec.tents[0].meta.as_ref().unwrap();
        assert_eq!(meta.selected_tray_ids, vec!["tr1".to_string()]);
    }

    #[test]
    fn test_review_is_deterministic() {
        let mut tents = vec![make_tent("t1", "T1", &[2])];
        tents[0].shelves[0].slots[1].tray_id = Some("tr1".to_string());
        let trays = vec![make_tray("tr1")];
        let draft = HashMap::from([("t1-s1-1".to_string(), vec!["tr1".to_string()])]);

        let first = build_review_spec("e1", &tents, &trays, &[], &draft, &[]);
        let second = build_review_spec("e1", &tents, &trays, &[], &draft, &[]);
        assert_eq!(first, second);
        assert!(first.validate().is_ok());
    }
}
