//! Layout Spec Model
//!
//! Serializable tree describing a tent layout: tents, shelves, positions,
//! occupants. Builders produce a fresh spec from backend data on every
//! render pass; the rendering side treats it as read-only.

use serde::{Deserialize, Serialize};

/// Occupant variants a position can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OccupantKind {
    Tray,
    TrayStack,
    EmptySlot,
    SlotDef,
    Plant,
}

/// Visual tone for chips and cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// CSS class suffix for this tone.
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Info => "info",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
        }
    }
}

/// Corner a chip is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChipCorner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ChipCorner {
    pub fn class(&self) -> &'static str {
        match self {
            ChipCorner::TopLeft => "top-left",
            ChipCorner::TopRight => "top-right",
            ChipCorner::BottomLeft => "bottom-left",
            ChipCorner::BottomRight => "bottom-right",
        }
    }
}

/// Small annotated badge attached to a tent, shelf, position or occupant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub tone: Tone,
    pub corner: ChipCorner,
}

/// Visual/interaction state of a cell. Not business state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellState {
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub tone: Tone,
}

/// Drag-and-drop addressing. Pure data; activation lives in page code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DndSpec {
    #[serde(default)]
    pub draggable_id: Option<String>,
    #[serde(default)]
    pub droppable_id: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// Plant rendered at a position or nested inside a tray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantOccupant {
    pub plant_id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub recipe_code: Option<String>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Tray summary rendered at a position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrayOccupant {
    pub tray_id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Vec<String>,
    #[serde(default)]
    pub current_count: u32,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub recipe_code: Option<String>,
    #[serde(default)]
    pub plants: Vec<PlantOccupant>,
    #[serde(default)]
    pub is_draft: bool,
}

/// Several trays sharing one slot (pending reassignments).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrayStackOccupant {
    #[serde(default)]
    pub trays: Vec<TrayOccupant>,
}

/// Unoccupied slot marker. Emitted so the grid keeps its shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmptySlotOccupant {
    #[serde(default)]
    pub is_draft: bool,
}

/// Slot definition preview, shown while editing tent structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDefOccupant {
    pub slot_id: String,
    #[serde(default)]
    pub is_draft: bool,
}

/// Tagged union over the five occupant kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum OccupantSpec {
    Tray(TrayOccupant),
    TrayStack(TrayStackOccupant),
    EmptySlot(EmptySlotOccupant),
    SlotDef(SlotDefOccupant),
    Plant(PlantOccupant),
}

impl OccupantSpec {
    pub fn kind(&self) -> OccupantKind {
        match self {
            OccupantSpec::Tray(_) => OccupantKind::Tray,
            OccupantSpec::TrayStack(_) => OccupantKind::TrayStack,
            OccupantSpec::EmptySlot(_) => OccupantKind::EmptySlot,
            OccupantSpec::SlotDef(_) => OccupantKind::SlotDef,
            OccupantSpec::Plant(_) => OccupantKind::Plant,
        }
    }

    pub fn is_draft(&self) -> bool {
        match self {
            OccupantSpec::Tray(t) => t.is_draft,
            OccupantSpec::TrayStack(s) => s.trays.iter().any(|t| t.is_draft),
            OccupantSpec::EmptySlot(e) => e.is_draft,
            OccupantSpec::SlotDef(d) => d.is_draft,
            OccupantSpec::Plant(p) => p.is_draft,
        }
    }
}

/// One addressable slot on a shelf. `id` doubles as the render key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSpec {
    pub id: String,
    pub tent_id: String,
    pub shelf_id: String,
    /// 1-based index of the slot on its shelf.
    pub index: u32,
    pub occupant: OccupantSpec,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub chips: Vec<ChipSpec>,
    #[serde(default)]
    pub state: CellState,
    #[serde(default)]
    pub dnd: Option<DndSpec>,
}

/// One shelf within a tent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub positions: Vec<PositionSpec>,
}

/// Tent-level metadata carried alongside the shelves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TentMeta {
    #[serde(default)]
    pub tent_code: Option<String>,
    #[serde(default)]
    pub selected_tray_ids: Vec<String>,
    /// Slots removed per persisted shelf index by a pending structure draft.
    /// Indexed positionally against the persisted shelf order.
    #[serde(default)]
    pub removed_slots_in_shelf: Vec<u32>,
}

/// One physical tent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TentSpec {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub shelves: Vec<ShelfSpec>,
    #[serde(default)]
    pub chips: Vec<ChipSpec>,
    #[serde(default)]
    pub state: CellState,
    #[serde(default)]
    pub dnd: Option<DndSpec>,
    #[serde(default)]
    pub meta: Option<TentMeta>,
}

/// Root of the layout tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TentLayoutSpec {
    #[serde(default)]
    pub tents: Vec<TentSpec>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl TentLayoutSpec {
    /// All positions in tree order.
    pub fn positions(&self) -> impl Iterator<Item = &PositionSpec> {
        self.tents
            .iter()
            .flat_map(|t| t.shelves.iter())
            .flat_map(|s| s.positions.iter())
    }

    /// Checks the structural invariants: tent ids unique, position ids
    /// unique across the whole spec. Used by builder tests and debug
    /// assertions, not on the render path.
    pub fn validate(&self) -> Result<(), String> {
        let mut tent_ids = std::collections::HashSet::new();
        for tent in &self.tents {
            if !tent_ids.insert(tent.id.as_str()) {
                return Err(format!("duplicate tent id: {}", tent.id));
            }
        }
        let mut position_ids = std::collections::HashSet::new();
        for position in self.positions() {
            if !position_ids.insert(position.id.as_str()) {
                return Err(format!("duplicate position id: {}", position.id));
            }
        }
        Ok(())
    }
}

/// Composes a deterministic identifier from a kind and its path parts,
/// e.g. `pos:exp-1:t-1:2:3`. Same input, same id, byte for byte.
pub fn spec_id(kind: &str, parts: &[&str]) -> String {
    let mut id = String::from(kind);
    for part in parts {
        id.push(':');
        id.push_str(part);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_position(id: &str) -> PositionSpec {
        PositionSpec {
            id: id.to_string(),
            tent_id: "tent:e:t1".to_string(),
            shelf_id: "shelf:e:t1:1".to_string(),
            index: 1,
            occupant: OccupantSpec::EmptySlot(EmptySlotOccupant::default()),
            label: None,
            chips: Vec::new(),
            state: CellState::default(),
            dnd: None,
        }
    }

    #[test]
    fn test_spec_id_composition() {
        assert_eq!(spec_id("pos", &["exp-1", "t-1", "2"]), "pos:exp-1:t-1:2");
        assert_eq!(spec_id("tent", &[]), "tent");
    }

    #[test]
    fn test_occupant_kind_tags() {
        // The serialized `kind` tag is part of the data contract.
        let json = serde_json::to_value(OccupantSpec::TrayStack(TrayStackOccupant::default())).unwrap();
        assert_eq!(json["kind"], "trayStack");
        let json = serde_json::to_value(OccupantSpec::EmptySlot(EmptySlotOccupant::default())).unwrap();
        assert_eq!(json["kind"], "emptySlot");
        let json = serde_json::to_value(OccupantSpec::SlotDef(SlotDefOccupant {
            slot_id: "s1".to_string(),
            is_draft: true,
        }))
        .unwrap();
        assert_eq!(json["kind"], "slotDef");
    }

    #[test]
    fn test_validate_rejects_duplicate_position_ids() {
        let spec = TentLayoutSpec {
            tents: vec![TentSpec {
                id: "tent:e:t1".to_string(),
                label: "Tent 1".to_string(),
                shelves: vec![ShelfSpec {
                    id: "shelf:e:t1:1".to_string(),
                    label: "Shelf 1".to_string(),
                    positions: vec![make_position("pos:e:t1:1:1"), make_position("pos:e:t1:1:1")],
                }],
                chips: Vec::new(),
                state: CellState::default(),
                dnd: None,
                meta: None,
            }],
            meta: None,
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_unique_ids() {
        let spec = TentLayoutSpec {
            tents: vec![TentSpec {
                id: "tent:e:t1".to_string(),
                label: "Tent 1".to_string(),
                shelves: vec![ShelfSpec {
                    id: "shelf:e:t1:1".to_string(),
                    label: "Shelf 1".to_string(),
                    positions: vec![make_position("pos:e:t1:1:1"), make_position("pos:e:t1:1:2")],
                }],
                chips: Vec::new(),
                state: CellState::default(),
                dnd: None,
                meta: None,
            }],
            meta: None,
        };
        assert!(spec.validate().is_ok());
    }
}
