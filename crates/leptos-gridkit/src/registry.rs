//! Position Renderer Registry
//!
//! Lookup table from occupant kind to a rendering function. Pages get the
//! default mapping and may replace individual kinds without forking the
//! rest of the pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;

use crate::cells::{fallback_cell, EmptySlotCell, PlantCell, SlotDefCell, TrayCell, TrayFolderCell};
use crate::spec::{OccupantKind, OccupantSpec, PositionSpec};

/// Press callback; receives the pressed entity's identifier.
pub type PressHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Capabilities and callbacks threaded explicitly through every renderer
/// invocation. No ambient state.
#[derive(Clone, Default)]
pub struct RenderContext {
    /// Enables expandable tray folders. Needs a `TrayFolderManager`
    /// provided in the consuming subtree.
    pub tray_folders: bool,
    /// Makes empty slots and slot definitions pressable.
    pub on_slot_press: Option<PressHandler>,
    /// Makes tray cells pressable.
    pub on_tray_press: Option<PressHandler>,
    /// Makes plant cells pressable.
    pub on_plant_press: Option<PressHandler>,
}

pub type PositionRenderer = Arc<dyn Fn(&PositionSpec, &RenderContext) -> AnyView + Send + Sync>;
pub type RendererMap = HashMap<OccupantKind, PositionRenderer>;

/// Default kind-to-renderer mapping with caller overrides merged on top.
/// An override replaces the default for its kind only; unrelated defaults
/// stay in place.
pub fn create_position_renderer_map(overrides: RendererMap) -> RendererMap {
    let mut map: RendererMap = HashMap::with_capacity(5);
    map.insert(OccupantKind::Tray, Arc::new(render_tray_position));
    map.insert(OccupantKind::TrayStack, Arc::new(render_tray_stack_position));
    map.insert(OccupantKind::EmptySlot, Arc::new(render_empty_slot_position));
    map.insert(OccupantKind::SlotDef, Arc::new(render_slot_def_position));
    map.insert(OccupantKind::Plant, Arc::new(render_plant_position));
    map.extend(overrides);
    map
}

/// Dispatches one position through the registry. A missing entry renders a
/// visible fallback cell: a gap in a spatial grid would read as "no slot"
/// rather than as a render problem.
pub fn render_position(map: &RendererMap, position: &PositionSpec, context: &RenderContext) -> AnyView {
    match map.get(&position.occupant.kind()) {
        Some(renderer) => renderer(position, context),
        None => {
            web_sys::console::warn_1(
                &format!("[GRIDKIT] no renderer for {:?} at {}", position.occupant.kind(), position.id).into(),
            );
            fallback_cell(position)
        }
    }
}

fn render_tray_position(position: &PositionSpec, context: &RenderContext) -> AnyView {
    let OccupantSpec::Tray(tray) = &position.occupant else {
        return fallback_cell(position);
    };
    if context.tray_folders && !tray.plants.is_empty() {
        view! {
            <TrayFolderCell position=position.clone() tray=tray.clone() context=context.clone() />
        }
        .into_any()
    } else {
        view! {
            <TrayCell position=position.clone() tray=tray.clone() context=context.clone() />
        }
        .into_any()
    }
}

fn render_tray_stack_position(position: &PositionSpec, context: &RenderContext) -> AnyView {
    let OccupantSpec::TrayStack(stack) = &position.occupant else {
        return fallback_cell(position);
    };
    match stack.trays.first() {
        // An empty stack reads as an empty slot.
        None => view! {
            <EmptySlotCell position=position.clone() is_draft=false context=context.clone() />
        }
        .into_any(),
        Some(first) => {
            let annotation = format!("{} trays in slot", stack.trays.len());
            view! {
                <TrayCell
                    position=position.clone()
                    tray=first.clone()
                    annotation=annotation
                    context=context.clone()
                />
            }
            .into_any()
        }
    }
}

fn render_empty_slot_position(position: &PositionSpec, context: &RenderContext) -> AnyView {
    let is_draft = match &position.occupant {
        OccupantSpec::EmptySlot(slot) => slot.is_draft,
        _ => return fallback_cell(position),
    };
    view! {
        <EmptySlotCell position=position.clone() is_draft=is_draft context=context.clone() />
    }
    .into_any()
}

fn render_slot_def_position(position: &PositionSpec, context: &RenderContext) -> AnyView {
    let OccupantSpec::SlotDef(def) = &position.occupant else {
        return fallback_cell(position);
    };
    view! {
        <SlotDefCell position=position.clone() def=def.clone() context=context.clone() />
    }
    .into_any()
}

fn render_plant_position(position: &PositionSpec, context: &RenderContext) -> AnyView {
    let OccupantSpec::Plant(plant) = &position.occupant else {
        return fallback_cell(position);
    };
    view! {
        <PlantCell plant=plant.clone() position_id=position.id.clone() context=context.clone() />
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_map_covers_all_kinds() {
        let map = create_position_renderer_map(RendererMap::new());
        for kind in [
            OccupantKind::Tray,
            OccupantKind::TrayStack,
            OccupantKind::EmptySlot,
            OccupantKind::SlotDef,
            OccupantKind::Plant,
        ] {
            assert!(map.contains_key(&kind), "missing default for {kind:?}");
        }
    }

    #[test]
    fn test_override_replaces_only_its_kind() {
        let mut overrides = RendererMap::new();
        let marker: PositionRenderer = Arc::new(|p, c| render_plant_position(p, c));
        overrides.insert(OccupantKind::Tray, marker.clone());

        let map = create_position_renderer_map(overrides);
        assert_eq!(map.len(), 5);
        assert!(Arc::ptr_eq(map.get(&OccupantKind::Tray).unwrap(), &marker));
        // The other defaults are untouched.
        assert!(!Arc::ptr_eq(map.get(&OccupantKind::Plant).unwrap(), &marker));
    }
}
