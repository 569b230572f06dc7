//! Default Cell Components
//!
//! The cells the renderer registry dispatches to. Pages can replace any of
//! them per kind via `create_position_renderer_map` overrides.

use leptos::prelude::*;

use crate::folder::use_tray_folders;
use crate::registry::RenderContext;
use crate::spec::{CellState, ChipSpec, PlantOccupant, PositionSpec, SlotDefOccupant, Tone, TrayOccupant};

/// Class string for a cell: base plus state modifiers.
pub(crate) fn cell_classes(base: &str, state: &CellState) -> String {
    let mut classes = String::from(base);
    if state.selected {
        classes.push_str(" selected");
    }
    if state.disabled {
        classes.push_str(" disabled");
    }
    if state.locked {
        classes.push_str(" locked");
    }
    if state.tone != Tone::Neutral {
        classes.push_str(" tone-");
        classes.push_str(state.tone.class());
    }
    classes
}

/// Corner-pinned badge.
#[component]
pub fn ChipBadge(chip: ChipSpec) -> impl IntoView {
    let classes = format!("chip chip-{} chip-{}", chip.tone.class(), chip.corner.class());
    view! { <span class=classes>{chip.label}</span> }
}

fn chips_view(chips: &[ChipSpec]) -> impl IntoView {
    chips
        .iter()
        .cloned()
        .map(|chip| view! { <ChipBadge chip=chip /> })
        .collect_view()
}

/// Visible stand-in for a position the registry could not render. A gap
/// would read as "no slot here".
pub fn fallback_cell(position: &PositionSpec) -> AnyView {
    let label = position.label.clone().unwrap_or_else(|| position.id.clone());
    view! {
        <div class="position-cell fallback-cell">
            <span class="fallback-label">{label}</span>
            <span class="fallback-note">"unrenderable"</span>
        </div>
    }
    .into_any()
}

/// Static tray summary cell.
#[component]
pub fn TrayCell(
    position: PositionSpec,
    tray: TrayOccupant,
    #[prop(optional, into)] annotation: Option<String>,
    context: RenderContext,
) -> impl IntoView {
    let mut base = String::from("position-cell tray-cell");
    if tray.is_draft {
        base.push_str(" draft");
    }
    let classes = cell_classes(&base, &position.state);
    let tray_id = tray.tray_id.clone();
    let on_press = context.on_tray_press.clone();
    let pressable = on_press.is_some() && !position.state.disabled;

    view! {
        <div
            class=classes
            class:pressable=pressable
            on:click=move |_| {
                if let Some(handler) = &on_press {
                    handler(&tray_id);
                }
            }
        >
            {chips_view(&position.chips)}
            <div class="tray-title">{tray.title.clone()}</div>
            <div class="tray-fill">{format!("{}/{}", tray.current_count, tray.capacity)}</div>
            {tray.recipe_code.clone().map(|code| view! { <div class="tray-recipe">{code}</div> })}
            {tray.summary.iter().cloned().map(|line| view! { <div class="tray-summary-line">{line}</div> }).collect_view()}
            {annotation.map(|text| view! { <div class="tray-annotation">{text}</div> })}
        </div>
    }
}

/// Expandable tray cell. The open/closed state lives in the subtree's
/// `TrayFolderManager`; without a provider it renders as a static cell.
#[component]
pub fn TrayFolderCell(position: PositionSpec, tray: TrayOccupant, context: RenderContext) -> impl IntoView {
    let Some(folders) = use_tray_folders() else {
        return view! { <TrayCell position=position tray=tray context=context /> }.into_any();
    };

    let key = tray.tray_id.clone();
    let toggle_key = key.clone();
    let open_key = key.clone();
    let is_open = move || folders.is_open(&open_key);

    let mut base = String::from("position-cell tray-cell tray-folder");
    if tray.is_draft {
        base.push_str(" draft");
    }
    let classes = cell_classes(&base, &position.state);
    let plants = tray.plants.clone();
    let on_plant_press = context.on_plant_press.clone();

    view! {
        <div class=classes class:open=is_open.clone()>
            {chips_view(&position.chips)}
            <div class="tray-folder-header" on:click=move |_| folders.toggle(&toggle_key)>
                <span class="tray-folder-arrow">{let is_open = is_open.clone(); move || if is_open() { "▼" } else { "▶" }}</span>
                <span class="tray-title">{tray.title.clone()}</span>
                <span class="tray-fill">{format!("{}/{}", tray.current_count, tray.capacity)}</span>
            </div>
            {let is_open = is_open.clone(); move || {
                if !is_open() {
                    return view! { <div class="tray-folder-collapsed"></div> }.into_any();
                }
                let on_plant_press = on_plant_press.clone();
                view! {
                    <div class="tray-folder-plants">
                        {plants.iter().cloned().map(|plant| {
                            let plant_id = plant.plant_id.clone();
                            let on_press = on_plant_press.clone();
                            view! {
                                <div
                                    class="tray-folder-plant"
                                    class:pressable=on_press.is_some()
                                    on:click=move |_| {
                                        if let Some(handler) = &on_press {
                                            handler(&plant_id);
                                        }
                                    }
                                >
                                    <span class="plant-title">{plant.title.clone()}</span>
                                    {plant.grade.clone().map(|grade| view! { <span class="plant-grade">{grade}</span> })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
    .into_any()
}

/// Unoccupied slot placeholder. Interactive only when the context supplies
/// a slot press handler.
#[component]
pub fn EmptySlotCell(position: PositionSpec, is_draft: bool, context: RenderContext) -> impl IntoView {
    let mut base = String::from("position-cell slot-cell empty");
    if is_draft {
        base.push_str(" draft");
    }
    let classes = cell_classes(&base, &position.state);
    let position_id = position.id.clone();
    let on_press = context.on_slot_press.clone();
    let pressable = on_press.is_some() && !position.state.disabled;
    let label = position.label.clone().unwrap_or_else(|| format!("Slot {}", position.index));

    view! {
        <div
            class=classes
            class:pressable=pressable
            on:click=move |_| {
                if let Some(handler) = &on_press {
                    handler(&position_id);
                }
            }
        >
            {chips_view(&position.chips)}
            <span class="slot-label">{label}</span>
        </div>
    }
}

/// Slot definition preview, used while editing tent structure.
#[component]
pub fn SlotDefCell(position: PositionSpec, def: SlotDefOccupant, context: RenderContext) -> impl IntoView {
    let mut base = String::from("position-cell slot-cell slot-def");
    if def.is_draft {
        base.push_str(" draft");
    }
    let classes = cell_classes(&base, &position.state);
    let position_id = position.id.clone();
    let on_press = context.on_slot_press.clone();
    let pressable = on_press.is_some() && !position.state.disabled;
    let label = position.label.clone().unwrap_or_else(|| format!("Slot {}", position.index));

    view! {
        <div
            class=classes
            class:pressable=pressable
            on:click=move |_| {
                if let Some(handler) = &on_press {
                    handler(&position_id);
                }
            }
        >
            {chips_view(&position.chips)}
            <span class="slot-label">{label}</span>
            {def.is_draft.then(|| view! { <span class="slot-draft-marker">"new"</span> })}
        </div>
    }
}

/// Plant summary cell. Interactive only when the context supplies a plant
/// press handler.
#[component]
pub fn PlantCell(
    plant: PlantOccupant,
    #[prop(optional, into)] position_id: Option<String>,
    context: RenderContext,
) -> impl IntoView {
    let _ = position_id;
    let mut base = String::from("position-cell plant-cell");
    if plant.is_draft {
        base.push_str(" draft");
    }
    if let Some(status) = &plant.status {
        base.push_str(" status-");
        base.push_str(status);
    }
    let plant_id = plant.plant_id.clone();
    let on_press = context.on_plant_press.clone();
    let pressable = on_press.is_some();

    view! {
        <div
            class=base
            class:pressable=pressable
            on:click=move |_| {
                if let Some(handler) = &on_press {
                    handler(&plant_id);
                }
            }
        >
            <div class="plant-title">{plant.title.clone()}</div>
            {plant.subtitle.clone().map(|subtitle| view! { <div class="plant-subtitle">{subtitle}</div> })}
            <div class="plant-meta">
                {plant.grade.clone().map(|grade| view! { <span class="plant-grade">{grade}</span> })}
                {plant.recipe_code.clone().map(|code| view! { <span class="plant-recipe">{code}</span> })}
            </div>
        </div>
    }
}
