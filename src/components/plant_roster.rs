//! Plant Roster Component
//!
//! Responsive plant grid with a size-based virtualization policy: small
//! rosters render statically, large ones go through the windowed grid.

use std::sync::Arc;

use leptos::prelude::*;

use leptos_gridkit::{
    GridBreakpoints, KeyFn, PlantCell, RenderContext, RenderFn, VirtualGrid, VIRTUALIZATION_THRESHOLD,
};

use crate::context::AppContext;
use crate::layout::plant_occupant;
use crate::models::Plant;

/// Render key covering the fields a cell displays, so in-place edits
/// re-render under the windowed grid's keyed diffing.
fn plant_key(plant: &Plant) -> String {
    format!(
        "{}:{}:{}",
        plant.id,
        plant.status.as_str(),
        plant.grade.as_deref().unwrap_or("")
    )
}

#[component]
pub fn PlantRoster(plants: Signal<Vec<Plant>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let context = RenderContext {
        on_plant_press: Some(Arc::new(move |plant_id: &str| {
            ctx.select_plant(Some(plant_id.to_string()));
        })),
        ..RenderContext::default()
    };

    let key: KeyFn<Plant> = Arc::new(plant_key);
    let render: RenderFn<Plant> = Arc::new(move |plant: &Plant| {
        let occupant = plant_occupant(plant);
        view! { <PlantCell plant=occupant context=context.clone() /> }.into_any()
    });

    view! {
        <div class="plant-roster">
            {move || {
                let count = plants.with(|p| p.len());
                if count == 0 {
                    return view! { <div class="roster-empty">"No plants"</div> }.into_any();
                }
                if count <= VIRTUALIZATION_THRESHOLD {
                    // Small roster: plain flow, no windowing overhead.
                    let render = render.clone();
                    view! {
                        <div class="plant-roster-static">
                            <For
                                each=move || plants.get()
                                key=plant_key
                                children=move |plant| render(&plant)
                            />
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <VirtualGrid
                            items=plants
                            key=key.clone()
                            render=render.clone()
                            breakpoints=GridBreakpoints::default()
                        />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
