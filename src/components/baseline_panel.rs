//! Baseline Panel Component
//!
//! Side panel for the selected plant: recent baselines plus a capture
//! form (height, node count, notes).

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateBaselineArgs};
use crate::context::AppContext;
use crate::models::Baseline;
use crate::store::{store_update_plant, use_app_store};

const GRADES: &[&str] = &["A", "B", "C"];

#[component]
pub fn BaselinePanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (baselines, set_baselines) = signal(Vec::<Baseline>::new());
    let (height, set_height) = signal(String::new());
    let (nodes, set_nodes) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    // Reload baselines when the selection or the global trigger changes
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(plant_id) = ctx.selected_plant.get() else {
            set_baselines.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::list_baselines(&plant_id).await {
                Ok(loaded) => set_baselines.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[BASELINE] load failed: {e}").into());
                }
            }
        });
    });

    let on_capture = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(plant_id) = ctx.selected_plant.get() else {
            return;
        };
        let height_mm: u32 = height.get().parse().unwrap_or(0);
        let node_count: u32 = nodes.get().parse().unwrap_or(0);
        let notes_value = notes.get();

        spawn_local(async move {
            let args = CreateBaselineArgs {
                plant_id: &plant_id,
                height_mm,
                node_count,
                notes: (!notes_value.is_empty()).then_some(notes_value.as_str()),
            };
            match api::create_baseline(&args).await {
                Ok(_) => {
                    set_height.set(String::new());
                    set_nodes.set(String::new());
                    set_notes.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[BASELINE] capture failed: {e}").into());
                }
            }
        });
    };

    view! {
        <aside class="baseline-panel">
            {move || match ctx.selected_plant.get() {
                None => view! { <div class="baseline-hint">"Select a plant to capture a baseline"</div> }.into_any(),
                Some(plant_id) => view! {
                    <div class="baseline-content">
                        <header class="baseline-header">
                            <span>{format!("Plant {plant_id}")}</span>
                            <button class="close-btn" on:click=move |_| ctx.select_plant(None)>"×"</button>
                        </header>

                        <div class="grade-picker">
                            {GRADES.iter().map(|&grade| {
                                let grade_plant = plant_id.clone();
                                view! {
                                    <button
                                        class="grade-btn"
                                        on:click=move |_| {
                                            let grade_plant = grade_plant.clone();
                                            spawn_local(async move {
                                                match api::set_plant_grade(&grade_plant, Some(grade)).await {
                                                    Ok(updated) => store_update_plant(&store, updated),
                                                    Err(e) => {
                                                        web_sys::console::error_1(&format!("[BASELINE] grade failed: {e}").into());
                                                    }
                                                }
                                            });
                                        }
                                    >
                                        {grade}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <form class="baseline-form" on:submit=on_capture>
                            <input
                                type="number"
                                placeholder="Height (mm)"
                                prop:value=move || height.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_height.set(input.value());
                                }
                            />
                            <input
                                type="number"
                                placeholder="Nodes"
                                prop:value=move || nodes.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_nodes.set(input.value());
                                }
                            />
                            <input
                                type="text"
                                placeholder="Notes"
                                prop:value=move || notes.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                    set_notes.set(input.value());
                                }
                            />
                            <button type="submit">"Capture"</button>
                        </form>

                        <div class="baseline-list">
                            <For
                                each=move || baselines.get()
                                key=|baseline| baseline.id.clone()
                                children=move |baseline| {
                                    view! {
                                        <div class="baseline-row">
                                            <span class="baseline-date">{baseline.captured_at.clone()}</span>
                                            <span>{format!("{} mm", baseline.height_mm)}</span>
                                            <span>{format!("{} nodes", baseline.node_count)}</span>
                                            {baseline.notes.clone().map(|n| view! { <span class="baseline-notes">{n}</span> })}
                                        </div>
                                    }
                                }
                            />
                        </div>
                    </div>
                }.into_any(),
            }}
        </aside>
    }
}
