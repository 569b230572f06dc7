//! Placement Wizard Component
//!
//! Four-step flow: tent structure, tray roster, plant assignment, and the
//! final review with drag-and-drop tray placement. Draft state lives in
//! the wizard and is flushed as a changeset on save.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_bench_mouseenter, make_on_mouseleave,
    make_on_slot_mouseenter, make_on_tray_mousedown, DndSignals, DropTarget,
};
use leptos_gridkit::{
    build_changeset, create_position_renderer_map, get_draft_or_persisted, render_position, OccupantKind,
    PositionRenderer, RenderContext, RendererMap, TentLayoutView,
};

use crate::api::{self, CreatePlantArgs, CreateTentArgs, CreateTrayArgs, ShelfStructureArgs};
use crate::context::AppContext;
use crate::layout::{build_review_spec, build_structure_spec};
use crate::models::{Plant, Tray};
use crate::store::{store_remove_tray, store_update_tray, use_app_store, AppStateStoreFields};

/// Wizard step selection
#[derive(Clone, Copy, PartialEq, Eq)]
enum WizardStep {
    Structure,
    Trays,
    Plants,
    Review,
}

const STEPS: &[(WizardStep, &str)] = &[
    (WizardStep::Structure, "1. Structure"),
    (WizardStep::Trays, "2. Trays"),
    (WizardStep::Plants, "3. Plants"),
    (WizardStep::Review, "4. Review"),
];

/// Applies a drafted tray move on top of the persisted assignments: the
/// tray leaves every slot it currently occupies and lands in `target`
/// (`None` sends it back to the bench). Dropping onto an occupied slot
/// stacks, which blocks saving until resolved.
fn draft_move_tray(
    draft: &mut HashMap<String, Vec<String>>,
    persisted: &HashMap<String, Vec<String>>,
    tray_id: &str,
    target: Option<&str>,
) {
    let slot_ids: HashSet<String> = persisted.keys().chain(draft.keys()).cloned().collect();
    for slot_id in slot_ids {
        let effective = get_draft_or_persisted(draft, persisted, &slot_id, Vec::new());
        if effective.iter().any(|id| id == tray_id) {
            let remaining: Vec<String> = effective.into_iter().filter(|id| id != tray_id).collect();
            draft.insert(slot_id, remaining);
        }
    }
    if let Some(target) = target {
        let target = target.to_string();
        let mut landed = get_draft_or_persisted(draft, persisted, &target, Vec::new());
        landed.push(tray_id.to_string());
        draft.insert(target, landed);
    }
}

#[component]
pub fn PlacementWizard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (step, set_step) = signal(WizardStep::Structure);
    let (saving, set_saving) = signal(false);
    let (saved_notice, set_saved_notice) = signal(false);

    // Draft overlays, keyed by entity id. Sparse: only touched keys.
    let structure_draft = RwSignal::new(HashMap::<String, Vec<u32>>::new());
    let plant_draft = RwSignal::new(HashMap::<String, Option<String>>::new());
    let slot_draft = RwSignal::new(HashMap::<String, Vec<String>>::new());
    let selected_trays = RwSignal::new(Vec::<String>::new());

    let pending = Memo::new(move |_| {
        let structure = store.tents().with(|tents| {
            let keys: Vec<String> = tents.iter().map(|t| t.id.clone()).collect();
            let persisted: HashMap<String, Vec<u32>> = tents
                .iter()
                .map(|t| (t.id.clone(), crate::layout::persisted_shelf_counts(t)))
                .collect();
            structure_draft.with(|d| build_changeset(&keys, &persisted, d, &Vec::new()).len())
        });
        let plants = store.plants().with(|plants| {
            let keys: Vec<String> = plants.iter().map(|p| p.id.clone()).collect();
            let persisted: HashMap<String, Option<String>> =
                plants.iter().map(|p| (p.id.clone(), p.tray_id.clone())).collect();
            plant_draft.with(|d| build_changeset(&keys, &persisted, d, &None).len())
        });
        let slots = store.tents().with(|tents| {
            let persisted = crate::layout::persisted_slot_trays(tents);
            let keys: Vec<String> = tents
                .iter()
                .flat_map(|t| &t.shelves)
                .flat_map(|s| &s.slots)
                .map(|s| s.id.clone())
                .collect();
            slot_draft.with(|d| build_changeset(&keys, &persisted, d, &Vec::new()).len())
        });
        structure + plants + slots
    });

    // Slots holding more than one tray; these must be resolved before save.
    let stacked_slots = Memo::new(move |_| {
        store.tents().with(|tents| {
            let persisted = crate::layout::persisted_slot_trays(tents);
            slot_draft.with(|d| {
                persisted
                    .keys()
                    .filter(|slot_id| {
                        get_draft_or_persisted(d, &persisted, *slot_id, Vec::new()).len() > 1
                    })
                    .count()
            })
        })
    });

    let on_save = move |_| {
        if saving.get() || stacked_slots.get() > 0 {
            return;
        }
        set_saving.set(true);

        // Snapshot the changesets before the async boundary.
        let structure_changes = store.tents().with_untracked(|tents| {
            let keys: Vec<String> = tents.iter().map(|t| t.id.clone()).collect();
            let persisted: HashMap<String, Vec<u32>> = tents
                .iter()
                .map(|t| (t.id.clone(), crate::layout::persisted_shelf_counts(t)))
                .collect();
            structure_draft.with_untracked(|d| build_changeset(&keys, &persisted, d, &Vec::new()))
        });
        let slot_changes = store.tents().with_untracked(|tents| {
            let persisted = crate::layout::persisted_slot_trays(tents);
            let keys: Vec<String> = tents
                .iter()
                .flat_map(|t| &t.shelves)
                .flat_map(|s| &s.slots)
                .map(|s| s.id.clone())
                .collect();
            slot_draft.with_untracked(|d| build_changeset(&keys, &persisted, d, &Vec::new()))
        });
        let plant_changes = store.plants().with_untracked(|plants| {
            let keys: Vec<String> = plants.iter().map(|p| p.id.clone()).collect();
            let persisted: HashMap<String, Option<String>> =
                plants.iter().map(|p| (p.id.clone(), p.tray_id.clone())).collect();
            plant_draft.with_untracked(|d| build_changeset(&keys, &persisted, d, &None))
        });

        spawn_local(async move {
            web_sys::console::log_1(
                &format!(
                    "[WIZARD] Saving {} structure, {} slot, {} plant changes",
                    structure_changes.len(),
                    slot_changes.len(),
                    plant_changes.len()
                )
                .into(),
            );
            for change in &structure_changes {
                let shelves: Vec<ShelfStructureArgs> = change
                    .draft
                    .iter()
                    .enumerate()
                    .map(|(idx, &count)| ShelfStructureArgs {
                        shelf_index: (idx + 1) as u32,
                        slot_count: count,
                    })
                    .collect();
                if let Err(e) = api::save_tent_structure(&change.key, shelves).await {
                    web_sys::console::error_1(&format!("[WIZARD] structure save failed: {e}").into());
                }
            }
            for change in &slot_changes {
                let tray_id = change.draft.first().map(String::as_str);
                if let Err(e) = api::assign_tray_to_slot(&change.key, tray_id).await {
                    web_sys::console::error_1(&format!("[WIZARD] slot save failed: {e}").into());
                }
            }
            for change in &plant_changes {
                let tray_id = change.draft.as_deref();
                if let Err(e) = api::assign_plant_to_tray(&change.key, tray_id).await {
                    web_sys::console::error_1(&format!("[WIZARD] plant save failed: {e}").into());
                }
            }

            structure_draft.set(HashMap::new());
            plant_draft.set(HashMap::new());
            slot_draft.set(HashMap::new());
            set_saving.set(false);
            ctx.reload();

            // Transient confirmation
            set_saved_notice.set(true);
            TimeoutFuture::new(2_000).await;
            set_saved_notice.set(false);
        });
    };

    view! {
        <div class="placement-wizard">
            <nav class="wizard-steps">
                {STEPS.iter().map(|&(value, label)| {
                    let step_class = move || {
                        if step.get() == value { "wizard-step-btn active" } else { "wizard-step-btn" }
                    };
                    view! {
                        <button class=step_class on:click=move |_| set_step.set(value)>{label}</button>
                    }
                }).collect_view()}

                <span class="wizard-pending" class:hidden=move || pending.get() == 0>
                    {move || format!("{} pending changes", pending.get())}
                </span>
            </nav>

            {move || match step.get() {
                WizardStep::Structure => view! { <StructureStep structure_draft=structure_draft /> }.into_any(),
                WizardStep::Trays => view! { <TraysStep /> }.into_any(),
                WizardStep::Plants => view! { <PlantsStep plant_draft=plant_draft /> }.into_any(),
                WizardStep::Review => view! {
                    <ReviewStep
                        plant_draft=plant_draft
                        slot_draft=slot_draft
                        selected_trays=selected_trays
                    />
                }.into_any(),
            }}

            <footer class="wizard-footer">
                {move || (stacked_slots.get() > 0).then(|| view! {
                    <span class="wizard-warning">
                        {format!("{} slots hold more than one tray", stacked_slots.get())}
                    </span>
                })}
                {move || saved_notice.get().then(|| view! { <span class="wizard-saved">"Saved"</span> })}
                <button
                    class="wizard-save-btn"
                    disabled=move || saving.get() || pending.get() == 0 || (stacked_slots.get() > 0)
                    on:click=on_save
                >
                    {move || if saving.get() { "Saving..." } else { "Save changes" }}
                </button>
            </footer>
        </div>
    }
}

/// Step 1: shelf/slot counts per tent, previewed through the structure
/// builder so pending capacity changes are visible before save.
#[component]
fn StructureStep(structure_draft: RwSignal<HashMap<String, Vec<u32>>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let spec = Memo::new(move |_| {
        let experiment = ctx.current_experiment.get().unwrap_or_default();
        store
            .tents()
            .with(|tents| structure_draft.with(|draft| build_structure_spec(&experiment, tents, draft)))
    });

    let (new_tent_code, set_new_tent_code) = signal(String::new());
    let on_add_tent = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let code = new_tent_code.get();
        if code.is_empty() {
            return;
        }
        let Some(experiment) = ctx.current_experiment.get() else {
            return;
        };
        spawn_local(async move {
            let args = CreateTentArgs {
                experiment_id: &experiment,
                code: &code,
                label: None,
            };
            if api::create_tent(&args).await.is_ok() {
                set_new_tent_code.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <div class="structure-step">
            <form class="tent-add-form" on:submit=on_add_tent>
                <input
                    type="text"
                    placeholder="Tent code"
                    prop:value=move || new_tent_code.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_tent_code.set(input.value());
                    }
                />
                <button type="submit">"Add tent"</button>
            </form>

            <div class="structure-controls">
                <For
                    each=move || store.tents().get()
                    key=|tent| (tent.id.clone(), crate::layout::persisted_shelf_counts(tent))
                    children=move |tent| {
                        let tent_id = tent.id.clone();
                        let persisted = crate::layout::persisted_shelf_counts(&tent);

                        let counts = {
                            let tent_id = tent_id.clone();
                            let persisted = persisted.clone();
                            move || {
                                structure_draft
                                    .with(|draft| draft.get(&tent_id).cloned())
                                    .unwrap_or_else(|| persisted.clone())
                            }
                        };
                        let edit = {
                            let tent_id = tent_id.clone();
                            let counts = counts.clone();
                            move |apply: &dyn Fn(&mut Vec<u32>)| {
                                let mut next = counts();
                                apply(&mut next);
                                structure_draft.update(|draft| {
                                    draft.insert(tent_id.clone(), next);
                                });
                            }
                        };

                        let add_shelf = {
                            let edit = edit.clone();
                            move |_| edit(&|counts| counts.push(4))
                        };
                        let remove_shelf = {
                            let edit = edit.clone();
                            move |_| edit(&|counts| {
                                counts.pop();
                            })
                        };

                        view! {
                            <div class="structure-tent">
                                <div class="structure-tent-header">
                                    <span>{tent.code.clone()}</span>
                                    <button on:click=add_shelf>"+ shelf"</button>
                                    <button on:click=remove_shelf>"- shelf"</button>
                                </div>
                                {
                                    let counts = counts.clone();
                                    let edit = edit.clone();
                                    move || {
                                        let edit = edit.clone();
                                        counts()
                                            .iter()
                                            .enumerate()
                                            .map(|(shelf_idx, &count)| {
                                                let edit = edit.clone();
                                                view! {
                                                    <label class="structure-shelf">
                                                        {format!("Shelf {} slots", shelf_idx + 1)}
                                                        <input
                                                            type="number"
                                                            min="0"
                                                            prop:value=count.to_string()
                                                            on:input=move |ev| {
                                                                let target = ev.target().unwrap();
                                                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                                                let value: u32 = input.value().parse().unwrap_or(0);
                                                                edit(&|counts| {
                                                                    if shelf_idx < counts.len() {
                                                                        counts[shelf_idx] = value;
                                                                    }
                                                                });
                                                            }
                                                        />
                                                    </label>
                                                }
                                            })
                                            .collect_view()
                                    }
                                }
                            </div>
                        }
                    }
                />
            </div>

            <TentLayoutView spec=Signal::from(spec) />
        </div>
    }
}

/// Step 2: the tray roster. Creates and deletes go straight to the
/// backend; only placement is drafted.
#[component]
fn TraysStep() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (new_code, set_new_code) = signal(String::new());
    let (new_capacity, set_new_capacity) = signal(String::from("6"));

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let code = new_code.get();
        if code.is_empty() {
            return;
        }
        let capacity: u32 = new_capacity.get().parse().unwrap_or(6);
        let Some(experiment) = ctx.current_experiment.get() else {
            return;
        };
        spawn_local(async move {
            let args = CreateTrayArgs {
                experiment_id: &experiment,
                code: &code,
                label: None,
                capacity,
            };
            if api::create_tray(&args).await.is_ok() {
                set_new_code.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <div class="trays-step">
            <form class="tray-add-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Tray code"
                    prop:value=move || new_code.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_code.set(input.value());
                    }
                />
                <input
                    type="number"
                    min="1"
                    prop:value=move || new_capacity.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_capacity.set(input.value());
                    }
                />
                <button type="submit">"Add tray"</button>
            </form>

            <div class="tray-list">
                <For
                    each=move || store.trays().get()
                    key=|tray| (tray.id.clone(), tray.plant_ids.len(), tray.capacity, tray.recipe_code.clone())
                    children=move |tray: Tray| {
                        let id = tray.id.clone();
                        let delete_id = id.clone();
                        let on_delete = move |_| {
                            let delete_id = delete_id.clone();
                            spawn_local(async move {
                                match api::delete_tray(&delete_id).await {
                                    Ok(()) => store_remove_tray(&store, &delete_id),
                                    Err(e) => {
                                        web_sys::console::error_1(&format!("[TRAYS] delete failed: {e}").into());
                                    }
                                }
                            });
                        };

                        let capacity_id = id.clone();
                        let on_capacity = move |ev: web_sys::Event| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let capacity: u32 = input.value().parse().unwrap_or(0);
                            let capacity_id = capacity_id.clone();
                            spawn_local(async move {
                                match api::update_tray(&capacity_id, None, Some(capacity)).await {
                                    Ok(updated) => store_update_tray(&store, updated),
                                    Err(e) => {
                                        web_sys::console::error_1(&format!("[TRAYS] update failed: {e}").into());
                                    }
                                }
                            });
                        };

                        view! {
                            <div class="tray-row">
                                <span class="tray-code">{tray.code.clone()}</span>
                                <span class="tray-fill">{format!("{} plants", tray.plant_ids.len())}</span>
                                <input
                                    class="tray-capacity-input"
                                    type="number"
                                    min="1"
                                    prop:value=tray.capacity.to_string()
                                    on:change=on_capacity
                                />
                                {tray.recipe_code.clone().map(|code| view! { <span class="tray-recipe">{code}</span> })}
                                <button class="delete-btn" on:click=on_delete>"×"</button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}

/// Step 3: drafted plant-to-tray assignment.
#[component]
fn PlantsStep(plant_draft: RwSignal<HashMap<String, Option<String>>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (new_code, set_new_code) = signal(String::new());
    let (new_strain, set_new_strain) = signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let code = new_code.get();
        if code.is_empty() {
            return;
        }
        let Some(experiment) = ctx.current_experiment.get() else {
            return;
        };
        let strain = new_strain.get();
        spawn_local(async move {
            let args = CreatePlantArgs {
                experiment_id: &experiment,
                code: &code,
                strain: (!strain.is_empty()).then_some(strain.as_str()),
            };
            if api::create_plant(&args).await.is_ok() {
                set_new_code.set(String::new());
                set_new_strain.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <div class="plants-step">
            <form class="plant-add-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Plant code"
                    prop:value=move || new_code.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_code.set(input.value());
                    }
                />
                <input
                    type="text"
                    placeholder="Strain"
                    prop:value=move || new_strain.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_strain.set(input.value());
                    }
                />
                <button type="submit">"Add plant"</button>
            </form>

            <For
                each=move || store.plants().get()
                key=|plant| (plant.id.clone(), plant.tray_id.clone(), plant.status)
                children=move |plant: Plant| {
                    let plant_id = plant.id.clone();
                    let persisted_tray = plant.tray_id.clone();

                    let effective = {
                        let plant_id = plant_id.clone();
                        let persisted_tray = persisted_tray.clone();
                        move || {
                            plant_draft
                                .with(|draft| draft.get(&plant_id).cloned())
                                .unwrap_or_else(|| persisted_tray.clone())
                        }
                    };
                    let dirty = {
                        let effective = effective.clone();
                        let persisted_tray = persisted_tray.clone();
                        move || effective() != persisted_tray
                    };
                    let on_change = {
                        let plant_id = plant_id.clone();
                        move |ev: web_sys::Event| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            let value = select.value();
                            let tray = (!value.is_empty()).then_some(value);
                            plant_draft.update(|draft| {
                                draft.insert(plant_id.clone(), tray);
                            });
                        }
                    };

                    view! {
                        <div class="plant-assign-row" class:dirty=dirty>
                            <span class="plant-code">{plant.code.clone()}</span>
                            <span class="plant-status">{plant.status.as_str()}</span>
                            <select on:change=on_change>
                                <option value="" selected={let effective = effective.clone(); move || effective().is_none()}>"— bench —"</option>
                                <For
                                    each=move || store.trays().get()
                                    key=|tray| tray.id.clone()
                                    children={
                                        let effective = effective.clone();
                                        move |tray: Tray| {
                                            let value = tray.id.clone();
                                            let selected = {
                                                let effective = effective.clone();
                                                let value = value.clone();
                                                move || effective().as_deref() == Some(value.as_str())
                                            };
                                            view! {
                                                <option value=value selected=selected>{tray.code.clone()}</option>
                                            }
                                        }
                                    }
                                />
                            </select>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Step 4: full layout review with drag-and-drop tray placement. The
/// renderer map is the default one with the slot-bearing kinds wrapped in
/// drag handles addressed by the spec's dnd identifiers.
#[component]
fn ReviewStep(
    plant_draft: RwSignal<HashMap<String, Option<String>>>,
    slot_draft: RwSignal<HashMap<String, Vec<String>>>,
    selected_trays: RwSignal<Vec<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |tray_id, target| {
        let persisted = store.tents().with_untracked(|tents| crate::layout::persisted_slot_trays(tents));
        web_sys::console::log_1(&format!("[WIZARD] Drop {tray_id} on {target:?}").into());
        slot_draft.update(|draft| match &target {
            DropTarget::Slot(slot_id) => draft_move_tray(draft, &persisted, &tray_id, Some(slot_id)),
            DropTarget::Bench => draft_move_tray(draft, &persisted, &tray_id, None),
        });
    });

    // Plant drafts feed through so tray fills preview the step-3 edits.
    let effective_plants = Memo::new(move |_| {
        store.plants().with(|plants| {
            plant_draft.with(|draft| {
                plants
                    .iter()
                    .cloned()
                    .map(|mut plant| {
                        if let Some(tray) = draft.get(&plant.id) {
                            plant.tray_id = tray.clone();
                        }
                        plant
                    })
                    .collect::<Vec<Plant>>()
            })
        })
    });

    let spec = Memo::new(move |_| {
        let experiment = ctx.current_experiment.get().unwrap_or_default();
        store.tents().with(|tents| {
            store.trays().with(|trays| {
                effective_plants.with(|plants| {
                    slot_draft.with(|slots| {
                        selected_trays.with(|selected| {
                            build_review_spec(&experiment, tents, trays, plants, slots, selected)
                        })
                    })
                })
            })
        })
    });

    // Trays not sitting in any slot under the current draft overlay.
    let bench_trays = Memo::new(move |_| {
        let placed: HashSet<String> = store.tents().with(|tents| {
            let persisted = crate::layout::persisted_slot_trays(tents);
            slot_draft.with(|draft| {
                persisted
                    .keys()
                    .flat_map(|slot_id| get_draft_or_persisted(draft, &persisted, slot_id, Vec::new()))
                    .collect()
            })
        });
        store
            .trays()
            .with(|trays| trays.iter().filter(|t| !placed.contains(&t.id)).cloned().collect::<Vec<Tray>>())
    });

    let context = RenderContext {
        on_tray_press: Some(Arc::new(move |tray_id: &str| {
            let tray_id = tray_id.to_string();
            selected_trays.update(|selected| {
                if let Some(pos) = selected.iter().position(|id| *id == tray_id) {
                    selected.remove(pos);
                } else {
                    selected.push(tray_id);
                }
            });
        })),
        ..RenderContext::default()
    };

    // Wrap the slot-bearing defaults in drag handles driven by the spec's
    // dnd addressing; the other kinds keep their plain defaults.
    let defaults = create_position_renderer_map(RendererMap::new());
    let wrap: PositionRenderer = {
        let defaults = defaults.clone();
        Arc::new(move |position, context| {
            let inner = render_position(&defaults, position, context);
            let draggable = position.dnd.as_ref().and_then(|d| d.draggable_id.clone());
            let droppable = position.dnd.as_ref().and_then(|d| d.droppable_id.clone());

            let on_mousedown = {
                let draggable = draggable.clone();
                move |ev: web_sys::MouseEvent| {
                    if let Some(id) = &draggable {
                        make_on_tray_mousedown(dnd, id.clone())(ev);
                    }
                }
            };
            let on_mouseenter = {
                let droppable = droppable.clone();
                move |ev: web_sys::MouseEvent| {
                    if let Some(id) = &droppable {
                        make_on_slot_mouseenter(dnd, id.clone())(ev);
                    }
                }
            };
            let on_mouseleave = make_on_mouseleave(dnd);
            let is_dragging = {
                let draggable = draggable.clone();
                move || draggable.is_some() && dnd.dragging_id_read.get() == draggable
            };
            let is_drop_target = {
                let droppable = droppable.clone();
                move || {
                    matches!(dnd.drop_target_read.get(), Some(DropTarget::Slot(ref id)) if Some(id) == droppable.as_ref())
                }
            };

            view! {
                <div
                    class="dnd-position"
                    class:dragging=is_dragging
                    class:drop-target=is_drop_target
                    on:mousedown=on_mousedown
                    on:mouseenter=on_mouseenter
                    on:mouseleave=on_mouseleave
                >
                    {inner}
                </div>
            }
            .into_any()
        })
    };
    let mut overrides = RendererMap::new();
    overrides.insert(OccupantKind::Tray, wrap.clone());
    overrides.insert(OccupantKind::TrayStack, wrap.clone());
    overrides.insert(OccupantKind::EmptySlot, wrap);
    let renderers = create_position_renderer_map(overrides);

    let on_bench_enter = make_on_bench_mouseenter(dnd);
    let on_bench_leave = make_on_mouseleave(dnd);

    view! {
        <div class="review-step">
            <TentLayoutView spec=Signal::from(spec) renderers=renderers context=context />

            <div
                class="tray-bench"
                class:drop-target=move || dnd.drop_target_read.get() == Some(DropTarget::Bench)
                on:mouseenter=on_bench_enter
                on:mouseleave=on_bench_leave
            >
                <span class="bench-label">"Bench"</span>
                <For
                    each=move || bench_trays.get()
                    key=|tray| (tray.id.clone(), tray.plant_ids.len())
                    children=move |tray: Tray| {
                        view! { <BenchTray tray=tray dnd=dnd /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn BenchTray(tray: Tray, dnd: DndSignals) -> impl IntoView {
    let on_mousedown = make_on_tray_mousedown(dnd, tray.id.clone());
    let id = tray.id.clone();
    let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str());

    view! {
        <div class="bench-tray" class:dragging=is_dragging on:mousedown=on_mousedown>
            <span class="tray-code">{tray.code.clone()}</span>
            <span class="tray-capacity">{format!("{}/{}", tray.plant_ids.len(), tray.capacity)}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn persisted_two_slots() -> HashMap<String, Vec<String>> {
        HashMap::from([
            ("s1".to_string(), vec!["tr1".to_string()]),
            ("s2".to_string(), Vec::new()),
        ])
    }

    #[test]
    fn test_draft_move_vacates_source_and_fills_target() {
        let persisted = persisted_two_slots();
        let mut draft = HashMap::new();

        draft_move_tray(&mut draft, &persisted, "tr1", Some("s2"));

        assert_eq!(draft.get("s1").unwrap().len(), 0);
        assert_eq!(draft.get("s2").unwrap(), &vec!["tr1".to_string()]);
    }

    #[test]
    fn test_draft_move_onto_occupied_slot_stacks() {
        let persisted = persisted_two_slots();
        let mut draft = HashMap::new();

        draft_move_tray(&mut draft, &persisted, "tr2", Some("s1"));

        assert_eq!(
            draft.get("s1").unwrap(),
            &vec!["tr1".to_string(), "tr2".to_string()]
        );
    }

    #[test]
    fn test_draft_move_to_bench_just_vacates() {
        let persisted = persisted_two_slots();
        let mut draft = HashMap::new();

        draft_move_tray(&mut draft, &persisted, "tr1", None);

        assert_eq!(draft.get("s1").unwrap().len(), 0);
        assert!(!draft.contains_key("s2"));
    }

    #[test]
    fn test_draft_move_is_layered_over_prior_drafts() {
        let persisted = persisted_two_slots();
        let mut draft = HashMap::new();

        draft_move_tray(&mut draft, &persisted, "tr1", Some("s2"));
        draft_move_tray(&mut draft, &persisted, "tr1", Some("s1"));

        // Back where it started; both edits stay present as no-op drafts.
        assert_eq!(draft.get("s1").unwrap(), &vec!["tr1".to_string()]);
        assert_eq!(draft.get("s2").unwrap().len(), 0);
    }
}
