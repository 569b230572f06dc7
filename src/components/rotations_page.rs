//! Rotations Page
//!
//! Per-tray rotation logging with a quarter-turn picker.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use leptos_gridkit::{KeyFn, RenderFn, VirtualList, VIRTUALIZATION_THRESHOLD};

use crate::api::{self, CreateRotationArgs};
use crate::context::AppContext;
use crate::models::Rotation;
use crate::store::{use_app_store, AppStateStoreFields};

const QUARTER_TURNS: &[(u32, &str)] = &[(1, "90°"), (2, "180°"), (3, "270°")];

fn rotation_row(rotation: &Rotation) -> AnyView {
    view! {
        <div class="rotation-row">
            <span class="rotation-date">{rotation.rotated_at.clone()}</span>
            <span class="rotation-tray">{rotation.tray_id.clone()}</span>
            <span class="rotation-turns">{format!("{}×90°", rotation.quarter_turns)}</span>
            {rotation.operator.clone().map(|op| view! { <span class="rotation-operator">{op}</span> })}
        </div>
    }
    .into_any()
}

#[component]
pub fn RotationsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (rotations, set_rotations) = signal(Vec::<Rotation>::new());
    let (tray_id, set_tray_id) = signal(String::new());
    let (turns, set_turns) = signal(1u32);
    let (operator, set_operator) = signal(String::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(experiment) = ctx.current_experiment.get() else {
            set_rotations.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::list_rotations(&experiment).await {
                Ok(loaded) => set_rotations.set(loaded),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ROTATIONS] load failed: {e}").into());
                }
            }
        });
    });

    let on_log = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let tray = tray_id.get();
        if tray.is_empty() {
            return;
        }
        let quarter_turns = turns.get();
        let operator_value = operator.get();

        spawn_local(async move {
            let args = CreateRotationArgs {
                tray_id: &tray,
                quarter_turns,
                operator: (!operator_value.is_empty()).then_some(operator_value.as_str()),
            };
            match api::create_rotation(&args).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[ROTATIONS] log failed: {e}").into());
                }
            }
        });
    };

    view! {
        <div class="rotations-page">
            <form class="rotation-form" on:submit=on_log>
                <select on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_tray_id.set(select.value());
                }>
                    <option value="">"— tray —"</option>
                    <For
                        each=move || store.trays().get()
                        key=|tray| tray.id.clone()
                        children=move |tray| {
                            view! { <option value=tray.id.clone()>{tray.code.clone()}</option> }
                        }
                    />
                </select>

                <div class="turn-picker">
                    {QUARTER_TURNS.iter().map(|&(value, label)| {
                        let is_active = move || turns.get() == value;
                        view! {
                            <button
                                type="button"
                                class=move || if is_active() { "turn-btn active" } else { "turn-btn" }
                                on:click=move |_| set_turns.set(value)
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <input
                    type="text"
                    placeholder="Operator"
                    prop:value=move || operator.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_operator.set(input.value());
                    }
                />
                <button type="submit">"Log rotation"</button>
            </form>

            <div class="rotation-list">
                {move || {
                    if rotations.with(|r| r.len()) <= VIRTUALIZATION_THRESHOLD {
                        view! {
                            <For
                                each=move || rotations.get()
                                key=|rotation| rotation.id.clone()
                                children=move |rotation| rotation_row(&rotation)
                            />
                        }
                        .into_any()
                    } else {
                        let key: KeyFn<Rotation> = Arc::new(|rotation: &Rotation| rotation.id.clone());
                        let render: RenderFn<Rotation> = Arc::new(|rotation: &Rotation| rotation_row(rotation));
                        view! {
                            <VirtualList
                                items=Signal::from(rotations)
                                key=key
                                render=render
                                item_size=32.0
                            />
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
