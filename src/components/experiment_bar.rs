//! Experiment Bar Component
//!
//! Tab bar for switching between experiments, with an inline create form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, CreateExperimentArgs};
use crate::context::AppContext;
use crate::models::ExperimentStatus;
use crate::store::{store_add_experiment, use_app_store, AppStateStoreFields};

/// Experiment tab bar
#[component]
pub fn ExperimentBar(
    current_experiment: ReadSignal<Option<String>>,
    set_current_experiment: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_code, set_new_code) = signal(String::new());
    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let code = new_code.get();
        let name = new_name.get();
        if code.is_empty() || name.is_empty() {
            return;
        }

        spawn_local(async move {
            match api::create_experiment(&CreateExperimentArgs { code: &code, name: &name }).await {
                Ok(created) => {
                    let id = created.id.clone();
                    store_add_experiment(&store, created);
                    set_current_experiment.set(Some(id));
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[EXPERIMENTS] create failed: {e}").into());
                }
            }
        });

        set_new_code.set(String::new());
        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="experiment-bar">
            <For
                each=move || store.experiments().get()
                // Key on the mutable fields too so status changes re-render
                key=|experiment| (experiment.id.clone(), experiment.status)
                children=move |experiment| {
                    let id = experiment.id.clone();
                    let select_id = id.clone();
                    let is_active = move || current_experiment.get().as_deref() == Some(id.as_str());
                    let tab_class = move || {
                        if is_active() { "experiment-tab active" } else { "experiment-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| set_current_experiment.set(Some(select_id.clone()))
                        >
                            <span class="experiment-code">{experiment.code.clone()}</span>
                            {(experiment.status == ExperimentStatus::Closed).then(|| {
                                view! { <span class="experiment-closed">"closed"</span> }
                            })}
                        </button>
                    }
                }
            />

            {move || current_experiment.get().map(|id| {
                view! {
                    <button
                        class="experiment-close-btn"
                        title="Close experiment"
                        on:click=move |_| {
                            let id = id.clone();
                            spawn_local(async move {
                                match api::close_experiment(&id).await {
                                    Ok(_) => ctx.reload(),
                                    Err(e) => {
                                        web_sys::console::error_1(&format!("[EXPERIMENTS] close failed: {e}").into());
                                    }
                                }
                            });
                        }
                    >
                        "Close"
                    </button>
                }
            })}

            {move || if adding.get() {
                view! {
                    <form class="experiment-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Code"
                            prop:value=move || new_code.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_new_code.set(input.value());
                            }
                        />
                        <input
                            type="text"
                            placeholder="Name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_new_name.set(input.value());
                            }
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="experiment-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
