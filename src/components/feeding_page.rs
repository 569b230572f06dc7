//! Feeding Page
//!
//! Upcoming feeding actions with a scheduling form and done/skip
//! controls. Readiness and schedule rules live server-side; this page
//! only renders and mutates.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ScheduleFeedingArgs};
use crate::context::AppContext;
use crate::models::{FeedingAction, FeedingStatus};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FeedingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (actions, set_actions) = signal(Vec::<FeedingAction>::new());
    let (scheduled_for, set_scheduled_for) = signal(String::new());
    let (recipe_code, set_recipe_code) = signal(String::new());
    let (solution, set_solution) = signal(String::new());
    let (volume, set_volume) = signal(String::from("500"));

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let Some(experiment) = ctx.current_experiment.get() else {
            set_actions.set(Vec::new());
            return;
        };
        spawn_local(async move {
            match api::list_feeding_actions(&experiment).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[FEEDING] Loaded {} actions", loaded.len()).into());
                    set_actions.set(loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FEEDING] load failed: {e}").into());
                }
            }
        });
    });

    let on_schedule = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let when = scheduled_for.get();
        if when.is_empty() {
            return;
        }
        let Some(experiment) = ctx.current_experiment.get() else {
            return;
        };
        let recipe = recipe_code.get();
        let solution_value = solution.get();
        let volume_ml: u32 = volume.get().parse().unwrap_or(0);

        spawn_local(async move {
            let args = ScheduleFeedingArgs {
                experiment_id: &experiment,
                recipe_code: (!recipe.is_empty()).then_some(recipe.as_str()),
                scheduled_for: &when,
                solution: (!solution_value.is_empty()).then_some(solution_value.as_str()),
                volume_ml,
            };
            match api::schedule_feeding(&args).await {
                Ok(_) => {
                    set_scheduled_for.set(String::new());
                    set_solution.set(String::new());
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FEEDING] schedule failed: {e}").into());
                }
            }
        });
    };

    let set_status = move |id: String, status: FeedingStatus| {
        spawn_local(async move {
            match api::set_feeding_status(&id, status).await {
                Ok(_) => ctx.reload(),
                Err(e) => {
                    web_sys::console::error_1(&format!("[FEEDING] status update failed: {e}").into());
                }
            }
        });
    };

    view! {
        <div class="feeding-page">
            <form class="feeding-form" on:submit=on_schedule>
                <input
                    type="datetime-local"
                    prop:value=move || scheduled_for.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_scheduled_for.set(input.value());
                    }
                />
                <select on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_recipe_code.set(select.value());
                }>
                    <option value="">"— recipe —"</option>
                    <For
                        each=move || store.recipes().get()
                        key=|recipe| recipe.id.clone()
                        children=move |recipe| {
                            view! { <option value=recipe.code.clone()>{recipe.code.clone()}</option> }
                        }
                    />
                </select>
                <input
                    type="text"
                    placeholder="Solution"
                    prop:value=move || solution.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_solution.set(input.value());
                    }
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Volume (ml)"
                    prop:value=move || volume.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_volume.set(input.value());
                    }
                />
                <button type="submit">"Schedule"</button>
            </form>

            <div class="feeding-list">
                <For
                    each=move || actions.get()
                    key=|action| (action.id.clone(), action.status)
                    children=move |action| {
                        let done_id = action.id.clone();
                        let skip_id = action.id.clone();
                        let is_pending = action.status == FeedingStatus::Pending;

                        view! {
                            <div class=format!("feeding-row status-{}", action.status.as_str())>
                                <span class="feeding-when">{action.scheduled_for.clone()}</span>
                                {action.recipe_code.clone().map(|code| view! { <span class="feeding-recipe">{code}</span> })}
                                {action.solution.clone().map(|s| view! { <span class="feeding-solution">{s}</span> })}
                                <span class="feeding-volume">{format!("{} ml", action.volume_ml)}</span>
                                <span class="feeding-status">{action.status.as_str()}</span>
                                {is_pending.then(|| view! {
                                    <span class="feeding-actions">
                                        <button on:click=move |_| set_status(done_id.clone(), FeedingStatus::Done)>
                                            "Done"
                                        </button>
                                        <button on:click=move |_| set_status(skip_id.clone(), FeedingStatus::Skipped)>
                                            "Skip"
                                        </button>
                                    </span>
                                })}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
