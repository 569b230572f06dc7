//! Recipes Page
//!
//! Recipe list with per-tray assignment.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::{Recipe, Tray};
use crate::store::{store_update_tray, use_app_store, AppStateStoreFields};

#[component]
pub fn RecipesPage() -> impl IntoView {
    let store = use_app_store();
    let (selected_recipe, set_selected_recipe) = signal::<Option<String>>(None);

    view! {
        <div class="recipes-page">
            <div class="recipe-list">
                <h2>"Recipes"</h2>
                <For
                    each=move || store.recipes().get()
                    key=|recipe| recipe.id.clone()
                    children=move |recipe: Recipe| {
                        let code = recipe.code.clone();
                        let select_code = code.clone();
                        let is_selected = move || selected_recipe.get().as_deref() == Some(code.as_str());

                        view! {
                            <div
                                class=move || if is_selected() { "recipe-row selected" } else { "recipe-row" }
                                on:click=move |_| set_selected_recipe.set(Some(select_code.clone()))
                            >
                                <span class="recipe-code">{recipe.code.clone()}</span>
                                <span class="recipe-name">{recipe.name.clone()}</span>
                                <span class="recipe-phases">{format!("{} phases", recipe.phase_count)}</span>
                                {recipe.notes.clone().map(|notes| view! { <span class="recipe-notes">{notes}</span> })}
                            </div>
                        }
                    }
                />
            </div>

            <div class="recipe-assignment">
                <h2>"Tray assignment"</h2>
                <For
                    each=move || store.trays().get()
                    key=|tray| (tray.id.clone(), tray.recipe_code.clone())
                    children=move |tray: Tray| {
                        let tray_id = tray.id.clone();
                        let current = tray.recipe_code.clone();

                        let on_change = move |ev: web_sys::Event| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            let value = select.value();
                            let recipe = (!value.is_empty()).then_some(value);
                            let tray_id = tray_id.clone();
                            spawn_local(async move {
                                match api::assign_recipe(&tray_id, recipe.as_deref()).await {
                                    Ok(updated) => store_update_tray(&store, updated),
                                    Err(e) => {
                                        web_sys::console::error_1(&format!("[RECIPES] assign failed: {e}").into());
                                    }
                                }
                            });
                        };

                        view! {
                            <div class="recipe-assign-row">
                                <span class="tray-code">{tray.code.clone()}</span>
                                <select on:change=on_change>
                                    <option value="" selected=current.is_none()>"— none —"</option>
                                    <For
                                        each=move || store.recipes().get()
                                        key=|recipe| recipe.id.clone()
                                        children={
                                            let current = current.clone();
                                            move |recipe: Recipe| {
                                                let selected = current.as_deref() == Some(recipe.code.as_str());
                                                view! {
                                                    <option value=recipe.code.clone() selected=selected>
                                                        {recipe.code.clone()}
                                                    </option>
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
        </div>
    }
}
