//! Canopy Frontend App
//!
//! Main application component: experiment bar, page navigation, and the
//! data-loading effects feeding the global store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ExperimentBar, FeedingPage, OverviewPage, PlacementWizard, RecipesPage, RotationsPage};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

/// Page selection
#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Overview,
    Placement,
    Recipes,
    Rotations,
    Feeding,
}

const PAGES: &[(Page, &str)] = &[
    (Page::Overview, "Overview"),
    (Page::Placement, "Placement"),
    (Page::Recipes, "Recipes"),
    (Page::Rotations, "Rotations"),
    (Page::Feeding, "Feeding"),
];

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (current_page, set_current_page) = signal(Page::Overview);
    let (current_experiment, set_current_experiment) = signal::<Option<String>>(None);
    let (selected_plant, set_selected_plant) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        current_experiment,
        (selected_plant, set_selected_plant),
    ));

    // Load experiments and recipes on mount and on reload
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            match api::list_experiments().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} experiments", loaded.len()).into());
                    // Default to the first experiment when nothing is selected
                    if current_experiment.get_untracked().is_none() {
                        set_current_experiment.set(loaded.first().map(|e| e.id.clone()));
                    }
                    *store.experiments().write() = loaded;
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] experiments load failed: {e}").into());
                }
            }
            if let Ok(loaded) = api::list_recipes().await {
                *store.recipes().write() = loaded;
            }
        });
    });

    // Load layout, trays and plants when the experiment or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(experiment) = current_experiment.get() else {
            store.tents().write().clear();
            store.trays().write().clear();
            store.plants().write().clear();
            return;
        };
        web_sys::console::log_1(
            &format!("[APP] Loading experiment {experiment}, trigger={trigger}").into(),
        );
        spawn_local(async move {
            match api::list_tents(&experiment).await {
                Ok(loaded) => *store.tents().write() = loaded,
                Err(e) => web_sys::console::error_1(&format!("[APP] tents load failed: {e}").into()),
            }
            match api::list_trays(&experiment).await {
                Ok(loaded) => *store.trays().write() = loaded,
                Err(e) => web_sys::console::error_1(&format!("[APP] trays load failed: {e}").into()),
            }
            match api::list_plants(&experiment).await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} plants", loaded.len()).into());
                    *store.plants().write() = loaded;
                }
                Err(e) => web_sys::console::error_1(&format!("[APP] plants load failed: {e}").into()),
            }
        });
    });

    view! {
        <div class="app-layout">
            <ExperimentBar
                current_experiment=current_experiment
                set_current_experiment=set_current_experiment
            />

            <nav class="page-nav">
                {PAGES.iter().map(|&(value, label)| {
                    let tab_class = move || {
                        if current_page.get() == value { "page-tab active" } else { "page-tab" }
                    };
                    view! {
                        <button class=tab_class on:click=move |_| set_current_page.set(value)>{label}</button>
                    }
                }).collect_view()}
            </nav>

            <main class="main-content">
                {move || match current_page.get() {
                    Page::Overview => view! { <OverviewPage /> }.into_any(),
                    Page::Placement => view! { <PlacementWizard /> }.into_any(),
                    Page::Recipes => view! { <RecipesPage /> }.into_any(),
                    Page::Rotations => view! { <RotationsPage /> }.into_any(),
                    Page::Feeding => view! { <FeedingPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
